//! JSON-RPC 1.0 envelope codec and command plumbing
//!
//! A request on the wire is a generic envelope: a version tag, a method
//! name, an opaque correlation id and a positional parameter list. This
//! crate owns that envelope (`RawCmd`), the `Cmd` trait every typed
//! command implements, and the registry that maps method names to the
//! parsers producing those typed commands.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub mod cmd;
pub mod config;
pub mod error;
pub mod params;
pub mod registry;

// Re-exports for convenience
pub use cmd::Cmd;
pub use config::{CodecConfig, DuplicatePolicy, MAX_MESSAGE_SIZE};
pub use error::{CmdError, Position, Result};
pub use registry::{CommandRegistry, Parser};

/// Protocol version emitted on every encoded envelope
pub const JSONRPC_VERSION: &str = "1.0";

/// Generic JSON-RPC request envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCmd {
    #[serde(default)]
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub id: Value,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub params: Vec<Value>,
}

impl RawCmd {
    /// Build an envelope carrying the current protocol version
    pub fn new(method: impl Into<String>, id: Value, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            id,
            params,
        }
    }

    /// Decode an envelope using the default codec limits
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Self::from_slice_with(bytes, &CodecConfig::default())
    }

    /// Decode an envelope, enforcing the limits in `config`
    pub fn from_slice_with(bytes: &[u8], config: &CodecConfig) -> Result<Self> {
        if bytes.len() > config.max_message_size {
            return Err(CmdError::MessageTooLarge {
                size: bytes.len(),
                max: config.max_message_size,
            });
        }

        let raw: RawCmd = serde_json::from_slice(bytes)?;
        if config.strict_version && raw.jsonrpc != JSONRPC_VERSION {
            return Err(CmdError::UnsupportedVersion(raw.jsonrpc));
        }
        Ok(raw)
    }

    /// Encode the envelope to JSON bytes
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

// A missing or null `params` member is an empty parameter list.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Standard JSON-RPC response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    pub result: Option<Value>,
    pub error: Option<RpcError>,
    pub id: Value,
}

impl RpcResponse {
    pub fn failure(id: Value, err: &CmdError) -> Self {
        Self {
            result: None,
            error: Some(err.to_rpc_error()),
            id,
        }
    }
}

/// RPC error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<Value>,
}
