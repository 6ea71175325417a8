//! Codec configuration

use serde::{Deserialize, Serialize};

/// Maximum inbound message size (32MB)
pub const MAX_MESSAGE_SIZE: usize = 32 * 1024 * 1024;

/// What `CommandRegistry::register` does when a method is already bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// The last registration for a method wins
    #[default]
    Replace,
    /// A second registration for a method is an error
    Reject,
}

/// Envelope codec configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Inbound payloads larger than this are rejected before parsing
    pub max_message_size: usize,
    /// Reject envelopes whose `jsonrpc` member is not "1.0"
    pub strict_version: bool,
    /// What a registry does when a method name is registered twice
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_message_size: MAX_MESSAGE_SIZE,
            strict_version: false,
            duplicate_policy: DuplicatePolicy::Replace,
        }
    }
}
