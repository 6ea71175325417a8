//! Command parsing errors

use crate::RpcError;
use std::fmt;

/// Zero-based position of a parameter, displayed as a 1-based ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub usize);

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0 + 1;
        match n {
            1 => write!(f, "first"),
            2 => write!(f, "second"),
            3 => write!(f, "third"),
            4 => write!(f, "fourth"),
            5 => write!(f, "fifth"),
            _ => {
                let suffix = match (n % 10, n % 100) {
                    (1, r) if r != 11 => "st",
                    (2, r) if r != 12 => "nd",
                    (3, r) if r != 13 => "rd",
                    _ => "th",
                };
                write!(f, "{}{}", n, suffix)
            }
        }
    }
}

/// Errors produced while decoding, validating or dispatching a command
#[derive(Debug, thiserror::Error)]
pub enum CmdError {
    #[error("Incorrect number of parameters")]
    WrongNumberOfParams,

    #[error("Invalid parameter")]
    InvalidParams,

    #[error("Too many optional arguments")]
    TooManyOptArgs,

    #[error("{position} parameter must be {expected}")]
    TypeMismatch {
        position: Position,
        expected: &'static str,
    },

    #[error("{position} parameter {reason}")]
    InvalidValue { position: Position, reason: String },

    #[error("Internal error: parser for {expected} produced a {found} command")]
    Internal {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Method mismatch: expected {expected}, found {found}")]
    MethodMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("Method not found: {0}")]
    UnknownMethod(String),

    #[error("Method already registered: {0}")]
    DuplicateMethod(String),

    #[error("Command registry unavailable: {0}")]
    RegistryUnavailable(String),

    #[error("Unsupported JSON-RPC version: {0:?}")]
    UnsupportedVersion(String),

    #[error("Message of {size} bytes exceeds limit of {max} bytes")]
    MessageTooLarge { size: usize, max: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CmdError>;

impl CmdError {
    /// JSON-RPC error code for this error
    pub fn code(&self) -> i32 {
        match self {
            CmdError::WrongNumberOfParams | CmdError::TooManyOptArgs => -1,
            CmdError::InvalidParams
            | CmdError::TypeMismatch { .. }
            | CmdError::InvalidValue { .. } => -8,
            CmdError::UnknownMethod(_) => -32601,
            CmdError::UnsupportedVersion(_) | CmdError::MessageTooLarge { .. } => -32600,
            CmdError::Json(_) => -32700,
            CmdError::Internal { .. }
            | CmdError::MethodMismatch { .. }
            | CmdError::DuplicateMethod(_)
            | CmdError::RegistryUnavailable(_) => -32603,
        }
    }

    pub fn to_rpc_error(&self) -> RpcError {
        RpcError {
            code: self.code(),
            message: self.to_string(),
            data: None,
        }
    }
}
