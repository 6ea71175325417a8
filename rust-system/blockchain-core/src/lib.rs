//! Blockchain domain values shared by the RPC layers
//!
//! Only the syntactic side of these values lives here: a hash is 32 bytes
//! that can be parsed from and rendered to its hex string form, an outpoint
//! names an output of a transaction by hash and index.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod hash;

pub use hash::{ShaHash, HASH_SIZE, HASH_STRING_SIZE};

/// 256-bit hash type used throughout the blockchain
pub type Hash256 = [u8; 32];

/// Block height type used by rescans (signed, as carried on the wire)
pub type BlockHeight = i64;

/// End-block sentinel meaning "scan through the last known block"
pub const ALL_SHAS: BlockHeight = i64::MAX;

/// Transaction outpoint reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    pub hash: ShaHash,
    pub index: u32,
}

impl OutPoint {
    pub fn new(hash: ShaHash, index: u32) -> Self {
        Self { hash, index }
    }
}

impl fmt::Display for OutPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.hash, self.index)
    }
}

/// Error types for blockchain value parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockchainError {
    #[error("Invalid hash string length: expected 64 characters, got {0}")]
    InvalidHashLength(usize),

    #[error("Invalid hex in hash string: {0}")]
    InvalidHex(String),
}

pub type Result<T> = std::result::Result<T, BlockchainError>;
