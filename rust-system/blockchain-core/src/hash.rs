//! Double-SHA256 hash values and their string form

use crate::{BlockchainError, Hash256, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Size of a hash in bytes
pub const HASH_SIZE: usize = 32;

/// Length of the hex string form of a hash
pub const HASH_STRING_SIZE: usize = HASH_SIZE * 2;

/// A 32-byte hash.
///
/// The string form is byte-reversed hex, the order block explorers and
/// bitcoin-style RPC servers display transaction and block hashes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ShaHash(pub Hash256);

impl ShaHash {
    /// Create from raw bytes (internal byte order)
    pub fn from_bytes(bytes: Hash256) -> Self {
        Self(bytes)
    }

    /// Hash `data` twice with SHA-256
    pub fn double_sha256(data: &[u8]) -> Self {
        let first = Sha256::digest(data);
        let second = Sha256::digest(first);
        Self(second.into())
    }

    pub fn zero() -> Self {
        Self([0u8; HASH_SIZE])
    }
}

impl FromStr for ShaHash {
    type Err = BlockchainError;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() != HASH_STRING_SIZE {
            return Err(BlockchainError::InvalidHashLength(s.len()));
        }

        let mut bytes = [0u8; HASH_SIZE];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|e| BlockchainError::InvalidHex(e.to_string()))?;
        bytes.reverse();
        Ok(Self(bytes))
    }
}

impl fmt::Display for ShaHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        write!(f, "{}", hex::encode(reversed))
    }
}

impl Serialize for ShaHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ShaHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
