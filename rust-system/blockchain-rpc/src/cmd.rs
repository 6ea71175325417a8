//! The capability set shared by all typed commands

use crate::{RawCmd, Result};
use serde_json::Value;

/// A typed command that converts to and from a generic envelope.
///
/// `parse` validates the envelope parameters and builds the command;
/// `to_raw` lays the fields back out in their wire order. The method name
/// depends only on the implementing type.
pub trait Cmd: Sized {
    /// Method name carried in the envelope
    const METHOD: &'static str;

    /// Correlation id supplied by the caller, returned unchanged
    fn id(&self) -> &Value;

    fn method(&self) -> &'static str {
        Self::METHOD
    }

    fn parse(raw: &RawCmd) -> Result<Self>;

    fn to_raw(&self) -> RawCmd;

    /// JSON encoding of the command's envelope
    fn marshal_json(&self) -> Result<Vec<u8>> {
        self.to_raw().to_vec()
    }
}
