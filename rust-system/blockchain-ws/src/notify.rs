//! Notification requests

use crate::methods;
use blockchain_core::{OutPoint, ShaHash};
use blockchain_rpc::{params, Cmd, CmdError, Position, RawCmd, Result};
use serde_json::Value;

/// notifynewtxs: `[[address, ...]]`
#[derive(Debug, Clone, PartialEq)]
pub struct NotifyNewTXsCmd {
    id: Value,
    pub addresses: Vec<String>,
}

impl NotifyNewTXsCmd {
    pub fn new(id: impl Into<Value>, addresses: Vec<String>) -> Self {
        Self {
            id: id.into(),
            addresses,
        }
    }
}

impl Cmd for NotifyNewTXsCmd {
    const METHOD: &'static str = methods::NOTIFY_NEW_TXS;

    fn id(&self) -> &Value {
        &self.id
    }

    fn parse(raw: &RawCmd) -> Result<Self> {
        params::expect_len(&raw.params, 1)?;
        let addresses = params::string_array(&raw.params, 0)?;
        Ok(Self::new(raw.id.clone(), addresses))
    }

    fn to_raw(&self) -> RawCmd {
        RawCmd::new(
            Self::METHOD,
            self.id.clone(),
            vec![Value::from(self.addresses.clone())],
        )
    }
}

/// notifyspent: `[hash, index]` naming the outpoint to watch.
///
/// The hash is the display-order hex string of the transaction hash.
#[derive(Debug, Clone, PartialEq)]
pub struct NotifySpentCmd {
    id: Value,
    pub outpoint: OutPoint,
}

impl NotifySpentCmd {
    pub fn new(id: impl Into<Value>, outpoint: OutPoint) -> Self {
        Self {
            id: id.into(),
            outpoint,
        }
    }
}

impl Cmd for NotifySpentCmd {
    const METHOD: &'static str = methods::NOTIFY_SPENT;

    fn id(&self) -> &Value {
        &self.id
    }

    fn parse(raw: &RawCmd) -> Result<Self> {
        params::expect_len(&raw.params, 2)?;

        let hash: ShaHash = params::string(&raw.params, 0)?
            .parse()
            .map_err(|e| CmdError::InvalidValue {
                position: Position(0),
                reason: format!("is not a valid hash string: {}", e),
            })?;
        let index = params::uint32(&raw.params, 1)?;

        Ok(Self::new(raw.id.clone(), OutPoint::new(hash, index)))
    }

    fn to_raw(&self) -> RawCmd {
        RawCmd::new(
            Self::METHOD,
            self.id.clone(),
            vec![
                Value::from(self.outpoint.hash.to_string()),
                Value::from(self.outpoint.index),
            ],
        )
    }
}
