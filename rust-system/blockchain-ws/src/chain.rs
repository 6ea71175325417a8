//! Chain queries: current network, best block and rescans

use crate::methods;
use blockchain_core::{BlockHeight, ALL_SHAS};
use blockchain_rpc::{params, Cmd, CmdError, RawCmd, Result};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// getcurrentnet: no parameters
#[derive(Debug, Clone, PartialEq)]
pub struct GetCurrentNetCmd {
    id: Value,
}

impl GetCurrentNetCmd {
    pub fn new(id: impl Into<Value>) -> Self {
        Self { id: id.into() }
    }
}

impl Cmd for GetCurrentNetCmd {
    const METHOD: &'static str = methods::GET_CURRENT_NET;

    fn id(&self) -> &Value {
        &self.id
    }

    fn parse(raw: &RawCmd) -> Result<Self> {
        params::expect_len(&raw.params, 0)?;
        Ok(Self::new(raw.id.clone()))
    }

    fn to_raw(&self) -> RawCmd {
        RawCmd::new(Self::METHOD, self.id.clone(), Vec::new())
    }
}

/// getbestblock: no parameters
#[derive(Debug, Clone, PartialEq)]
pub struct GetBestBlockCmd {
    id: Value,
}

impl GetBestBlockCmd {
    pub fn new(id: impl Into<Value>) -> Self {
        Self { id: id.into() }
    }
}

impl Cmd for GetBestBlockCmd {
    const METHOD: &'static str = methods::GET_BEST_BLOCK;

    fn id(&self) -> &Value {
        &self.id
    }

    fn parse(raw: &RawCmd) -> Result<Self> {
        params::expect_len(&raw.params, 0)?;
        Ok(Self::new(raw.id.clone()))
    }

    fn to_raw(&self) -> RawCmd {
        RawCmd::new(Self::METHOD, self.id.clone(), Vec::new())
    }
}

/// rescan: `[begin_block, {address: _, ...}]` with an optional trailing
/// `end_block`.
///
/// Addresses travel as the keys of a JSON object; their values are
/// ignored on the way in and written as `{}` on the way out. An end block
/// of [`ALL_SHAS`] means the scan runs to the chain tip and is left off
/// the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct RescanCmd {
    id: Value,
    pub begin_block: i32,
    pub addresses: BTreeSet<String>,
    pub end_block: BlockHeight,
}

impl RescanCmd {
    pub fn new(
        id: impl Into<Value>,
        begin_block: i32,
        addresses: BTreeSet<String>,
        end_block: Option<BlockHeight>,
    ) -> Self {
        Self {
            id: id.into(),
            begin_block,
            addresses,
            end_block: end_block.unwrap_or(ALL_SHAS),
        }
    }

    /// Build from a list of optional arguments, which may be empty or hold
    /// a single end block.
    pub fn with_opt_args(
        id: impl Into<Value>,
        begin_block: i32,
        addresses: BTreeSet<String>,
        opt_args: &[BlockHeight],
    ) -> Result<Self> {
        let end_block = match opt_args {
            [] => None,
            [end] => Some(*end),
            _ => return Err(CmdError::TooManyOptArgs),
        };
        Ok(Self::new(id, begin_block, addresses, end_block))
    }

    /// Whether the rescan runs through the last known block
    pub fn is_unbounded(&self) -> bool {
        self.end_block == ALL_SHAS
    }
}

impl Cmd for RescanCmd {
    const METHOD: &'static str = methods::RESCAN;

    fn id(&self) -> &Value {
        &self.id
    }

    fn parse(raw: &RawCmd) -> Result<Self> {
        params::expect_min_len(&raw.params, 2)?;

        let begin = params::narrow_i32(params::number(&raw.params, 0)?);
        let addresses = params::object(&raw.params, 1)?.keys().cloned().collect();
        let opt_args = (2..raw.params.len())
            .map(|i| params::int64(&raw.params, i))
            .collect::<Result<Vec<_>>>()?;

        Self::with_opt_args(raw.id.clone(), begin, addresses, &opt_args)
    }

    fn to_raw(&self) -> RawCmd {
        let addresses: Map<String, Value> = self
            .addresses
            .iter()
            .map(|addr| (addr.clone(), Value::Object(Map::new())))
            .collect();

        let mut params = vec![Value::from(self.begin_block), Value::Object(addresses)];
        if !self.is_unbounded() {
            params.push(Value::from(self.end_block));
        }
        RawCmd::new(Self::METHOD, self.id.clone(), params)
    }
}
