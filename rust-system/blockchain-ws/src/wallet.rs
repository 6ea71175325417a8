//! Wallet management commands

use crate::methods;
use blockchain_rpc::{params, Cmd, CmdError, RawCmd, Result};
use serde_json::Value;

/// Account name meaning "no account specified"
pub const DEFAULT_ACCOUNT: &str = "";

/// createencryptedwallet: `[account, description, passphrase]`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateEncryptedWalletCmd {
    id: Value,
    pub account: String,
    pub description: String,
    pub passphrase: String,
}

impl CreateEncryptedWalletCmd {
    pub fn new(
        id: impl Into<Value>,
        account: impl Into<String>,
        description: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            account: account.into(),
            description: description.into(),
            passphrase: passphrase.into(),
        }
    }
}

impl Cmd for CreateEncryptedWalletCmd {
    const METHOD: &'static str = methods::CREATE_ENCRYPTED_WALLET;

    fn id(&self) -> &Value {
        &self.id
    }

    fn parse(raw: &RawCmd) -> Result<Self> {
        params::expect_len(&raw.params, 3)?;

        let account = params::string(&raw.params, 0)?;
        let description = params::string(&raw.params, 1)?;
        let passphrase = params::string(&raw.params, 2)?;
        Ok(Self::new(raw.id.clone(), account, description, passphrase))
    }

    fn to_raw(&self) -> RawCmd {
        RawCmd::new(
            Self::METHOD,
            self.id.clone(),
            vec![
                Value::from(self.account.as_str()),
                Value::from(self.description.as_str()),
                Value::from(self.passphrase.as_str()),
            ],
        )
    }
}

/// getbalances: no parameters
#[derive(Debug, Clone, PartialEq)]
pub struct GetBalancesCmd {
    id: Value,
}

impl GetBalancesCmd {
    pub fn new(id: impl Into<Value>) -> Self {
        Self { id: id.into() }
    }
}

impl Cmd for GetBalancesCmd {
    const METHOD: &'static str = methods::GET_BALANCES;

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

// Shared by the commands taking a single optional account. More than one
// parameter is an invalid-params error rather than an arity error.
fn optional_account(params: &[Value]) -> Result<Vec<String>> {
    match params.len() {
        0 => Ok(Vec::new()),
        1 => Ok(vec![params::string(params, 0)?.to_string()]),
        _ => Err(CmdError::InvalidParams),
    }
}

fn account_from_opt_args(opt_args: &[String]) -> Result<String> {
    match opt_args {
        [] => Ok(DEFAULT_ACCOUNT.to_string()),
        [account] => Ok(account.clone()),
        _ => Err(CmdError::InvalidParams),
    }
}

fn account_params(account: &str) -> Vec<Value> {
    if account == DEFAULT_ACCOUNT {
        Vec::new()
    } else {
        vec![Value::from(account)]
    }
}

/// walletislocked: `[]` or `[account]`
#[derive(Debug, Clone, PartialEq)]
pub struct WalletIsLockedCmd {
    id: Value,
    pub account: String,
}

impl WalletIsLockedCmd {
    pub fn new(id: impl Into<Value>, account: Option<String>) -> Self {
        Self {
            id: id.into(),
            account: account.unwrap_or_else(|| DEFAULT_ACCOUNT.to_string()),
        }
    }

    /// Build from optional arguments holding at most one account
    pub fn with_opt_args(id: impl Into<Value>, opt_args: &[String]) -> Result<Self> {
        Ok(Self {
            id: id.into(),
            account: account_from_opt_args(opt_args)?,
        })
    }
}

impl Cmd for WalletIsLockedCmd {
    const METHOD: &'static str = methods::WALLET_IS_LOCKED;

    fn id(&self) -> &Value {
        &self.id
    }

    fn parse(raw: &RawCmd) -> Result<Self> {
        let opt_args = optional_account(&raw.params)?;
        Self::with_opt_args(raw.id.clone(), &opt_args)
    }

    fn to_raw(&self) -> RawCmd {
        RawCmd::new(Self::METHOD, self.id.clone(), account_params(&self.account))
    }
}

/// listalltransactions: `[]` or `[account]`
#[derive(Debug, Clone, PartialEq)]
pub struct ListAllTransactionsCmd {
    id: Value,
    pub account: String,
}

impl ListAllTransactionsCmd {
    pub fn new(id: impl Into<Value>, account: Option<String>) -> Self {
        Self {
            id: id.into(),
            account: account.unwrap_or_else(|| DEFAULT_ACCOUNT.to_string()),
        }
    }

    pub fn with_opt_args(id: impl Into<Value>, opt_args: &[String]) -> Result<Self> {
        Ok(Self {
            id: id.into(),
            account: account_from_opt_args(opt_args)?,
        })
    }
}

impl Cmd for ListAllTransactionsCmd {
    const METHOD: &'static str = methods::LIST_ALL_TRANSACTIONS;

    fn id(&self) -> &Value {
        &self.id
    }

    fn parse(raw: &RawCmd) -> Result<Self> {
        let opt_args = optional_account(&raw.params)?;
        Self::with_opt_args(raw.id.clone(), &opt_args)
    }

    fn to_raw(&self) -> RawCmd {
        RawCmd::new(Self::METHOD, self.id.clone(), account_params(&self.account))
    }
}
