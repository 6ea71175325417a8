//! Websocket extension commands for wallet and chain notifications
//!
//! These commands travel as JSON-RPC 1.0 envelopes over a persistent
//! websocket between a wallet and a chain server. Each command is a typed
//! struct implementing [`Cmd`]; [`WsCommand`] is the closed set of all of
//! them and is what the registry hands back for an incoming envelope.

use blockchain_rpc::{CmdError, CodecConfig, CommandRegistry, RawCmd, Result};
use serde_json::Value;

pub mod chain;
pub mod notify;
pub mod registry;
pub mod wallet;

// Re-exports for convenience
pub use blockchain_rpc::Cmd;
pub use chain::{GetBestBlockCmd, GetCurrentNetCmd, RescanCmd};
pub use notify::{NotifyNewTXsCmd, NotifySpentCmd};
pub use registry::{init, register_ws_commands, registry};
pub use wallet::{
    CreateEncryptedWalletCmd, GetBalancesCmd, ListAllTransactionsCmd, WalletIsLockedCmd,
};

/// Websocket extension method names
pub mod methods {
    /// Create a new encrypted wallet for an account
    pub const CREATE_ENCRYPTED_WALLET: &str = "createencryptedwallet";

    /// Get balances of all accounts
    pub const GET_BALANCES: &str = "getbalances";

    /// Get hash and height of the best block
    pub const GET_BEST_BLOCK: &str = "getbestblock";

    /// Get the network the server is running on
    pub const GET_CURRENT_NET: &str = "getcurrentnet";

    /// List all transactions of an account
    pub const LIST_ALL_TRANSACTIONS: &str = "listalltransactions";

    /// Request notifications for transactions paying to addresses
    pub const NOTIFY_NEW_TXS: &str = "notifynewtxs";

    /// Request a notification when an outpoint is spent
    pub const NOTIFY_SPENT: &str = "notifyspent";

    /// Rescan a block range for transactions touching addresses
    pub const RESCAN: &str = "rescan";

    /// Check whether an account's wallet is locked
    pub const WALLET_IS_LOCKED: &str = "walletislocked";
}

/// A websocket command that can be decoded in place.
pub trait WsCmd: Cmd + Into<WsCommand> + TryFrom<WsCommand, Error = WsCommand> {
    /// Decode `bytes` through the process-wide registry and replace `self`
    /// with the result. On error `self` is left as it was.
    fn unmarshal_json(&mut self, bytes: &[u8]) -> Result<()> {
        self.unmarshal_json_with(bytes, registry()?)
    }

    fn unmarshal_json_with(
        &mut self,
        bytes: &[u8],
        registry: &CommandRegistry<WsCommand>,
    ) -> Result<()> {
        let raw = RawCmd::from_slice(bytes)?;
        if raw.method != Self::METHOD {
            return Err(CmdError::MethodMismatch {
                expected: Self::METHOD,
                found: raw.method,
            });
        }

        let parsed = registry.parse(&raw)?;
        let found = parsed.method();
        *self = Self::try_from(parsed).map_err(|_| CmdError::Internal {
            expected: Self::METHOD,
            found,
        })?;
        Ok(())
    }
}

macro_rules! ws_commands {
    ($($variant:ident($cmd:ty)),+ $(,)?) => {
        /// Every websocket extension command
        #[derive(Debug, Clone, PartialEq)]
        pub enum WsCommand {
            $($variant($cmd),)+
        }

        impl WsCommand {
            pub fn id(&self) -> &Value {
                match self {
                    $(WsCommand::$variant(cmd) => cmd.id(),)+
                }
            }

            pub fn method(&self) -> &'static str {
                match self {
                    $(WsCommand::$variant(_) => <$cmd as Cmd>::METHOD,)+
                }
            }

            pub fn to_raw(&self) -> RawCmd {
                match self {
                    $(WsCommand::$variant(cmd) => cmd.to_raw(),)+
                }
            }
        }

        $(
            impl From<$cmd> for WsCommand {
                fn from(cmd: $cmd) -> Self {
                    WsCommand::$variant(cmd)
                }
            }

            impl TryFrom<WsCommand> for $cmd {
                type Error = WsCommand;

                fn try_from(cmd: WsCommand) -> std::result::Result<Self, WsCommand> {
                    match cmd {
                        WsCommand::$variant(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            }

            impl WsCmd for $cmd {}
        )+
    };
}

ws_commands! {
    CreateEncryptedWallet(CreateEncryptedWalletCmd),
    GetBalances(GetBalancesCmd),
    GetBestBlock(GetBestBlockCmd),
    GetCurrentNet(GetCurrentNetCmd),
    ListAllTransactions(ListAllTransactionsCmd),
    NotifyNewTXs(NotifyNewTXsCmd),
    NotifySpent(NotifySpentCmd),
    Rescan(RescanCmd),
    WalletIsLocked(WalletIsLockedCmd),
}

impl WsCommand {
    /// JSON encoding of the command's envelope
    pub fn marshal_json(&self) -> Result<Vec<u8>> {
        self.to_raw().to_vec()
    }
}

/// Decode a JSON payload into whichever command its method names
pub fn parse_cmd(bytes: &[u8]) -> Result<WsCommand> {
    parse_cmd_with(bytes, &CodecConfig::default())
}

pub fn parse_cmd_with(bytes: &[u8], config: &CodecConfig) -> Result<WsCommand> {
    let raw = RawCmd::from_slice_with(bytes, config)?;
    parse_raw_cmd(&raw)
}

/// Dispatch an already decoded envelope through the registry
pub fn parse_raw_cmd(raw: &RawCmd) -> Result<WsCommand> {
    registry()?.parse(raw)
}
