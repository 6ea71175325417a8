//! Process-wide registry of websocket extension commands

use crate::{
    methods, Cmd, CreateEncryptedWalletCmd, GetBalancesCmd, GetBestBlockCmd, GetCurrentNetCmd,
    ListAllTransactionsCmd, NotifyNewTXsCmd, NotifySpentCmd, RescanCmd, WalletIsLockedCmd,
    WsCommand,
};
use blockchain_rpc::{CmdError, CommandRegistry, DuplicatePolicy, RawCmd, Result};
use std::sync::OnceLock;
use tracing::{debug, error};

type Registration = fn(&mut CommandRegistry<WsCommand>) -> Result<()>;

// Outcome of the first build. A failure is reported to every caller.
static REGISTRY: OnceLock<std::result::Result<CommandRegistry<WsCommand>, String>> =
    OnceLock::new();

fn parse_as<C>(raw: &RawCmd) -> Result<WsCommand>
where
    C: Cmd + Into<WsCommand>,
{
    C::parse(raw).map(Into::into)
}

/// Bind every websocket extension method to its parser
pub fn register_ws_commands(registry: &mut CommandRegistry<WsCommand>) -> Result<()> {
    registry.register(methods::CREATE_ENCRYPTED_WALLET, parse_as::<CreateEncryptedWalletCmd>)?;
    registry.register(methods::GET_BALANCES, parse_as::<GetBalancesCmd>)?;
    registry.register(methods::GET_BEST_BLOCK, parse_as::<GetBestBlockCmd>)?;
    registry.register(methods::GET_CURRENT_NET, parse_as::<GetCurrentNetCmd>)?;
    registry.register(methods::LIST_ALL_TRANSACTIONS, parse_as::<ListAllTransactionsCmd>)?;
    registry.register(methods::NOTIFY_NEW_TXS, parse_as::<NotifyNewTXsCmd>)?;
    registry.register(methods::NOTIFY_SPENT, parse_as::<NotifySpentCmd>)?;
    registry.register(methods::RESCAN, parse_as::<RescanCmd>)?;
    registry.register(methods::WALLET_IS_LOCKED, parse_as::<WalletIsLockedCmd>)?;
    Ok(())
}

fn build(register: Registration) -> Result<CommandRegistry<WsCommand>> {
    let mut registry = CommandRegistry::with_policy(DuplicatePolicy::Reject);
    register(&mut registry)?;
    Ok(registry)
}

fn resolve(
    built: &std::result::Result<CommandRegistry<WsCommand>, String>,
) -> Result<&CommandRegistry<WsCommand>> {
    built
        .as_ref()
        .map_err(|reason| CmdError::RegistryUnavailable(reason.clone()))
}

/// Populate the process-wide registry.
///
/// Call once during start-up, before request handlers run. Later calls,
/// and [`registry`] itself, return the outcome of the first one: if
/// registration failed, every call reports
/// [`CmdError::RegistryUnavailable`].
pub fn init() -> Result<&'static CommandRegistry<WsCommand>> {
    let built = REGISTRY.get_or_init(|| match build(register_ws_commands) {
        Ok(registry) => {
            debug!(commands = registry.len(), "websocket command registry ready");
            Ok(registry)
        }
        Err(err) => {
            error!(error = %err, "websocket command registration failed");
            Err(err.to_string())
        }
    });
    resolve(built)
}

/// The process-wide registry, read-only once built
pub fn registry() -> Result<&'static CommandRegistry<WsCommand>> {
    init()
}
