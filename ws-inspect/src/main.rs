//! ws-inspect - decode and re-encode websocket extension commands
//!
//! Reads a JSON-RPC envelope, dispatches it through the command registry
//! and prints the typed command together with its canonical encoding.
//! Useful for checking what a wallet client actually sends.

use anyhow::{Context, Result};
use blockchain_rpc::{CodecConfig, CommandRegistry, RawCmd, RpcResponse};
use blockchain_ws::{register_ws_commands, WsCommand};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Websocket command inspector CLI
#[derive(Parser)]
#[command(name = "ws-inspect")]
#[command(about = "Decode and re-encode websocket extension commands", long_about = None)]
struct Cli {
    /// Codec configuration file (TOML)
    #[arg(long, env = "WS_INSPECT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse an envelope given as an argument or on stdin
    Parse {
        /// Envelope JSON; read from stdin when omitted
        json: Option<String>,
    },
    /// List registered methods
    Methods,
}

fn load_config(path: Option<&Path>) -> Result<CodecConfig> {
    let Some(path) = path else {
        return Ok(CodecConfig::default());
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    debug!(path = %path.display(), "loaded codec config");
    Ok(config)
}

fn read_input(arg: Option<String>) -> Result<String> {
    match arg {
        Some(json) => Ok(json),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read envelope from stdin")?;
            Ok(buf)
        }
    }
}

fn inspect(
    registry: &CommandRegistry<WsCommand>,
    config: &CodecConfig,
    input: &str,
) -> Result<bool> {
    let parsed = RawCmd::from_slice_with(input.trim().as_bytes(), config)
        .and_then(|raw| registry.parse(&raw));

    match parsed {
        Ok(cmd) => {
            let encoded = String::from_utf8(cmd.marshal_json()?)
                .context("Encoded envelope is not UTF-8")?;
            let report = json!({
                "method": cmd.method(),
                "id": cmd.id(),
                "command": format!("{:?}", cmd),
                "encoded": encoded,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(true)
        }
        Err(err) => {
            let id = serde_json::from_str::<serde_json::Value>(input)
                .ok()
                .and_then(|v| v.get("id").cloned())
                .unwrap_or_default();
            let response = RpcResponse::failure(id, &err);
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(false)
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let mut registry = CommandRegistry::with_policy(config.duplicate_policy);
    register_ws_commands(&mut registry).context("Failed to register websocket commands")?;
    info!(commands = registry.len(), "registry ready");

    match cli.command {
        Command::Methods => {
            for method in registry.methods() {
                println!("{}", method);
            }
            Ok(())
        }
        Command::Parse { json } => {
            let input = read_input(json)?;
            if !inspect(&registry, &config, &input)? {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
