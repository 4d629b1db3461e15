//! # VIKAS HTTP Server Configuration
//!
//! File: cli/src/commands/srv/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Resolves the effective settings for `vikas srv`. The `[server]` table of the
//! layered configuration (see `core::config`) provides the base; any flag given
//! on the command line overrides the matching field:
//!
//! 1. Command-line arguments (`--host`, `--port`, `--no-cors`)
//! 2. `[server]` from `VIKAS_CONFIG`, `.vikas.toml` or the user config
//! 3. Defaults (`127.0.0.1:8000`, CORS enabled)
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 9000
//! enable_cors = false
//! ```
//!
use clap::Parser;
use std::net::IpAddr;
use tracing::debug;
use vikas::core::config::{self, ServerSettings};
use vikas::core::error::{Result, VikasError};

/// # Server Command Arguments (`SrvArgs`)
///
/// Every field is optional so an omitted flag leaves the configured value alone.
#[derive(Parser, Debug)]
pub struct SrvArgs {
    /// Network interface to bind to, e.g. `0.0.0.0` for all interfaces.
    /// Overrides `server.host` (default `127.0.0.1`).
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// First port to try. If it is taken, the next few ports are tried in turn.
    /// Overrides `server.port` (default `8000`).
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Do not send CORS headers.
    #[arg(long)]
    pub no_cors: bool,
}

/// # Effective Server Configuration (`ServerConfig`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
}

impl ServerConfig {
    /// Applies command-line overrides on top of the configured `[server]` table.
    pub fn merge(settings: ServerSettings, args: &SrvArgs) -> Result<Self> {
        let merged = Self {
            host: args.host.unwrap_or(settings.host),
            port: args.port.unwrap_or(settings.port),
            enable_cors: settings.enable_cors && !args.no_cors,
        };
        if merged.port == 0 {
            return Err(VikasError::Config("port must be between 1 and 65535".to_string()).into());
        }
        debug!(?merged, "Merged server configuration");
        Ok(merged)
    }
}

/// Loads the layered configuration and merges `args` into its `[server]` table.
pub fn load_and_merge_config(args: &SrvArgs) -> Result<ServerConfig> {
    let cfg = config::load_config()?;
    ServerConfig::merge(cfg.server, args)
}
