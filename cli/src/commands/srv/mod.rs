//! # VIKAS HTTP API Server
//!
//! File: cli/src/commands/srv/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Serves the assistant as a small JSON API for local web front-ends:
//! - Port binding (with automatic fallback if the port is in use)
//! - Host interface binding
//! - Optional CORS
//!
//! ## Architecture
//!
//! - `config.rs`: merges command-line flags with the `[server]` configuration
//! - `server_logic.rs`: the Axum router, handlers and server lifecycle
//!
//! ## Examples
//!
//! ```bash
//! # Serve on 127.0.0.1:8000
//! vikas srv
//!
//! # Listen on all interfaces, without CORS headers
//! vikas srv --host 0.0.0.0 --port 9000 --no-cors
//! ```
//!
use tracing::info;
use vikas::core::error::Result;

pub use config::SrvArgs;

pub mod config;
pub mod server_logic;

/// Entry point for `vikas srv`.
pub async fn handle_srv(args: SrvArgs) -> Result<()> {
    info!("Handling srv command with args: {:?}", args);

    let config = config::load_and_merge_config(&args)?;
    info!("Effective server config: {:?}", config);

    server_logic::run_server(config).await?;
    Ok(())
}
