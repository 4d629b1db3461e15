//! # VIKAS Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Error types for the command-line shell around the reply engine. The engine
//! itself (`crate::assistant`) is total and never fails; everything that can go
//! wrong lives at the edges: reading configuration, binding the HTTP server and
//! reading user input.
//!
//! ## Architecture
//!
//! - `VikasError`: a `thiserror` enum for the specific failure domains
//! - `Result<T>`: an alias for `anyhow::Result<T>` so handlers can attach context
//!
//! ## Examples
//!
//! ```rust
//! use anyhow::anyhow;
//! use vikas::core::error::{Result, VikasError};
//!
//! fn check_delay(ms: u64) -> Result<()> {
//!     if ms > 10_000 {
//!         return Err(anyhow!(VikasError::Config(format!("reply_delay_ms too large: {ms}"))));
//!     }
//!     Ok(())
//! }
//! # assert!(check_delay(20_000).is_err());
//! ```
//!
use thiserror::Error;

/// Custom error type for the VIKAS shell.
#[derive(Error, Debug)]
pub enum VikasError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Input error: {source}")]
    Input {
        #[from]
        source: std::io::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
