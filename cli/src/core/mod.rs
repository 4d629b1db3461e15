//! # VIKAS Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Foundational pieces shared by every command front-end:
//! - `config`: configuration loading, merging, and validation
//! - `error`: error types and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use vikas::core::config; // For loading configuration
//! use vikas::core::error::{Result, VikasError}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
