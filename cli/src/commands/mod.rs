//! # VIKAS Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates all top-level commands of the `vikas` CLI. Every
//! command is a thin front-end over the reply engine in `vikas::assistant`: it
//! gathers input, calls the engine synchronously and prints the result verbatim.
//!
//! ## Commands
//!
//! - `greet`: print the session-opening greeting
//! - `reply`: answer a single message
//! - `chat`: interactive session that remembers the user's name
//! - `guides`: list the service catalogue in match-priority order
//! - `srv`: JSON HTTP API over the reply engine
//!
//! Each command defines its own arguments struct and handler function.
//!

/// Interactive chat session (`vikas chat`).
pub mod chat;
/// Session-opening greeting (`vikas greet`).
pub mod greet;
/// Catalogue listing (`vikas guides`).
pub mod guides;
/// One-shot reply (`vikas reply`).
pub mod reply;
/// HTTP JSON API (`vikas srv`).
pub mod srv;
