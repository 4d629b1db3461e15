//! # VIKAS CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each `.rs` file in
//! that directory is compiled as its own test crate and pulls this module in
//! with `mod common;`.
//!
//! Commands built with [`isolated_cmd`] never see the developer's own
//! configuration: `VIKAS_CONFIG` points at a file inside a temporary directory,
//! which is also the working directory.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// Configuration used when a test does not care: no name, no typing delay.
pub const QUIET_CONFIG: &str = "[chat]\nreply_delay_ms = 0\n";

/// Returns a command for the compiled `vikas` binary.
pub fn vikas_cmd() -> Command {
    Command::cargo_bin("vikas").expect("Failed to find vikas binary for testing")
}

/// Returns a `vikas` command whose configuration is exactly `config_toml`.
///
/// The returned `TempDir` must be kept alive for as long as the command runs.
pub fn isolated_cmd(config_toml: &str) -> (Command, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = dir.path().join("vikas.toml");
    fs::write(&config_path, config_toml).expect("Failed to write test config");

    let mut cmd = vikas_cmd();
    cmd.current_dir(dir.path())
        .env("VIKAS_CONFIG", &config_path)
        .env_remove("RUST_LOG");
    (cmd, dir)
}
