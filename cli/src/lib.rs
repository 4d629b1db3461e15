//! # VIKAS Library Interface
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! The public library surface of the crate. The reply engine (`assistant`) and
//! the shared infrastructure (`core`) live here so the `vikas` binary, the
//! integration tests in `tests/` and any other front-end can use them through
//! `vikas::...`.
//!
pub mod assistant;
pub mod core;
