//! # VIKAS Reply Engine
//!
//! File: cli/src/assistant/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module is the decision-making core of the VIKAS assistant. Given the
//! user's (optional) name and a free-text message it picks a service guide from
//! a fixed keyword catalogue and renders a multi-part Hinglish reply: greeting,
//! numbered steps, reassurance, suggested topics and the closing line.
//!
//! ## Architecture
//!
//! Components, leaves first:
//! - `catalogue`: the ordered, static list of `ServiceGuide`s and shared strings
//! - `name`: `DisplayName` normalization of the raw user name
//! - `matcher`: first-match keyword scan over the catalogue
//! - `ambiguity`: short / "help"-only message detection
//! - `suggestions`: the bounded, deduplicated suggestion line
//! - `text`: whitespace and length rules shared by the above
//! - `reply`: orchestration into one of the four reply shapes
//!
//! The engine is stateless. The only state that survives between turns, the
//! user's name, is owned by the caller and passed in on every call, which keeps
//! replies deterministic and safe to compute from any number of sessions at once.
//! Nothing here blocks, performs I/O or returns an error.
//!
//! ## Usage
//!
//! ```rust
//! use vikas::assistant::{generate_reply, initial_greeting};
//!
//! let welcome = initial_greeting();
//! let reply = generate_reply(Some("priya"), "I need my Sparsh life certificate renewed");
//! assert!(reply.starts_with("Namaste Priya ji!"));
//! ```
//!
pub mod ambiguity;
pub mod catalogue;
pub mod matcher;
pub mod name;
pub mod reply;
pub mod suggestions;
pub mod text;

pub use catalogue::{find_guide, guides, ServiceGuide, CLOSING_LINE};
pub use matcher::match_guide;
pub use name::DisplayName;
pub use reply::{compose_reply, generate_reply, greeting_reply, initial_greeting, Reply, ReplyKind};
