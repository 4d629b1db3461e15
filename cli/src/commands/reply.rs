//! # VIKAS Reply Command
//!
//! File: cli/src/commands/reply.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Answers a single message and exits. The message words are joined with
//! single spaces, so `vikas reply aadhaar address update` and
//! `vikas reply "aadhaar address update"` are equivalent. An empty message is
//! allowed and yields the clarifying follow-up.
//!
//! ## Examples
//!
//! ```bash
//! vikas reply --name "priya" I need my Sparsh life certificate renewed
//! vikas reply --json help
//! ```
//!
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};
use vikas::assistant::{compose_reply, Reply, ReplyKind};
use vikas::core::{config, error::Result};

/// Arguments for `vikas reply`.
#[derive(Parser, Debug)]
pub struct ReplyArgs {
    /// Name to greet the user with. Falls back to `chat.name` from configuration.
    #[arg(long, short)]
    pub name: Option<String>,

    /// Print the reply as JSON (`reply`, `kind`, `guide`) instead of plain text.
    #[arg(long)]
    pub json: bool,

    /// The user's message.
    #[arg(num_args = 0..)]
    pub message: Vec<String>,
}

/// JSON form of a reply, shared by `reply --json`, `greet --json` and the HTTP API.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ReplyOutput {
    pub reply: String,
    pub kind: ReplyKind,
    pub guide: Option<&'static str>,
}

impl From<Reply> for ReplyOutput {
    fn from(reply: Reply) -> Self {
        Self {
            reply: reply.text,
            kind: reply.kind,
            guide: reply.guide,
        }
    }
}

pub async fn handle_reply(args: ReplyArgs) -> Result<()> {
    info!("Handling reply command");
    let cfg = config::load_config()?;
    let name = args.name.or(cfg.chat.name);
    let message = args.message.join(" ");

    let reply = compose_reply(name.as_deref(), &message);
    debug!(kind = ?reply.kind, guide = ?reply.guide, "reply composed");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ReplyOutput::from(reply))?);
    } else {
        println!("{}", reply.text);
    }
    Ok(())
}
