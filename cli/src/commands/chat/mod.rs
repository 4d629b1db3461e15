//! # VIKAS Interactive Chat
//!
//! File: cli/src/commands/chat/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A terminal chat with the assistant. The session opens with the onboarding
//! greeting, then answers each line typed on stdin until the user leaves.
//!
//! ## Session Commands
//!
//! - `/name NEW NAME`: remember a new name for later replies (`/name` alone forgets it)
//! - `/history`: print the messages exchanged so far
//! - `bye`, `exit`, `quit` or end-of-input: end the session
//!
//! Blank lines are ignored. Every other line is sent to the reply engine.
//!
//! ## Reply Timing
//!
//! The reply is computed as soon as the line is read; the front-end then waits
//! `reply_delay_ms` (from `--delay-ms` or `chat.reply_delay_ms`) before printing
//! it, imitating a typing indicator. The engine is never aware of the delay.
//!
//! ```bash
//! vikas chat --name "ramesh kumar"
//! vikas chat --delay-ms 0 < questions.txt
//! ```
//!
use clap::Parser;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use vikas::core::config;
use vikas::core::error::{Result, VikasError};

pub mod session;

use session::ChatSession;

const EXIT_WORDS: [&str; 3] = ["bye", "exit", "quit"];
const ASSISTANT_LABEL: &str = "VIKAS:";
const PROMPT: &str = "You: ";

/// Arguments for `vikas chat`.
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Name to greet the user with. Falls back to `chat.name` from configuration.
    #[arg(long, short)]
    pub name: Option<String>,

    /// Milliseconds to wait before printing each reply. Overrides `chat.reply_delay_ms`.
    #[arg(long, value_parser = clap::value_parser!(u64).range(0..=config::MAX_REPLY_DELAY_MS))]
    pub delay_ms: Option<u64>,
}

/// What a single input line asks the session to do.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Exit,
    Rename(&'a str),
    History,
    Message(&'a str),
}

fn parse_line(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    if EXIT_WORDS.iter().any(|word| trimmed.eq_ignore_ascii_case(word)) {
        return Command::Exit;
    }
    if trimmed == "/history" {
        return Command::History;
    }
    if trimmed == "/name" {
        return Command::Rename("");
    }
    if let Some(rest) = trimmed.strip_prefix("/name ") {
        return Command::Rename(rest);
    }
    Command::Message(line)
}

pub async fn handle_chat(args: ChatArgs) -> Result<()> {
    info!("Handling chat command");
    let cfg = config::load_config()?;
    let name = args.name.or(cfg.chat.name);
    let delay = Duration::from_millis(args.delay_ms.unwrap_or(cfg.chat.reply_delay_ms));

    let session = ChatSession::new(name);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_session(session, stdin, &mut stdout, delay).await?;
    Ok(())
}

/// Drives one session over `input`/`output` and returns the finished session.
async fn run_session<R, W>(
    mut session: ChatSession,
    input: R,
    output: &mut W,
    delay: Duration,
) -> Result<ChatSession>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if let Some(greeting) = session.messages().first() {
        writeln!(output, "{}\n{}\n", ASSISTANT_LABEL, greeting.content)?;
    }

    let mut lines = input.lines();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let line = match lines.next_line().await.map_err(VikasError::from)? {
            Some(line) => line,
            None => {
                debug!("Input closed, ending chat session");
                writeln!(output)?;
                break;
            }
        };

        match parse_line(&line) {
            Command::Exit => break,
            Command::History => {
                for message in session.messages() {
                    let first_line = message.content.lines().next().unwrap_or_default();
                    writeln!(output, "[{}] {}: {}", message.id, message.role, first_line)?;
                }
            }
            Command::Rename(raw) => {
                session.set_name(raw);
                debug!(has_name = session.name().is_some(), "Session name updated");
            }
            Command::Message(text) => {
                let Some(reply) = session.submit(text) else {
                    continue;
                };
                debug!(kind = ?reply.kind, guide = ?reply.guide, "reply ready");
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                writeln!(output, "\n{}\n{}\n", ASSISTANT_LABEL, reply.text)?;
            }
        }
    }

    info!(messages = session.messages().len(), "Chat session ended");
    writeln!(output, "Session ended.")?;
    Ok(session)
}
