//! # VIKAS Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the VIKAS AI Assistant CLI.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the appropriate command handler
//!
//! ## Architecture
//!
//! The reply engine and configuration live in the `vikas` library crate
//! (`assistant` and `core`). This binary only adds the front-ends:
//! - `greet`, `reply` and `guides` answer once and exit
//! - `chat` runs an interactive session on the terminal
//! - `srv` serves the same engine as a JSON API
//!
//! All errors are propagated to this level for consistent handling.
//!
//! ## Examples
//!
//! ```bash
//! # Ask a single question
//! vikas reply --name "priya" I need my Sparsh life certificate renewed
//!
//! # Chat with increased verbosity
//! vikas -vv chat
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "vikas",
    about = "🙏 VIKAS AI Assistant: guided help for VIKAS CSC digital services",
    long_about = "Answer citizen questions about pension, Aadhaar, banking, PM schemes and more.\n\
                  Replies are built from a fixed service catalogue, in Hinglish.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// All available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Print the onboarding greeting.
    Greet(commands::greet::GreetArgs),
    /// Answer a single message.
    #[command(alias = "r")]
    Reply(commands::reply::ReplyArgs),
    /// Start an interactive chat session.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// List the service guides in match-priority order.
    Guides(commands::guides::GuidesArgs),
    /// Serve the assistant as an HTTP JSON API.
    Srv(commands::srv::SrvArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Greet(args) => commands::greet::handle_greet(args).await,
        Commands::Reply(args) => commands::reply::handle_reply(args).await,
        Commands::Chat(args) => commands::chat::handle_chat(args).await,
        Commands::Guides(args) => commands::guides::handle_guides(args).await,
        Commands::Srv(args) => commands::srv::handle_srv(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
