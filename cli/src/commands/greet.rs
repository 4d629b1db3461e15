//! # VIKAS Greet Command
//!
//! File: cli/src/commands/greet.rs
//! Author: Christi Mahu
//!
//! Prints the onboarding message a new session opens with.
//!
use clap::Parser;
use tracing::info;
use vikas::assistant::greeting_reply;
use vikas::core::error::Result;

/// Arguments for `vikas greet`.
#[derive(Parser, Debug)]
pub struct GreetArgs {
    /// Print the greeting as JSON (`reply`, `kind`, `guide`).
    #[arg(long)]
    pub json: bool,
}

pub async fn handle_greet(args: GreetArgs) -> Result<()> {
    info!("Handling greet command");
    let greeting = greeting_reply();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&super::reply::ReplyOutput::from(greeting))?);
    } else {
        println!("{}", greeting.text);
    }
    Ok(())
}
