// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Password strength analyzer and hashing lab", long_about = None)]
pub struct Args {
    /// Print machine-readable JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to execute (interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
