// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::{CliCommand, OptionArgs};

#[derive(Parser, Debug)]
#[command(name = "passforge", author, version, about, long_about = None)]
pub struct Args {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Fall back to a non-cryptographic generator if the OS source fails
    #[arg(long, global = true, env = "ALLOW_WEAK_RANDOM")]
    pub allow_weak_random: bool,

    /// Command to execute (interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
