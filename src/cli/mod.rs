//! Command-line front end for trying the channels out from a shell.

pub mod commands;

use crate::severity::Severity;
use clap::{Parser, Subcommand};

/// colorlog - Write colorized log lines from the command line.
#[derive(Parser)]
#[command(
    name = "colorlog",
    version,
    about = "Write colorized log lines from the command line"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write one line on a channel.
    Log {
        /// Channel to write on: error, info, warning (warn), debug
        #[arg(value_name = "SEVERITY")]
        severity: Severity,
        /// Message words, joined with spaces
        message: Vec<String>,
        /// Exit with status 1 after writing the line
        #[arg(long)]
        fatal: bool,
    },
    /// Walk through every channel with sample messages.
    Demo,
    /// Print text wrapped in each color constant.
    Colors,
}

pub use commands::{cmd_colors, cmd_demo, cmd_log};
