//! `colorlog` binary.
//!
//! Usage:
//!   colorlog                          Run the demo
//!   colorlog demo                     Run the demo
//!   colorlog log <severity> <msg>...  Write one line on a channel
//!   colorlog log --fatal <sev> <msg>  Write the line, then exit with status 1
//!   colorlog colors                   Show the color constants

use clap::Parser;
use colorlog::ColorLog;
use colorlog::cli::{Cli, Command, cmd_colors, cmd_demo, cmd_log};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let log = ColorLog::new();
    let mut stdout = io::stdout();

    match cli.command.unwrap_or(Command::Demo) {
        Command::Log {
            severity,
            message,
            fatal,
        } => cmd_log(&log, severity, &message, fatal),
        Command::Demo => cmd_demo(&log, &mut stdout),
        Command::Colors => cmd_colors(&mut stdout),
    }
}
