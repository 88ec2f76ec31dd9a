//! The scriptable case: emit a single line on the named channel.

use crate::logger::ColorLog;
use crate::severity::Severity;
use std::process::ExitCode;

/// With `fatal`, the line is written and the process exits with status 1.
#[must_use]
pub fn cmd_log(log: &ColorLog, severity: Severity, words: &[String], fatal: bool) -> ExitCode {
    let channel = log.channel(severity);
    let msg = words.join(" ");
    if fatal {
        channel.fatalln(&msg);
    }

    match channel.println(msg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("colorlog: {e}");
            ExitCode::FAILURE
        }
    }
}
