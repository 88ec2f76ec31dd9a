//! The color constants work outside the channels too; this shows each one.

use crate::fmt::{BLUE_COLOR, GREEN_COLOR, RED_COLOR, RESET_COLOR, YELLOW_COLOR};
use std::io::{self, Write};
use std::process::ExitCode;

#[must_use]
pub fn cmd_colors(out: &mut dyn Write) -> ExitCode {
    match write_samples(out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("colorlog: {e}");
            ExitCode::FAILURE
        }
    }
}

pub(super) fn write_samples(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "=== Custom colored output ===")?;
    for (name, color) in [
        ("red", RED_COLOR),
        ("green", GREEN_COLOR),
        ("yellow", YELLOW_COLOR),
        ("blue", BLUE_COLOR),
    ] {
        writeln!(out, "{color}Custom {name} message{RESET_COLOR}")?;
    }
    Ok(())
}
