//! Sample session touching every channel and every write style.

use crate::error::Error;
use crate::logger::ColorLog;
use chrono::Local;
use std::io::Write;
use std::process::ExitCode;

#[must_use]
pub fn cmd_demo(log: &ColorLog, out: &mut dyn Write) -> ExitCode {
    match run(log, out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("colorlog: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(log: &ColorLog, out: &mut dyn Write) -> Result<(), Error> {
    writeln!(out, "=== colorlog demo ===")?;

    log.info().println("Application started successfully")?;
    log.info()
        .printf(format_args!("Current time: {}", Local::now().format("%H:%M:%S")))?;

    log.warning().println("This is a warning message")?;
    log.warning().printf(format_args!("Memory usage: {:.1}%", 85.7))?;

    log.debug().println("Debug information")?;
    log.debug().printf(format_args!("Processing {} items", 42))?;

    log.error().println("This is an error message")?;
    log.error().printf(format_args!(
        "Failed to connect to database: {}",
        "connection timeout"
    ))?;

    writeln!(out)?;
    super::colors::write_samples(out)?;

    writeln!(out)?;
    writeln!(out, "=== demo complete ===")?;
    Ok(())
}
