//! A channel is one severity bound to a sink: it renders the prefix and header for every
//! message and hands the finished line to the sink in one write.

mod builder;

pub use builder::ChannelBuilder;

use crate::clock::Clock;
use crate::error::Error;
use crate::fmt::{CallSite, Flags, render_line};
use crate::output::{Destination, Sink};
use crate::severity::Severity;
use std::fmt::{self, Display, Write as _};
use std::sync::Arc;

/// Immutable after construction; share it by reference or behind an `Arc`.
#[derive(Debug)]
pub struct Channel {
    severity: Severity,
    prefix: String,
    flags: Flags,
    sink: Sink,
    clock: Arc<dyn Clock>,
}

impl Channel {
    /// Standard configuration for `severity`, writing to the real stdout/stderr.
    #[must_use]
    pub fn new(severity: Severity) -> Self {
        ChannelBuilder::new(severity).build()
    }

    #[must_use]
    pub fn builder(severity: Severity) -> ChannelBuilder {
        ChannelBuilder::new(severity)
    }

    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    #[must_use]
    pub const fn destination(&self) -> Destination {
        self.sink.destination()
    }

    /// Writes `msg`, adding a newline only if it does not already end with one.
    ///
    /// # Errors
    /// [`Error::Io`] if the destination rejects the write.
    #[track_caller]
    pub fn print(&self, msg: impl Display) -> Result<(), Error> {
        let site = CallSite::caller();
        let mut text = String::new();
        write!(text, "{msg}")?;
        self.emit(Some(site), text.as_bytes())
    }

    /// Writes `msg` followed by a newline, so a message that already ends in `\n`
    /// produces an empty line after it.
    ///
    /// # Errors
    /// [`Error::Io`] if the destination rejects the write.
    #[track_caller]
    pub fn println(&self, msg: impl Display) -> Result<(), Error> {
        let site = CallSite::caller();
        let mut text = String::new();
        writeln!(text, "{msg}")?;
        self.emit(Some(site), text.as_bytes())
    }

    /// Writes pre-formatted arguments: `channel.printf(format_args!("{n} items"))`.
    ///
    /// # Errors
    /// [`Error::Format`] if an argument's `Display` fails, [`Error::Io`] on write failure.
    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) -> Result<(), Error> {
        let site = CallSite::caller();
        let mut text = String::new();
        text.write_fmt(args)?;
        self.emit(Some(site), text.as_bytes())
    }

    /// Lets `write!(channel, ...)` and `writeln!(channel, ...)` target a channel directly.
    ///
    /// # Errors
    /// Same as [`Channel::printf`].
    #[track_caller]
    pub fn write_fmt(&self, args: fmt::Arguments<'_>) -> Result<(), Error> {
        let site = CallSite::caller();
        let mut text = String::new();
        text.write_fmt(args)?;
        self.emit(Some(site), text.as_bytes())
    }

    /// Writes arbitrary bytes verbatim, including invalid UTF-8.
    ///
    /// # Errors
    /// [`Error::Io`] if the destination rejects the write.
    #[track_caller]
    pub fn write_bytes(&self, msg: &[u8]) -> Result<(), Error> {
        self.emit(Some(CallSite::caller()), msg)
    }

    /// Writes with an explicit call site, for wrappers that capture the location themselves.
    ///
    /// # Errors
    /// [`Error::Io`] if the destination rejects the write.
    pub fn output(&self, site: CallSite, msg: &str) -> Result<(), Error> {
        self.emit(Some(site), msg.as_bytes())
    }

    /// Writes the message, then exits the process with status 1.
    #[track_caller]
    pub fn fatal(&self, msg: impl Display) -> ! {
        let _ = self.print(msg);
        std::process::exit(1)
    }

    /// Formatted form of [`Channel::fatal`].
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        let _ = self.printf(args);
        std::process::exit(1)
    }

    /// Line form of [`Channel::fatal`]: the message always gets its own newline.
    #[track_caller]
    pub fn fatalln(&self, msg: impl Display) -> ! {
        let _ = self.println(msg);
        std::process::exit(1)
    }

    /// Writes the message, then panics with it.
    #[track_caller]
    pub fn panic(&self, msg: impl Display) -> ! {
        let text = msg.to_string();
        let _ = self.print(&text);
        panic!("{text}")
    }

    /// Formatted form of [`Channel::panic`].
    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        let text = args.to_string();
        let _ = self.print(&text);
        panic!("{text}")
    }

    /// Line form of [`Channel::panic`].
    #[track_caller]
    pub fn panicln(&self, msg: impl Display) -> ! {
        let text = msg.to_string();
        let _ = self.println(&text);
        panic!("{text}")
    }

    fn emit(&self, site: Option<CallSite>, msg: &[u8]) -> Result<(), Error> {
        let now = self.clock.now();
        let mut line = Vec::with_capacity(self.prefix.len() + msg.len() + 48);
        render_line(&mut line, &self.prefix, self.flags, now, site, msg);
        self.sink.write_line(&line)?;
        Ok(())
    }
}
