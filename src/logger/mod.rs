//! The four channels bundled together. A `ColorLog` is built once during startup and
//! shared by reference or `Arc`; nothing in it changes afterwards.

mod builder;

pub use builder::ColorLogBuilder;

use crate::channel::Channel;
use crate::severity::Severity;

/// One channel per severity. Fields stay private so a slot can never hold a channel
/// of another severity:
///
/// ```compile_fail
/// use colorlog::{Channel, ColorLog, Severity};
///
/// let mut log = ColorLog::new();
/// log.info = Channel::new(Severity::Error);
/// ```
#[derive(Debug)]
pub struct ColorLog {
    error: Channel,
    info: Channel,
    warning: Channel,
    debug: Channel,
}

impl Default for ColorLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorLog {
    /// Error on stderr, everything else on stdout, wall-clock timestamps.
    #[must_use]
    pub fn new() -> Self {
        ColorLogBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> ColorLogBuilder {
        ColorLogBuilder::new()
    }

    /// Red, stderr, annotated with the call site.
    #[must_use]
    pub const fn error(&self) -> &Channel {
        &self.error
    }

    #[must_use]
    pub const fn info(&self) -> &Channel {
        &self.info
    }

    #[must_use]
    pub const fn warning(&self) -> &Channel {
        &self.warning
    }

    #[must_use]
    pub const fn debug(&self) -> &Channel {
        &self.debug
    }

    /// Lookup by severity, for callers that pick the channel at runtime.
    #[must_use]
    pub const fn channel(&self, severity: Severity) -> &Channel {
        match severity {
            Severity::Error => &self.error,
            Severity::Info => &self.info,
            Severity::Warning => &self.warning,
            Severity::Debug => &self.debug,
        }
    }

    /// Channels in `Severity::all()` order.
    #[must_use]
    pub const fn channels(&self) -> [&Channel; 4] {
        [&self.error, &self.info, &self.warning, &self.debug]
    }
}
