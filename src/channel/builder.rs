//! Channels come pre-configured per severity; the builder only swaps the parts tests
//! and redirecting callers need: writer, clock, and annotation flags.

use super::Channel;
use crate::clock::{Clock, SystemClock};
use crate::fmt::Flags;
use crate::output::Sink;
use crate::severity::Severity;
use std::io::Write;
use std::sync::Arc;

/// Starts from the severity's defaults; every setter is optional.
#[derive(Debug)]
pub struct ChannelBuilder {
    severity: Severity,
    flags: Flags,
    sink: Option<Sink>,
    clock: Arc<dyn Clock>,
}

impl ChannelBuilder {
    #[must_use]
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            flags: severity.flags(),
            sink: None,
            clock: Arc::new(SystemClock),
        }
    }

    /// Redirects output away from the standard stream, e.g. into a file or a `SharedBuffer`.
    #[must_use]
    pub fn writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.sink = Some(Sink::custom(writer));
        self
    }

    #[must_use]
    pub(crate) fn sink(mut self, sink: Sink) -> Self {
        self.sink = Some(sink);
        self
    }

    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// One clock shared by several channels, as `ColorLogBuilder` does.
    #[must_use]
    pub fn shared_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub const fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn build(self) -> Channel {
        let severity = self.severity;
        Channel {
            severity,
            prefix: severity.prefix(),
            flags: self.flags,
            sink: self
                .sink
                .unwrap_or_else(|| Sink::standard(severity.destination())),
            clock: self.clock,
        }
    }
}
