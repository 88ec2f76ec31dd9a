//! Redirecting or re-clocking all four channels one at a time is repetitive — the
//! builder applies the same stdout writer, stderr writer, and clock to the whole set.

use super::ColorLog;
use crate::channel::ChannelBuilder;
use crate::clock::{Clock, SystemClock};
use crate::output::{Destination, Sink};
use crate::severity::Severity;
use std::io::Write;
use std::sync::Arc;

pub struct ColorLogBuilder {
    stdout: Sink,
    stderr: Sink,
    clock: Arc<dyn Clock>,
}

impl Default for ColorLogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorLogBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stdout: Sink::stdout(),
            stderr: Sink::stderr(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the stream shared by Info, Warning, and Debug.
    #[must_use]
    pub fn stdout(mut self, writer: impl Write + Send + 'static) -> Self {
        self.stdout = Sink::custom(writer);
        self
    }

    /// Replaces the stream used by Error.
    #[must_use]
    pub fn stderr(mut self, writer: impl Write + Send + 'static) -> Self {
        self.stderr = Sink::custom(writer);
        self
    }

    /// Sends all four channels to a single writer, in call order.
    #[must_use]
    pub fn writer(mut self, writer: impl Write + Send + 'static) -> Self {
        let sink = Sink::custom(writer);
        self.stdout = sink.clone();
        self.stderr = sink;
        self
    }

    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    #[must_use]
    pub fn build(self) -> ColorLog {
        let channel = |severity: Severity| {
            let sink = match severity.destination() {
                Destination::Stderr => self.stderr.clone(),
                Destination::Stdout | Destination::Custom => self.stdout.clone(),
            };
            ChannelBuilder::new(severity)
                .sink(sink)
                .shared_clock(Arc::clone(&self.clock))
                .build()
        };

        ColorLog {
            error: channel(Severity::Error),
            info: channel(Severity::Info),
            warning: channel(Severity::Warning),
            debug: channel(Severity::Debug),
        }
    }
}
