//! Where a channel's bytes go. Every channel owns one `Sink`, and the sink's mutex is the
//! only synchronization in the crate: a whole line is emitted while it is held.

mod buffer;

pub use buffer::SharedBuffer;

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// The stream a channel is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Stdout,
    Stderr,
    /// Any caller-supplied writer: a file, an in-memory buffer, a socket.
    Custom,
}

impl Destination {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lock-guarded writer. Callers never touch the lock directly.
///
/// Clones share the writer and its lock, so channels bound to the same custom writer
/// never interleave with each other either.
#[derive(Clone)]
pub struct Sink {
    destination: Destination,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Sink {
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            destination: Destination::Stdout,
            writer: Arc::new(Mutex::new(Box::new(io::stdout()))),
        }
    }

    #[must_use]
    pub fn stderr() -> Self {
        Self {
            destination: Destination::Stderr,
            writer: Arc::new(Mutex::new(Box::new(io::stderr()))),
        }
    }

    /// Binds to the process stream matching `destination`; `Custom` falls back to stdout.
    #[must_use]
    pub fn standard(destination: Destination) -> Self {
        match destination {
            Destination::Stderr => Self::stderr(),
            Destination::Stdout | Destination::Custom => Self::stdout(),
        }
    }

    #[must_use]
    pub fn custom(writer: impl Write + Send + 'static) -> Self {
        Self {
            destination: Destination::Custom,
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    #[must_use]
    pub const fn destination(&self) -> Destination {
        self.destination
    }

    /// Emits `line` as one uninterrupted unit, then flushes.
    ///
    /// A poisoned lock is recovered: a panic in another writer cannot leave the sink in a
    /// state worse than a partially written line.
    ///
    /// # Errors
    /// Whatever the underlying writer reports.
    pub fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(line)?;
        writer.flush()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("destination", &self.destination)
            .finish_non_exhaustive()
    }
}
