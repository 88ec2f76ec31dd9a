//! `colorlog` - colorized console logging with four pre-configured channels.
//!
//! Each channel prints a fixed color-coded label followed by the date, the time and,
//! for errors, the calling file and line:
//!
//! ```text
//! ERROR:   2025/08/07 09:00:00 main.rs:12: connection refused
//! INFO:    2025/08/07 09:00:00 application started
//! WARNING: 2025/08/07 09:00:00 memory usage at 85.7%
//! DEBUG:   2025/08/07 09:00:00 processing 42 items
//! ```
//!
//! Error goes to stderr; Info, Warning and Debug go to stdout. Every line is written
//! in one locked write, so concurrent callers never interleave partial lines.
//!
//! # Example
//!
//! ```
//! use colorlog::{ColorLog, SharedBuffer};
//!
//! let out = SharedBuffer::new();
//! let log = ColorLog::builder().writer(out.clone()).build();
//!
//! log.info().println("Application started").unwrap();
//! log.warning().printf(format_args!("Memory usage: {:.1}%", 85.7)).unwrap();
//!
//! assert!(out.contents().contains("Application started"));
//! ```
//!
//! # Features
//!
//! - `cli` (default): builds the `colorlog` demo binary

pub mod channel;
pub mod clock;
pub mod error;
pub mod fmt;
pub mod global;
pub mod logger;
pub mod output;
pub mod severity;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

pub use channel::{Channel, ChannelBuilder};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::Error;
pub use fmt::{
    BLUE_COLOR, CallSite, Flags, GREEN_COLOR, RED_COLOR, RESET_COLOR, YELLOW_COLOR, colorize,
};
pub use global::{global, init, is_initialized};
pub use logger::{ColorLog, ColorLogBuilder};
pub use output::{Destination, SharedBuffer, Sink};
pub use severity::{ParseSeverityError, Severity};
