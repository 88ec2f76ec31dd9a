//! The four fixed severities and the channel configuration each one implies.

use crate::fmt::{BLUE_COLOR, Flags, GREEN_COLOR, RED_COLOR, RESET_COLOR, YELLOW_COLOR};
use crate::output::Destination;
use std::fmt;
use std::str::FromStr;

/// One severity class. Every `ColorLog` holds exactly one channel per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Failures; the only severity routed to stderr and annotated with the call site.
    Error,
    /// Normal operational milestones.
    Info,
    /// Non-fatal anomalies.
    Warning,
    /// Development-time diagnostics.
    Debug,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Debug => "debug",
        }
    }

    /// Fixed-width label; `WARNING:` is already eight columns and is left as-is.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "ERROR:  ",
            Self::Info => "INFO:   ",
            Self::Warning => "WARNING:",
            Self::Debug => "DEBUG:  ",
        }
    }

    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Error => RED_COLOR,
            Self::Info => GREEN_COLOR,
            Self::Warning => YELLOW_COLOR,
            Self::Debug => BLUE_COLOR,
        }
    }

    #[must_use]
    pub const fn destination(self) -> Destination {
        match self {
            Self::Error => Destination::Stderr,
            Self::Info | Self::Warning | Self::Debug => Destination::Stdout,
        }
    }

    #[must_use]
    pub const fn flags(self) -> Flags {
        match self {
            Self::Error => Flags::STD.union(Flags::SHORT_FILE),
            Self::Info | Self::Warning | Self::Debug => Flags::STD,
        }
    }

    /// Color, label, reset, then one space — the reset comes before the space so the
    /// message itself is never colorized.
    #[must_use]
    pub fn prefix(self) -> String {
        format!("{}{}{RESET_COLOR} ", self.color(), self.label())
    }

    /// Used by the demo binary, help output, and tests.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Error, Self::Info, Self::Warning, Self::Debug]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can tell an unknown severity from other failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity: '{}'", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" | "err" => Ok(Self::Error),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "debug" => Ok(Self::Debug),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}
