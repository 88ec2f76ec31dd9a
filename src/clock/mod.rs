//! Time source for line headers. Channels read the clock once per write, before taking
//! their lock, so a slow writer never skews the timestamps of waiting callers.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime};
use std::fmt::Debug;

/// `Send + Sync` so a single clock can be shared by all four channels across threads.
pub trait Clock: Send + Sync + Debug {
    /// Current instant, carrying the offset it should be displayed in.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in the process's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always reports the same instant; lets tests reconstruct exact output lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<FixedOffset>);

impl FixedClock {
    #[must_use]
    pub const fn new(at: DateTime<FixedOffset>) -> Self {
        Self(at)
    }

    /// Treats `at` as a zero-offset wall time, so it renders unchanged with or without `UTC`.
    #[must_use]
    pub fn from_naive(at: NaiveDateTime) -> Self {
        Self(at.and_utc().fixed_offset())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
