//! Annotation switches for the header that follows a channel prefix.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Bitset of header annotations. Combine with `|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u8);

impl Flags {
    /// No annotations at all — the prefix is followed directly by the message.
    pub const NONE: Self = Self(0);
    /// Local date as `YYYY/MM/DD`.
    pub const DATE: Self = Self(1);
    /// Local time as `HH:MM:SS`.
    pub const TIME: Self = Self(1 << 1);
    /// Microsecond resolution, `HH:MM:SS.ffffff`. Implies `TIME`.
    pub const MICROSECONDS: Self = Self(1 << 2);
    /// Full path of the calling file plus line number.
    pub const LONG_FILE: Self = Self(1 << 3);
    /// Final path component of the calling file plus line number. Overrides `LONG_FILE`.
    pub const SHORT_FILE: Self = Self(1 << 4);
    /// Render date and time in UTC rather than the local zone.
    pub const UTC: Self = Self(1 << 5);
    /// Place the prefix immediately before the message instead of at line start.
    pub const MSG_PREFIX: Self = Self(1 << 6);
    /// Date and time, the default for Info, Warning and Debug.
    pub const STD: Self = Self(Self::DATE.0 | Self::TIME.0);

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Unknown bits are dropped so every `Flags` value is one the renderer understands.
    #[must_use]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & 0x7f)
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when any file annotation is active.
    #[must_use]
    pub const fn wants_call_site(self) -> bool {
        self.0 & (Self::LONG_FILE.0 | Self::SHORT_FILE.0) != 0
    }
}

impl BitOr for Flags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(Flags, &str); 7] = [
            (Flags::DATE, "date"),
            (Flags::TIME, "time"),
            (Flags::MICROSECONDS, "microseconds"),
            (Flags::LONG_FILE, "longfile"),
            (Flags::SHORT_FILE, "shortfile"),
            (Flags::UTC, "utc"),
            (Flags::MSG_PREFIX, "msgprefix"),
        ];

        if self.is_empty() {
            return f.write_str("none");
        }

        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
