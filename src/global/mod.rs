//! Process-wide default `ColorLog`, for code that wants the channels without threading a
//! handle through every call.
//!
//! Uses `OnceLock` so the set is created exactly once, even if several threads race to
//! log first. Explicitly constructed `ColorLog` values remain the primary API.

use crate::logger::ColorLog;
use std::sync::OnceLock;

static GLOBAL: OnceLock<ColorLog> = OnceLock::new();

/// The installed set, or the standard stdout/stderr set if nothing was installed.
pub fn global() -> &'static ColorLog {
    GLOBAL.get_or_init(ColorLog::new)
}

/// Installs `log` as the process-wide set.
///
/// # Errors
/// Hands `log` back if the global set was already initialized, either by an earlier
/// `init` or by a log call that triggered the default.
pub fn init(log: ColorLog) -> Result<(), ColorLog> {
    GLOBAL.set(log)
}

#[must_use]
pub fn is_initialized() -> bool {
    GLOBAL.get().is_some()
}

/// Formats and writes to the global Error channel, recording the call site.
/// Write failures are discarded; call `colorlog::global().error().printf` to observe them.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        let _ = $crate::global().error().printf(::std::format_args!($($arg)*));
    }};
}

/// Formats and writes to the global Info channel.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {{
        let _ = $crate::global().info().printf(::std::format_args!($($arg)*));
    }};
}

/// Formats and writes to the global Warning channel.
#[macro_export]
macro_rules! warning {
    ($($arg:tt)*) => {{
        let _ = $crate::global().warning().printf(::std::format_args!($($arg)*));
    }};
}

/// Formats and writes to the global Debug channel.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {{
        let _ = $crate::global().debug().printf(::std::format_args!($($arg)*));
    }};
}
