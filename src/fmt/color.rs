//! Plain 8-color SGR escapes — every terminal that renders color at all understands
//! these, so channel prefixes never depend on true-color support.

/// Foreground red, used by the Error channel.
pub const RED_COLOR: &str = "\x1b[31m";

/// Foreground green, used by the Info channel.
pub const GREEN_COLOR: &str = "\x1b[32m";

/// Foreground yellow, used by the Warning channel.
pub const YELLOW_COLOR: &str = "\x1b[33m";

/// Foreground blue, used by the Debug channel.
pub const BLUE_COLOR: &str = "\x1b[34m";

/// Terminates any active SGR styling so subsequent text returns to the terminal default.
pub const RESET_COLOR: &str = "\x1b[0m";

/// Convenience wrapper for ad hoc colored output outside the four channels.
///
/// `color` is expected to be one of the constants above, but any escape string works.
#[must_use]
pub fn colorize(text: &str, color: &str) -> String {
    format!("{color}{text}{RESET_COLOR}")
}
