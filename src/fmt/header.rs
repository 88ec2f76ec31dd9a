//! Assembles one output line: prefix, date/time annotations, call site, message, newline.
//! Rendering is pure so a fixed timestamp always reproduces the exact same bytes.

use super::Flags;
use chrono::{DateTime, FixedOffset, Utc};
use std::io::Write;
use std::panic::Location;

/// Source position of the logging call, captured through `#[track_caller]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    #[must_use]
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of whoever called the (track_caller) function this is invoked from.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }

    /// Final path component, handling both `/` and `\` separators.
    #[must_use]
    pub fn short_file(&self) -> &'static str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

/// Appends a fully rendered line to `buf`.
///
/// `now` is shown in its own offset unless `Flags::UTC` is set. A newline is appended
/// only when `msg` does not already end with one.
pub fn render_line(
    buf: &mut Vec<u8>,
    prefix: &str,
    flags: Flags,
    now: DateTime<FixedOffset>,
    site: Option<CallSite>,
    msg: &[u8],
) {
    if !flags.contains(Flags::MSG_PREFIX) {
        buf.extend_from_slice(prefix.as_bytes());
    }

    render_timestamp(buf, flags, now);

    if let Some(site) = site.filter(|_| flags.wants_call_site()) {
        let file = if flags.contains(Flags::SHORT_FILE) {
            site.short_file()
        } else {
            site.file
        };
        // Writing into a Vec cannot fail.
        let _ = write!(buf, "{file}:{}: ", site.line);
    }

    if flags.contains(Flags::MSG_PREFIX) {
        buf.extend_from_slice(prefix.as_bytes());
    }

    buf.extend_from_slice(msg);
    if msg.last() != Some(&b'\n') {
        buf.push(b'\n');
    }
}

fn render_timestamp(buf: &mut Vec<u8>, flags: Flags, now: DateTime<FixedOffset>) {
    let wants_time = flags.contains(Flags::TIME) || flags.contains(Flags::MICROSECONDS);
    if !flags.contains(Flags::DATE) && !wants_time {
        return;
    }

    let now = if flags.contains(Flags::UTC) {
        now.with_timezone(&Utc).fixed_offset()
    } else {
        now
    };

    if flags.contains(Flags::DATE) {
        let _ = write!(buf, "{} ", now.format("%Y/%m/%d"));
    }
    if wants_time {
        let _ = write!(buf, "{}", now.format("%H:%M:%S"));
        if flags.contains(Flags::MICROSECONDS) {
            let _ = write!(buf, ".{}", now.format("%6f"));
        }
        buf.push(b' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32, micro: u32) -> DateTime<FixedOffset> {
        NaiveDate::from_ymd_opt(2025, 8, 7)
            .and_then(|d| d.and_hms_micro_opt(h, m, s, micro))
            .unwrap()
            .and_utc()
            .fixed_offset()
    }

    fn render(prefix: &str, flags: Flags, site: Option<CallSite>, msg: &str) -> String {
        let mut buf = Vec::new();
        render_line(&mut buf, prefix, flags, at(9, 0, 0, 42), site, msg.as_bytes());
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn std_flags_render_date_and_time() {
        assert_eq!(render("P ", Flags::STD, None, "hi"), "P 2025/08/07 09:00:00 hi\n");
    }

    #[test]
    fn no_flags_render_prefix_and_message_only() {
        assert_eq!(render("P ", Flags::NONE, None, "hi"), "P hi\n");
    }

    #[test]
    fn microseconds_imply_time() {
        assert_eq!(
            render("", Flags::MICROSECONDS, None, "x"),
            "09:00:00.000042 x\n"
        );
    }

    #[test]
    fn short_file_wins_over_long_file() {
        let site = CallSite::new("src/deep/dir/main.rs", 17);
        let flags = Flags::LONG_FILE | Flags::SHORT_FILE;
        assert_eq!(render("", flags, Some(site), "x"), "main.rs:17: x\n");
        assert_eq!(
            render("", Flags::LONG_FILE, Some(site), "x"),
            "src/deep/dir/main.rs:17: x\n"
        );
    }

    #[test]
    fn call_site_ignored_without_file_flag() {
        let site = CallSite::new("main.rs", 1);
        assert_eq!(render("", Flags::NONE, Some(site), "x"), "x\n");
    }

    #[test]
    fn msg_prefix_moves_prefix_after_header() {
        let flags = Flags::STD | Flags::MSG_PREFIX;
        assert_eq!(render("P ", flags, None, "hi"), "2025/08/07 09:00:00 P hi\n");
    }

    #[test]
    fn utc_flag_converts_offset() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = at(9, 0, 0, 0).with_timezone(&plus_two);
        let mut buf = Vec::new();
        render_line(&mut buf, "", Flags::STD | Flags::UTC, local, None, b"x");
        assert_eq!(String::from_utf8(buf).unwrap(), "2025/08/07 09:00:00 x\n");

        let mut buf = Vec::new();
        render_line(&mut buf, "", Flags::STD, local, None, b"x");
        assert_eq!(String::from_utf8(buf).unwrap(), "2025/08/07 11:00:00 x\n");
    }

    #[test]
    fn existing_trailing_newline_is_not_doubled() {
        assert_eq!(render("", Flags::NONE, None, "x\n"), "x\n");
        assert_eq!(render("", Flags::NONE, None, ""), "\n");
    }

    #[test]
    fn short_file_handles_backslashes() {
        assert_eq!(CallSite::new(r"src\bin\main.rs", 3).short_file(), "main.rs");
        assert_eq!(CallSite::new("lib.rs", 3).short_file(), "lib.rs");
    }
}
