use colorlog::{BLUE_COLOR, GREEN_COLOR, RED_COLOR, RESET_COLOR, YELLOW_COLOR, colorize};

#[test]
fn constants_match_ansi_escapes() {
    assert_eq!(RED_COLOR, "\x1b[31m");
    assert_eq!(GREEN_COLOR, "\x1b[32m");
    assert_eq!(YELLOW_COLOR, "\x1b[33m");
    assert_eq!(BLUE_COLOR, "\x1b[34m");
    assert_eq!(RESET_COLOR, "\x1b[0m");
}

#[test]
fn colorize_wraps_with_reset() {
    assert_eq!(colorize("hi", RED_COLOR), "\x1b[31mhi\x1b[0m");
    assert_eq!(colorize("", BLUE_COLOR), "\x1b[34m\x1b[0m");
}

#[test]
fn constants_compose_for_ad_hoc_output() {
    let line = format!("{GREEN_COLOR}Custom green message{RESET_COLOR}");
    assert!(line.starts_with(GREEN_COLOR));
    assert!(line.ends_with(RESET_COLOR));
}
