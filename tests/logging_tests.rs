#![cfg(feature = "std")]

use log::{Level, LevelFilter};
use sea_battle::{format_line, level_from, short_target};

#[test]
fn test_level_from_env_value() {
    assert_eq!(level_from(None), LevelFilter::Warn);
    assert_eq!(level_from(Some("")), LevelFilter::Warn);
    assert_eq!(level_from(Some("loud")), LevelFilter::Warn);
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some(" TRACE ")), LevelFilter::Trace);
    assert_eq!(level_from(Some("off")), LevelFilter::Off);
}

#[test]
fn test_short_target() {
    assert_eq!(short_target("sea_battle::placement"), "placement");
    assert_eq!(short_target("sea_battle::cli::console"), "cli::console");
    assert_eq!(short_target("sea_battle"), "main");
    assert_eq!(short_target("sea_battles::x"), "sea_battles::x");
    assert_eq!(short_target("rand"), "rand");
}

#[test]
fn test_format_line() {
    assert_eq!(
        format_line(Level::Warn, "sea_battle::placement", "giving up after 3 board resets"),
        "[WARN  placement] giving up after 3 board resets"
    );
    assert_eq!(
        format_line(Level::Debug, "sea_battle::ai", "search hit (3, 3)"),
        "[DEBUG ai] search hit (3, 3)"
    );
}
