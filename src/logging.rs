#![cfg(feature = "std")]

use std::env;
use log::{self, Level, LevelFilter, Metadata, Record};

/// Environment variable holding the log level (`off`, `error` .. `trace`).
pub const LOG_ENV: &str = "SEA_BATTLE_LOG";

const CRATE_TARGET: &str = "sea_battle";

/// Level to use for a raw `SEA_BATTLE_LOG` value.
///
/// Unset, blank or unknown values fall back to `warn` so log lines do not
/// interleave with the rendered boards.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Module path below the crate root, e.g. `placement` for
/// `sea_battle::placement`. Foreign targets pass through unchanged.
pub fn short_target(target: &str) -> &str {
    match target.strip_prefix(CRATE_TARGET) {
        Some("") => "main",
        Some(rest) => rest.strip_prefix("::").unwrap_or(target),
        None => target,
    }
}

/// One stderr line: `[LEVEL module] message`.
pub fn format_line(level: Level, target: &str, message: &str) -> String {
    format!("[{:<5} {}] {}", level, short_target(target), message)
}

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        eprintln!("{}", format_line(record.level(), record.target(), &message));
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger at the level named by `SEA_BATTLE_LOG`.
/// A second call leaves the first logger in place.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
