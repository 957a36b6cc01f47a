//! Process-wide diagnostics sink.
//!
//! Accounts and profiles only emit through the `log` facade. The application
//! calls [`init`] once at startup to decide where those records go and how
//! verbose they are; nothing in this crate reconfigures logging afterwards.

use std::sync::OnceLock;

use crate::log_level::LogLevel;

static INSTALLED: OnceLock<Option<LogLevel>> = OnceLock::new();

/// Install the `env_logger` sink with `level` as the default filter.
///
/// `RUST_LOG`, when set, refines the filter per module. Returns `true` if
/// this call installed the logger. Only the first call attempts it; if a
/// logger from elsewhere was already in place, nothing is installed and
/// [`installed_level`] stays `None`.
pub fn init(level: LogLevel) -> bool {
    let mut installed = false;
    INSTALLED.get_or_init(|| {
        let result = env_logger::Builder::new()
            .filter_level(level.to_level_filter())
            .parse_default_env()
            .format_timestamp(None)
            .try_init();
        installed = result.is_ok();
        if installed {
            log::debug!("Diagnostics initialized at {level}");
            Some(level)
        } else {
            None
        }
    });
    installed
}

/// Level this crate's sink was installed with, if [`init`] installed one
pub fn installed_level() -> Option<LogLevel> {
    INSTALLED.get().copied().flatten()
}
