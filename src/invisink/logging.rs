//! Process-wide logger bootstrap for the binary.
//!
//! The library only talks to the `log` facade. Hosts embedding it bring their
//! own logger; the `invisink` binary calls [`init_logging`] once at startup.
//!
//! # Invariants
//! - Initialization happens at most once per process.
//! - Calling again with the same level is a no-op; a different level is
//!   rejected.
//! - Initialization never panics.

use crate::error::{InvisinkError, Result};
use flexi_logger::{Logger, LoggerHandle};
use log::debug;
use once_cell::sync::OnceCell;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: String,
    _logger: LoggerHandle,
}

/// Start logging to stderr. `RUST_LOG` takes precedence over `level`.
pub fn init_logging(level: &str) -> Result<()> {
    let level = level.trim();
    if level.is_empty() {
        return Err(InvisinkError::Config("log level cannot be empty".to_string()));
    }

    if let Some(state) = LOGGING_STATE.get() {
        if state.level == level {
            return Ok(());
        }
        return Err(InvisinkError::Config(format!(
            "logging already initialized with level `{}`; refusing to switch to `{}`",
            state.level, level
        )));
    }

    LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState> {
        let logger = Logger::try_with_env_or_str(level)
            .map_err(|err| InvisinkError::Config(format!("invalid log level `{level}`: {err}")))?
            .log_to_stderr()
            .start()
            .map_err(|err| InvisinkError::Config(format!("failed to start logger: {err}")))?;

        debug!(
            "event=logging_init module=logging status=ok level={} version={}",
            level,
            env!("CARGO_PKG_VERSION")
        );

        Ok(LoggingState {
            level: level.to_string(),
            _logger: logger,
        })
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_level_is_rejected() {
        assert!(matches!(init_logging("  "), Err(InvisinkError::Config(_))));
    }
}
