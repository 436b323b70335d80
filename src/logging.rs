//! Process-wide logger setup.
//!
//! Diagnostics go to stderr through `flexi_logger`, so they never mix with the
//! command output on stdout. The level comes from `RTASKWEEK_LOG` when set,
//! otherwise from the config file.

use crate::errors::{AppError, AppResult};
use flexi_logger::{Logger, LoggerHandle};
use log::debug;
use std::sync::OnceLock;

pub const LOG_ENV: &str = "RTASKWEEK_LOG";

static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

/// Start the logger once; later calls are no-ops.
pub fn init_logging(config_level: &str) -> AppResult<()> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let level = std::env::var(LOG_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| config_level.to_string());
    let level = normalize_level(&level)?;

    let handle = Logger::try_with_str(level)
        .map_err(|e| AppError::Logging(format!("invalid log level `{level}`: {e}")))?
        .log_to_stderr()
        .start()
        .map_err(|e| AppError::Logging(format!("failed to start logger: {e}")))?;

    let _ = LOGGER.set(handle);
    debug!("logger started at level {level}");
    Ok(())
}

fn normalize_level(level: &str) -> AppResult<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Ok("off"),
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(AppError::Logging(format!(
            "unsupported log level `{other}`; expected off|trace|debug|info|warn|error"
        ))),
    }
}
