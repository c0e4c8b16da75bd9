// src/logging.rs

//! Logging setup for `pollwatch` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the log level:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `-v` / `verbose = true` → `info`
//! 3. `POLLWATCH_LOG` environment variable (e.g. "info", "debug")
//! 4. default to `warn`, which still reports start-up stat failures and
//!    failing commands
//!
//! Logs are sent to STDERR so that stdout carries only the output of the
//! triggered command.

use anyhow::anyhow;
use tracing::Level;
use tracing_subscriber::fmt;

use crate::cli::LogLevel;
use crate::errors::Result;

pub const LOG_ENV_VAR: &str = "POLLWATCH_LOG";

/// Initialise global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>, verbose: bool) -> Result<()> {
    let env_level = std::env::var(LOG_ENV_VAR).ok();
    let level = resolve_level(cli_level, verbose, env_level.as_deref());

    fmt()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("initialising logging: {e}"))?;

    Ok(())
}

/// Pick the effective level from the flag, the verbose switch and the
/// environment value, in that order.
pub fn resolve_level(cli_level: Option<LogLevel>, verbose: bool, env: Option<&str>) -> Level {
    if let Some(lvl) = cli_level {
        return level_from_log_level(lvl);
    }
    if verbose {
        return Level::INFO;
    }
    env.and_then(parse_level_str).unwrap_or(Level::WARN)
}

fn level_from_log_level(lvl: LogLevel) -> Level {
    match lvl {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

fn parse_level_str(s: &str) -> Option<Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" | "warning" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}
