// src/logging.rs

//! Diagnostics for `pkgignore`.
//!
//! stdout belongs to the subcommands: `print` writes the pattern list,
//! `check` one `verdict<TAB>path` line per query and `list` one path per
//! line. Scripts parse those, so every diagnostic (rejected patterns, a
//! missing ignore file, walk statistics) goes to stderr through `tracing`.
//!
//! The level comes from `--log-level`, else `PKGIGNORE_LOG`, else `info`.

use anyhow::Result;
use tracing_subscriber::fmt;

use crate::cli::LogLevel;

/// Environment variable consulted when no `--log-level` is given.
pub const LOG_ENV_VAR: &str = "PKGIGNORE_LOG";

/// Install the stderr subscriber. Call once, before any subcommand runs.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env = std::env::var(LOG_ENV_VAR).ok();
    let level = resolve_level(cli_level, env.as_deref());

    fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {e}"))?;

    Ok(())
}

/// The flag wins over the environment; an unknown env value falls back to
/// `info` rather than failing the run.
pub fn resolve_level(cli_level: Option<LogLevel>, env: Option<&str>) -> tracing::Level {
    cli_level
        .map(level_from_log_level)
        .or_else(|| env.and_then(parse_level_str))
        .unwrap_or(tracing::Level::INFO)
}

fn level_from_log_level(lvl: LogLevel) -> tracing::Level {
    match lvl {
        LogLevel::Error => tracing::Level::ERROR,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Trace => tracing::Level::TRACE,
    }
}

fn parse_level_str(s: &str) -> Option<tracing::Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}
