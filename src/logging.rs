//! Logging setup
//!
//! Filter comes from `SRTSYNC_LOG` (tracing `EnvFilter` syntax), default
//! `warn`. Plain commands log to stderr. The player owns the screen, so it
//! logs to `<data_local_dir>/srtsync/srtsync.log` instead.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SRTSYNC_LOG";

const LOG_FILE_NAME: &str = "srtsync.log";

// Flushes the file writer on exit
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

/// Build the filter: `SRTSYNC_LOG` wins, then `-v`, then `warn`.
pub fn build_filter(verbose: bool) -> EnvFilter {
    let default = if verbose { "debug" } else { "warn" };
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Directory holding the player log file.
pub fn log_dir() -> Result<PathBuf> {
    let dir = dirs::data_local_dir().context("Could not determine data directory")?;
    Ok(dir.join("srtsync"))
}

/// Path of the player log file.
pub fn log_file_path() -> Result<PathBuf> {
    Ok(log_dir()?.join(LOG_FILE_NAME))
}

/// Install the global subscriber. Calling it twice is harmless.
///
/// File logging is best effort: if the log file can't be set up, a warning
/// goes to stderr and the player runs without one.
pub fn init(target: LogTarget, verbose: bool) {
    match target {
        LogTarget::Stderr => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false);
            let _ = tracing_subscriber::registry()
                .with(build_filter(verbose))
                .with(layer)
                .try_init();
        }
        LogTarget::File => match log_dir() {
            Ok(dir) => init_file(&dir, verbose),
            Err(err) => without_log_file(&err, verbose),
        },
    }
}

/// Log to `srtsync.log` inside `dir`, or nowhere if that fails.
pub fn init_file(dir: &Path, verbose: bool) {
    match file_writer(dir) {
        Ok(writer) => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            let _ = tracing_subscriber::registry()
                .with(build_filter(verbose))
                .with(layer)
                .try_init();
        }
        Err(err) => without_log_file(&err, verbose),
    }
}

fn without_log_file(err: &anyhow::Error, verbose: bool) {
    eprintln!("Warning: {:#}; continuing without a log file", err);
    let _ = tracing_subscriber::registry()
        .with(build_filter(verbose))
        .try_init();
}

fn file_writer(dir: &Path) -> Result<NonBlocking> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(dir)
        .with_context(|| format!("Failed to open log file in {}", dir.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);
    Ok(writer)
}
