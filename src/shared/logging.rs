//! Run log. Timestamped lifecycle events appended to a local file.
//!
//! Console output is handled separately by the UI adapter; nothing here writes to
//! stdout/stderr.

use std::env;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_LOG_FILE: &str = "meetop.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log file path: {0}")]
    Path(String),
    #[error("failed to prepare log directory: {0}")]
    Io(#[from] io::Error),
    #[error("invalid logging filter: {0}")]
    Filter(#[from] ParseError),
    #[error("failed to install logging subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// Log file from `MEETOP_LOG_FILE`, defaulting to `./meetop.log`.
pub fn log_path_from_env() -> PathBuf {
    env::var("MEETOP_LOG_FILE")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
}

/// Install the global subscriber writing to `path` (opened in append mode).
///
/// Keep the returned guard alive until exit so buffered lines are flushed.
pub fn init_logging(path: &Path) -> Result<WorkerGuard, LoggingError> {
    let (dir, file_name) = split_log_path(path)?;
    std::fs::create_dir_all(&dir)?;

    let file_appender = tracing_appender::rolling::never(&dir, &file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(build_filter()?)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()?;

    Ok(guard)
}

fn split_log_path(path: &Path) -> Result<(PathBuf, String), LoggingError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::Path(path.display().to_string()))?
        .to_string();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, file_name))
}

fn build_filter() -> Result<EnvFilter, ParseError> {
    if let Ok(spec) = env::var("MEETOP_LOG") {
        if !spec.trim().is_empty() {
            return EnvFilter::try_new(spec);
        }
    }
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new("info"),
    }
}
