//! Logging system initialization
//!
//! Sets up tracing-based logging with file output to %APPDATA%\CalSync\app.log
//! and rotation on application startup keeping the previous nine sessions.

use crate::error::{CalSyncError, Result, StringError};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Maximum number of historical log files to keep (app.log.1 through app.log.9)
const MAX_LOG_FILES: u8 = 9;

/// Directory holding the log files
///
/// `%APPDATA%\CalSync` on Windows; the working directory when `APPDATA` is unset.
pub fn log_dir() -> PathBuf {
    let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(appdata).join("CalSync")
}

/// Initialize the logging system
///
/// Log level defaults to INFO but can be configured via `RUST_LOG` environment variable.
/// Rotates existing logs on startup to maintain a history of the last 10 sessions.
pub fn init_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let log_path = log_dir.join("app.log");
    rotate_logs_on_startup(&log_path)?;

    // Rotation is handled above, once per session
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("app")
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| CalSyncError::LoggingError(Box::new(e)))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CalSyncError::LoggingError(Box::new(e)))?;

    tracing::info!("CalSync v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}

/// Shift `app.log` -> `app.log.1` -> ... -> `app.log.9`, dropping the oldest.
///
/// Runs on every startup regardless of file size so each session gets its own
/// file. Gaps in the numbered history are carried along unchanged.
fn rotate_logs_on_startup(log_path: &Path) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let log_dir = log_path
        .parent()
        .ok_or_else(|| CalSyncError::LoggingError(StringError::new("Invalid log path")))?;
    let log_name = log_path
        .file_name()
        .ok_or_else(|| CalSyncError::LoggingError(StringError::new("Invalid log filename")))?
        .to_string_lossy();
    let numbered = |n: u8| log_dir.join(format!("{log_name}.{n}"));

    let oldest = numbered(MAX_LOG_FILES);
    if oldest.exists() {
        std::fs::remove_file(&oldest)?;
    }

    for n in (1..MAX_LOG_FILES).rev() {
        let from = numbered(n);
        if from.exists() {
            std::fs::rename(&from, numbered(n + 1))?;
        }
    }

    std::fs::rename(log_path, numbered(1))?;

    tracing::info!("Log rotation completed on startup");
    Ok(())
}
