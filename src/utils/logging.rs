//! Logging system initialization
//!
//! Sets up tracing-based logging. Debug builds log to stderr. Release builds
//! run without a console window, so they log to `app.log` in the per-user data
//! directory, rotating on startup and keeping the last 5 sessions.

use crate::error::{HlrUnitsError, Result, StringError};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Maximum number of historical log files to keep (app.log.1 through app.log.5)
const MAX_LOG_FILES: u8 = 5;

/// Name of the current session's log file
const LOG_FILE_NAME: &str = "app.log";

/// Where log output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Human-readable output on stderr
    Console,
    /// `app.log` inside the given directory
    File(PathBuf),
}

impl LogTarget {
    /// Console for debug builds, the per-user log directory for release builds
    pub fn for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Console
        } else {
            Self::File(default_log_dir())
        }
    }
}

/// Per-user directory for log files
///
/// `%APPDATA%\HLRUnits` on Windows; `$XDG_DATA_HOME/hlr-units` or
/// `~/.local/share/hlr-units` elsewhere. Falls back to the working directory.
pub fn default_log_dir() -> PathBuf {
    if cfg!(windows) {
        let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
        return PathBuf::from(appdata).join("HLRUnits");
    }

    let data_home = std::env::var_os("XDG_DATA_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("share")))
        .unwrap_or_else(|| PathBuf::from("."));
    data_home.join("hlr-units")
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the logging system
///
/// Log level defaults to INFO but can be configured via `RUST_LOG` environment variable.
pub fn init_logging(target: LogTarget) -> Result<()> {
    match target {
        LogTarget::Console => {
            let subscriber = fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter())
                .with_target(true)
                .finish();

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| HlrUnitsError::Logging(Box::new(e)))?;
        }
        LogTarget::File(log_dir) => {
            std::fs::create_dir_all(&log_dir)?;
            rotate_logs_on_startup(&log_dir.join(LOG_FILE_NAME))?;

            // Rotation happens above, once per session; the appender itself never rotates
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix("app")
                .filename_suffix("log")
                .build(&log_dir)
                .map_err(|e| HlrUnitsError::Logging(Box::new(e)))?;

            let subscriber = fmt()
                .with_writer(file_appender)
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .finish();

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| HlrUnitsError::Logging(Box::new(e)))?;
        }
    }

    Ok(())
}

/// Rotate log files on application startup
///
/// - app.log.5 is deleted (oldest log)
/// - app.log.4 -> app.log.5, ..., app.log.1 -> app.log.2
/// - app.log -> app.log.1
/// - A fresh app.log will be created by the logger
fn rotate_logs_on_startup(log_path: &Path) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let log_dir = log_path
        .parent()
        .ok_or_else(|| HlrUnitsError::Logging(StringError::new("Invalid log path")))?;

    let log_name = log_path
        .file_name()
        .ok_or_else(|| HlrUnitsError::Logging(StringError::new("Invalid log filename")))?
        .to_string_lossy();

    let oldest_log = log_dir.join(format!("{log_name}.{MAX_LOG_FILES}"));
    if oldest_log.exists() {
        std::fs::remove_file(&oldest_log)?;
    }

    for i in (1..MAX_LOG_FILES).rev() {
        let current_log = log_dir.join(format!("{log_name}.{i}"));
        let next_log = log_dir.join(format!("{log_name}.{}", i + 1));

        if current_log.exists() {
            std::fs::rename(&current_log, &next_log)?;
        }
    }

    std::fs::rename(log_path, log_dir.join(format!("{log_name}.1")))?;

    Ok(())
}
