//! File logging for the TUI.
//!
//! The terminal belongs to the UI, so log records go to rotating files in a
//! configured directory. Nothing is logged when no directory is set.

use std::path::{Path, PathBuf};

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;

const LOG_FILE_BASENAME: &str = "tasklist";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 2 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Error type for logger setup
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("unsupported log level '{0}' (expected error, warn, info, debug or trace)")]
    InvalidLevel(String),
    #[error("could not create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not start logger: {0}")]
    Start(#[from] flexi_logger::FlexiLoggerError),
}

/// Check and lowercase a level name
pub fn normalize_level(level: &str) -> Result<&'static str, LogError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "error" => Ok("error"),
        "warn" | "warning" => Ok("warn"),
        "info" => Ok("info"),
        "debug" => Ok("debug"),
        "trace" => Ok("trace"),
        _ => Err(LogError::InvalidLevel(level.to_string())),
    }
}

/// Start file logging. Keep the returned handle alive for the whole run;
/// dropping it flushes and stops the logger.
pub fn init_file_logging(level: &str, dir: &Path) -> Result<LoggerHandle, LogError> {
    let level = normalize_level(level)?;
    std::fs::create_dir_all(dir).map_err(|e| LogError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let handle = Logger::try_with_str(level)?
        .log_to_file(
            FileSpec::default()
                .directory(dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()?;

    info!(
        "event=app_start version={} level={} log_dir={}",
        env!("CARGO_PKG_VERSION"),
        level,
        dir.display()
    );
    Ok(handle)
}
