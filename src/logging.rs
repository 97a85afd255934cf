//! File logging. The terminal belongs to the UI, so nothing goes to stderr.

use anyhow::{anyhow, Context, Result};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use std::path::{Path, PathBuf};

use crate::config::APP_NAME;

const MAX_LOG_FILE_SIZE_BYTES: u64 = 2 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_NAME)
        .join("logs")
}

/// Starts the file logger. Keep the handle alive for the whole run.
pub fn init(level: &str, dir: &Path) -> Result<LoggerHandle> {
    let level = normalize_level(level)?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let handle = Logger::try_with_str(level)
        .with_context(|| format!("invalid log level `{level}`"))?
        .log_to_file(FileSpec::default().directory(dir).basename(APP_NAME))
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .context("failed to start logger")?;

    info!(
        "event=app_start status=ok version={} level={level} log_dir={}",
        env!("CARGO_PKG_VERSION"),
        dir.display()
    );
    Ok(handle)
}

fn normalize_level(level: &str) -> Result<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        "off" => Ok("off"),
        other => Err(anyhow!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error|off"
        )),
    }
}
