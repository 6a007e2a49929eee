//! File logging setup.
//!
//! The terminal belongs to the UI while the engine runs, so log records go to
//! a file under the user's cache directory instead of stdout/stderr.

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Get the path of the log file
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::cache_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}

/// Build the dispatcher for the given configuration.
///
/// Returns `None` when logging is disabled so callers can skip installing a
/// global logger entirely.
pub fn build_dispatch(config: &LoggingConfig, path: &Path) -> Result<Option<fern::Dispatch>> {
    if !config.enabled {
        return Ok(None);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}][{}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(config.level_filter()?)
        .chain(file);

    Ok(Some(dispatch))
}

/// Install the global logger from configuration.
///
/// Returns the log file path when a logger was installed.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    let path = get_log_file_path()?;
    match build_dispatch(config, &path)? {
        Some(dispatch) => {
            dispatch.apply().context("Failed to install logger")?;
            log::info!("Logging to {}", path.display());
            Ok(Some(path))
        }
        None => Ok(None),
    }
}
