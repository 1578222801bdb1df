//! Log subscriber setup
//!
//! The terminal UI owns stdout, so events are written to a log file.
//! `RUST_LOG` takes precedence over the configured filter.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::UiConfig;
use crate::{Result, TuidoError, APP_NAME, LOG_FILE};

/// Default log location: $DATA_LOCAL_HOME/tuido/tuido.log
pub fn default_log_path() -> Result<PathBuf> {
    let data_dir = dirs::data_local_dir().ok_or_else(|| {
        TuidoError::LoggingError("Unable to determine data directory".to_string())
    })?;

    Ok(data_dir.join(APP_NAME).join(LOG_FILE))
}

/// Log file named by the config, or the default location
pub fn log_path(config: &UiConfig) -> Result<PathBuf> {
    match &config.log_file {
        Some(path) => Ok(path.clone()),
        None => default_log_path(),
    }
}

/// Build the filter from `RUST_LOG`, falling back to the configured directive
pub fn build_filter(config: &UiConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.log_filter).map_err(|e| {
            TuidoError::LoggingError(format!("Invalid log filter '{}': {}", config.log_filter, e))
        }),
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            TuidoError::LoggingError(format!(
                "Failed to create log directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            TuidoError::LoggingError(format!("Failed to open log file {}: {}", path.display(), e))
        })
}

/// Install the global subscriber. Returns the file events are written to.
pub fn init(config: &UiConfig) -> Result<PathBuf> {
    let path = log_path(config)?;
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| TuidoError::LoggingError(e.to_string()))?;

    Ok(path)
}
