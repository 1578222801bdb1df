//! TUIDO - terminal todo screen
//!
//! An in-memory todo list with a two-mode screen: the item list and a
//! modal form for adding items. Rendered with ratatui, or driven line by
//! line from stdin in simple mode.

use std::fmt;

// Public re-exports
pub mod app;
pub mod config;
pub mod logging;
pub mod models;
pub mod simple;
pub mod store;

// Common error types
#[derive(Debug)]
pub enum TuidoError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// TUI rendering or interaction error
    TuiError(String),
    /// Log subscriber or log file setup error
    LoggingError(String),
    /// Unrecognised simple-mode command
    CommandError(String),
    /// JSON output error
    SerializationError(String),
}

impl fmt::Display for TuidoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuidoError::IoError(err) => write!(f, "I/O error: {}", err),
            TuidoError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            TuidoError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            TuidoError::LoggingError(msg) => write!(f, "Logging error: {}", msg),
            TuidoError::CommandError(msg) => write!(f, "Command error: {}", msg),
            TuidoError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for TuidoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuidoError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TuidoError {
    fn from(err: std::io::Error) -> Self {
        TuidoError::IoError(err)
    }
}

impl From<serde_json::Error> for TuidoError {
    fn from(err: serde_json::Error) -> Self {
        TuidoError::SerializationError(format!("JSON serialization error: {}", err))
    }
}

impl From<toml::de::Error> for TuidoError {
    fn from(err: toml::de::Error) -> Self {
        TuidoError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for TuidoError {
    fn from(err: toml::ser::Error) -> Self {
        TuidoError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for TUIDO operations
pub type Result<T> = std::result::Result<T, TuidoError>;

/// Error handling utilities
pub mod error {
    use super::TuidoError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &TuidoError) -> String {
        match error {
            TuidoError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            TuidoError::TuiError(_) => {
                "The terminal could not be set up. Try `tuido --simple` instead.".to_string()
            }
            TuidoError::LoggingError(_) => {
                "Logging could not be started. Check that the log directory is writable."
                    .to_string()
            }
            TuidoError::CommandError(msg) => format!("{}. Type `help` for commands.", msg),
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "tuido";
pub const CONFIG_FILE: &str = "tuido.toml";
pub const LOG_FILE: &str = "tuido.log";
