//! Configuration management module
//!
//! Handles loading, saving, and validation of the terminal UI preferences.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::{Result, TuidoError, APP_NAME, CONFIG_FILE};

const MIN_TICK_RATE: Duration = Duration::from_millis(10);
const MAX_TICK_RATE: Duration = Duration::from_secs(5);

/// User interface configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event poll interval, e.g. "250ms"
    pub tick_rate: String,
    /// Accent colour for titles and highlights, name or "#rrggbb"
    pub accent: String,
    /// Default tracing filter directive when RUST_LOG is unset
    pub log_filter: String,
    /// Explicit log file location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Draw the key-hint footer
    pub show_help: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate: "250ms".to_string(),
            accent: "#4169e1".to_string(), // royal blue
            log_filter: "info".to_string(),
            log_file: None,
            show_help: true,
        }
    }
}

impl UiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parsed event poll interval
    pub fn tick_rate(&self) -> Result<Duration> {
        humantime::parse_duration(&self.tick_rate).map_err(|e| {
            TuidoError::ConfigError(format!("Invalid tick rate '{}': {}", self.tick_rate, e))
        })
    }

    /// Parsed accent colour
    pub fn accent_color(&self) -> Result<Color> {
        Color::from_str(&self.accent).map_err(|_| {
            TuidoError::ConfigError(format!("Invalid accent colour '{}'", self.accent))
        })
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        let tick_rate = self.tick_rate()?;
        if tick_rate < MIN_TICK_RATE || tick_rate > MAX_TICK_RATE {
            return Err(TuidoError::ConfigError(format!(
                "Tick rate must be between {} and {}",
                humantime::format_duration(MIN_TICK_RATE),
                humantime::format_duration(MAX_TICK_RATE)
            )));
        }

        self.accent_color()?;

        EnvFilter::try_new(&self.log_filter).map_err(|e| {
            TuidoError::ConfigError(format!("Invalid log filter '{}': {}", self.log_filter, e))
        })?;

        Ok(())
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = humantime::format_duration(tick_rate).to_string();
        self
    }

    pub fn with_accent(mut self, accent: impl Into<String>) -> Self {
        self.accent = accent.into();
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_file(mut self, path: PathBuf) -> Self {
        self.log_file = Some(path);
        self
    }

    pub fn with_show_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            TuidoError::ConfigError(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            TuidoError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                TuidoError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(config_path, content).map_err(|e| {
            TuidoError::ConfigError(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/tuido/tuido.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            TuidoError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
