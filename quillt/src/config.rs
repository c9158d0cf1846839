//! Configuration module for the quillt CLI.
//!
//! Settings are read from `quill.toml`. Command-line flags override them.

use std::path::{Path, PathBuf};

use dirs::config_dir;
use quill_util::ColorConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::commands::common::OutputFormat;
use crate::error::{QuilltError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "quill.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// How tokens and diagnostics are printed.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Token listing format: "text" or "json".
    #[serde(default = "default_format")]
    pub format: String,

    /// Diagnostic coloring: "auto", "always" or "never".
    #[serde(default = "default_color")]
    pub color: String,

    /// Whether token listings include the end-of-input token.
    #[serde(default = "default_true")]
    pub show_eof: bool,
}

fn default_format() -> String {
    "text".to_string()
}

fn default_color() -> String {
    "auto".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            color: default_color(),
            show_eof: true,
        }
    }
}

impl OutputConfig {
    /// Parse the configured token listing format.
    pub fn output_format(&self) -> Result<OutputFormat> {
        OutputFormat::parse(&self.format)
    }

    /// Parse the configured color mode.
    pub fn color_config(&self) -> Result<ColorConfig> {
        ColorConfig::from_name(&self.color).ok_or_else(|| {
            QuilltError::Validation(format!(
                "Invalid color in configuration: {} (expected auto, always or never)",
                self.color
            ))
        })
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User configuration directory (`<config_dir>/quill/quill.toml`)
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("no configuration file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(QuilltError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;

        config.output.output_format()?;
        config.output.color_config()?;

        Ok(config)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in the user configuration directory.
    fn check_user_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("quill").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config().or_else(Self::check_user_config)
    }
}
