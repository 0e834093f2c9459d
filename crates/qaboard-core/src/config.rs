//! Configuration management for qaboard.
//!
//! Loads configuration from ${QABOARD_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_BASE_URL;

/// Returns the default config template with comments.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for qaboard configuration and data directories.
    //!
    //! QABOARD_HOME resolution order:
    //! 1. QABOARD_HOME environment variable (if set)
    //! 2. ~/.config/qaboard (default)

    use std::path::PathBuf;

    /// Returns the qaboard home directory.
    pub fn qaboard_home() -> PathBuf {
        if let Ok(home) = std::env::var("QABOARD_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".qaboard"),
            |h| h.join(".config").join("qaboard"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        qaboard_home().join("config.toml")
    }

    /// Returns the directory the interactive board logs into.
    pub fn logs_dir() -> PathBuf {
        qaboard_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend base URL
    pub base_url: String,

    /// Seconds a notification stays visible
    pub toast_secs: u64,

    /// Optional tracing filter directive
    pub log_filter: Option<String>,
}

impl Config {
    const DEFAULT_TOAST_SECS: u64 = 3;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?
        } else {
            Config::default()
        };
        config
            .validate()
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        Ok(config)
    }

    /// Replaces the base URL (command-line flag or environment).
    pub fn with_base_url(mut self, base_url: Option<&str>) -> Result<Self> {
        if let Some(url) = base_url.map(str::trim).filter(|s| !s.is_empty()) {
            self.base_url = url.to_string();
            self.validate()?;
        }
        Ok(self)
    }

    /// How long a toast stays on screen.
    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_secs)
    }

    fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.base_url)
            .with_context(|| format!("base_url '{}' is not a valid URL", self.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("base_url '{}' must use http or https", self.base_url);
        }
        Ok(())
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            toast_secs: Self::DEFAULT_TOAST_SECS,
            log_filter: None,
        }
    }
}
