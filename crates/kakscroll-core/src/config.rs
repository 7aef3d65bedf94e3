use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub scroll: ScrollOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scroll: ScrollOptions::default(),
        }
    }
}

/// Tuning for the generated mappings. The `scroll` subcommand itself takes
/// explicit arguments; these values only feed the `script` output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollOptions {
    /// Per-tick budget for half-screen scrolls (`<c-d>`/`<c-u>`), in milliseconds
    #[serde(default = "default_half_duration_ms")]
    pub half_duration_ms: f64,
    /// Per-tick budget for full-screen scrolls (`<c-f>`/`<c-b>`), in milliseconds
    #[serde(default = "default_full_duration_ms")]
    pub full_duration_ms: f64,
    /// Lines advanced per tick; 0 selects inertial pacing
    #[serde(default = "default_tick_size")]
    pub tick_size: u32,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            half_duration_ms: default_half_duration_ms(),
            full_duration_ms: default_full_duration_ms(),
            tick_size: default_tick_size(),
        }
    }
}

fn default_half_duration_ms() -> f64 {
    10.0
}

fn default_full_duration_ms() -> f64 {
    5.0
}

fn default_tick_size() -> u32 {
    1
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/kakscroll/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("kakscroll")
            .join("config.toml")
    }
}
