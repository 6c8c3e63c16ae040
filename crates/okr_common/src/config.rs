//! Configuration for the dashboard client.
//!
//! Loads settings from an XDG config file or uses defaults; individual
//! values can be overridden through environment variables.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "OKRBOARD_CONFIG";

/// Dashboard client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Base URL of the OKR backend API.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Optional bearer token sent with every request.
    #[serde(default)]
    pub api_token: Option<String>,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Refresh interval for watch mode in seconds.
    #[serde(default = "default_watch_interval")]
    pub watch_interval_secs: u64,
}

fn default_api_url() -> String {
    "http://localhost:4000/api".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_watch_interval() -> u64 {
    30
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_token: None,
            timeout_secs: default_timeout(),
            watch_interval_secs: default_watch_interval(),
        }
    }
}

impl DashboardConfig {
    /// Config file discovery chain:
    /// 1. `$OKRBOARD_CONFIG` (explicit override)
    /// 2. `<config dir>/okrboard/config.toml`
    pub fn discover_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("okrboard").join("config.toml"))
    }

    /// Parse a config file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: DashboardConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when no file exists or
    /// the file is unreadable. Environment overrides are applied last.
    pub fn load() -> Self {
        let mut config = match Self::discover_path() {
            Some(path) if path.exists() => match Self::load_from_path(&path) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Ignoring bad config file: {:#}", e);
                    Self::default()
                }
            },
            _ => Self::default(),
        };

        if let Ok(url) = std::env::var("OKRBOARD_API_URL") {
            config.api_url = url;
        }
        if let Ok(token) = std::env::var("OKRBOARD_API_TOKEN") {
            config.api_token = Some(token);
        }

        config
    }
}
