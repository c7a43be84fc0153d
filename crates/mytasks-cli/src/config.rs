/*
[INPUT]:  YAML configuration file, CLI/environment overrides
[OUTPUT]: Parsed application configuration and derived client settings
[POS]:    Configuration layer - service endpoint and user defaults
[UPDATE]: When adding new configuration options
*/

use anyhow::{Context, Result};
use mytasks_adapter::{ClientConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Top-level configuration for the task client
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Base URL of the task service
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request deadline in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connection deadline in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Value written to `createdBy` for new tasks
    #[serde(default = "default_created_by")]
    pub created_by: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            created_by: default_created_by(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_created_by() -> String {
    "user123".to_string()
}

impl AppConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("parse config file {}", path.display()))?;
        Ok(config)
    }

    /// `~/.config/mytasks/config.yaml` (or the platform equivalent)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mytasks").join("config.yaml"))
    }

    /// Load from an explicit path, else the default path if it exists, else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                debug!(path = %path.display(), "using default config file");
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Replace the base URL when an override was given
    pub fn with_base_url(self, base_url: Option<String>) -> Self {
        match base_url {
            Some(base_url) if !base_url.trim().is_empty() => Self { base_url, ..self },
            _ => self,
        }
    }

    /// Settings for the HTTP client
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }
}
