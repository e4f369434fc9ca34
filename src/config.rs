//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Server used when neither the config file nor the environment names one
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Environment variable that overrides `server_url`
pub const SERVER_URL_ENV: &str = "CONTACT_SERVER_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContactConfig {
    /// Backend base address; the form posts to `<server_url>/contact_form/`
    pub server_url: Option<String>,
    /// Request timeout in seconds (reqwest default when unset)
    pub request_timeout_secs: Option<u64>,
    /// Start with tab headers visible
    pub show_tabs: Option<bool>,
    /// `CONTACT_SERVER_URL` for this run; never written back to the file
    #[serde(skip)]
    pub(crate) env_server_url: Option<String>,
}

impl ContactConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "contact", "contact-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                serde_json::from_str(&content)?
            }
            _ => Self::default(),
        };
        config.apply_env_override(std::env::var(SERVER_URL_ENV).ok());
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    fn apply_env_override(&mut self, server_url: Option<String>) {
        if let Some(url) = server_url.filter(|u| !u.trim().is_empty()) {
            tracing::debug!(%url, "server address taken from environment");
            self.env_server_url = Some(url);
        }
    }

    pub fn server_url(&self) -> &str {
        self.env_server_url
            .as_deref()
            .or(self.server_url.as_deref())
            .unwrap_or(DEFAULT_SERVER_URL)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn show_tabs(&self) -> bool {
        self.show_tabs.unwrap_or(true)
    }
}
