//! Application configuration
//!
//! Configuration loaded from `.contact-keeper.toml`, with environment overrides.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable overriding [`AppConfig::api_base_url`]
pub const API_URL_ENV: &str = "CONTACT_KEEPER_API_URL";

/// How the session token is attached to outgoing requests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthHeader {
    /// `Authorization: Bearer <token>`
    Bearer,
    /// `x-auth-token: <token>`
    #[default]
    XAuthToken,
}

/// Application configuration loaded from `.contact-keeper.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the contacts REST API (without the `/api` prefix)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Default lifetime of an alert in seconds
    #[serde(default = "default_alert_timeout_secs")]
    pub alert_timeout_secs: u64,

    /// Header used to send the session token
    #[serde(default)]
    pub auth_header: AuthHeader,
}

fn default_api_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_alert_timeout_secs() -> u64 {
    3
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            alert_timeout_secs: default_alert_timeout_secs(),
            auth_header: AuthHeader::default(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults.
    /// Environment overrides are applied last.
    pub fn load() -> Self {
        let config = match crate::load_config_file() {
            Some((path, content)) => match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            None => {
                log::debug!("Using default app config");
                Self::default()
            }
        };

        config.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an environment lookup function
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(API_URL_ENV).filter(|url| !url.trim().is_empty()) {
            log::debug!("Overriding API base URL from {}", API_URL_ENV);
            self.api_base_url = url;
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn alert_timeout(&self) -> Duration {
        Duration::from_secs(self.alert_timeout_secs)
    }
}
