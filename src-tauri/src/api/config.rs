//! API Configuration
//!
//! Where the remote habits API lives. Persisted as JSON in the app config
//! directory; the `HABITS_API_URL` environment variable wins over the file.

use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";
pub const BASE_URL_ENV: &str = "HABITS_API_URL";
const CONFIG_FILE: &str = "api_config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Build a config after checking the URL is usable as a base.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let config = Self {
            base_url: base_url.trim().to_string(),
        };
        config.base()?;
        Ok(config)
    }

    /// Base URL with a trailing slash, so endpoint paths join under it.
    pub fn base(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidUrl {
            url: self.base_url.clone(),
            reason,
        };

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", url.scheme())));
        }
        if url.cannot_be_a_base() {
            return Err(invalid("not a base url".to_string()));
        }
        url.set_query(None);
        url.set_fragment(None);
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    /// Read the saved config, falling back to the default when absent.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = config_path(config_dir);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.base()?;
        Ok(config)
    }

    /// Saved config with the environment override applied.
    pub fn load_effective(config_dir: &Path) -> Result<Self, ConfigError> {
        Self::load(config_dir)?.with_override(std::env::var(BASE_URL_ENV).ok())
    }

    pub fn with_override(self, base_url: Option<String>) -> Result<Self, ConfigError> {
        match base_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => Self::new(&url),
            None => Ok(self),
        }
    }

    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        fs::create_dir_all(config_dir)?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(config_path(config_dir), json)?;
        Ok(())
    }
}

pub fn config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE)
}
