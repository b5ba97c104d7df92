use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{DATA_API_BASE, DATA_API_ENV};

/// Default config file path.
pub const CONFIG_PATH: &str = "config.toml";

/// Top-level application config deserialized from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data_api: DataApiConfig,
    #[serde(default)]
    pub settings: SettingsConfig,
}

/// Proxy server bind address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Upstream data API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataApiConfig {
    /// Base URL of the Polymarket data API. The `DATA_API_BASEURL`
    /// environment variable takes precedence when set.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Runtime settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsConfig {
    /// Quiet interval for the interactive search debounce, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Page size for paginated activity fetches.
    #[serde(default = "default_page_size")]
    pub page_size: i32,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_base_url() -> String {
    DATA_API_BASE.to_string()
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_page_size() -> i32 {
    100
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DataApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            page_size: default_page_size(),
        }
    }
}

impl AppConfig {
    /// Load config from the given TOML file path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Load config from the given path, falling back to defaults when the
    /// file does not exist. A file that exists but fails to parse is still
    /// an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write config to the given TOML file path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self).context("failed to serialize config")?;
        std::fs::write(path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    /// Effective upstream base URL: `DATA_API_BASEURL` env var when set,
    /// otherwise the configured value.
    pub fn data_api_base_url(&self) -> Result<Url> {
        let raw = std::env::var(DATA_API_ENV).unwrap_or_else(|_| self.data_api.base_url.clone());
        Url::parse(&raw).with_context(|| format!("invalid data API base URL: {raw}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_sections_absent() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.data_api.base_url, DATA_API_BASE);
        assert_eq!(config.settings.debounce_ms, 500);
        assert_eq!(config.settings.page_size, 100);
    }

    #[test]
    fn partial_override() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            port = 8080

            [settings]
            debounce_ms = 250
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.settings.debounce_ms, 250);
        assert_eq!(config.settings.page_size, 100);
    }

    #[test]
    fn save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = AppConfig::default();
        config.server.port = 9999;
        config.save(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded.server.port, 9999);
        assert_eq!(loaded.data_api.base_url, DATA_API_BASE);
    }

    #[test]
    fn load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.server.port, 3000);
    }
}
