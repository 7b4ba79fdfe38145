// src/config.rs
//! Service configuration: optional TOML file with environment overrides.
//!
//! Resolution order for the file: $APP_CONFIG_PATH, then `config/app.toml`,
//! then built-in defaults. Environment variables always win over the file.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::credentials::DEFAULT_CREDENTIALS_PATH;
use crate::news::search::DEFAULT_SEARCH_BASE_URL;
use crate::summarize::{DEFAULT_SUMMARY_BASE_URL, DEFAULT_SUMMARY_MODEL};

pub const ENV_CONFIG_PATH: &str = "APP_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "config/app.toml";

pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_FORCE_MOCK: &str = "FORCE_MOCK";
pub const ENV_SEARCH_API_KEY: &str = "NEWS_API_KEY";
pub const ENV_SEARCH_BASE_URL: &str = "NEWS_API_BASE_URL";
pub const ENV_CREDENTIALS_PATH: &str = "CREDENTIALS_PATH";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Serve mock content even when a search key is configured.
    pub force_mock: bool,
    pub search_api_key: Option<String>,
    pub search_base_url: String,
    pub summary_base_url: String,
    pub summary_model: String,
    pub credentials_path: PathBuf,
    /// Simulated latency of the share stub, in milliseconds.
    pub share_latency_ms: u64,
    /// Simulated latency of the canned trend views, in milliseconds.
    pub trends_latency_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8000".to_string(),
            force_mock: false,
            search_api_key: None,
            search_base_url: DEFAULT_SEARCH_BASE_URL.to_string(),
            summary_base_url: DEFAULT_SUMMARY_BASE_URL.to_string(),
            summary_model: DEFAULT_SUMMARY_MODEL.to_string(),
            credentials_path: PathBuf::from(DEFAULT_CREDENTIALS_PATH),
            share_latency_ms: 800,
            trends_latency_ms: 500,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let mut cfg = match config_file_path()? {
            Some(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading config from {}", path.display()))?;
                toml::from_str(&raw)
                    .with_context(|| format!("parsing config from {}", path.display()))?
            }
            None => AppConfig::default(),
        };
        cfg.apply_env();
        Ok(cfg)
    }

    /// Environment overrides, applied after the file.
    fn apply_env(&mut self) {
        if let Ok(v) = std::env::var(ENV_BIND_ADDR) {
            self.bind_addr = v;
        }
        if let Ok(v) = std::env::var(ENV_FORCE_MOCK) {
            self.force_mock = matches!(v.trim(), "1" | "true" | "yes");
        }
        if let Ok(v) = std::env::var(ENV_SEARCH_API_KEY) {
            if !v.trim().is_empty() {
                self.search_api_key = Some(v);
            }
        }
        if let Ok(v) = std::env::var(ENV_SEARCH_BASE_URL) {
            self.search_base_url = v;
        }
        if let Ok(v) = std::env::var(ENV_CREDENTIALS_PATH) {
            self.credentials_path = PathBuf::from(v);
        }
    }

    /// The live search path is taken only with a key present and mock mode
    /// not forced.
    pub fn live_search_enabled(&self) -> bool {
        !self.force_mock && self.search_api_key.is_some()
    }
}

fn config_file_path() -> Result<Option<PathBuf>> {
    if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return Ok(Some(pb));
        }
        return Err(anyhow!("APP_CONFIG_PATH points to non-existent path"));
    }
    let default = PathBuf::from(DEFAULT_CONFIG_PATH);
    if default.exists() {
        return Ok(Some(default));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_mock_only() {
        let cfg = AppConfig::default();
        assert!(!cfg.live_search_enabled());
        assert_eq!(cfg.search_base_url, DEFAULT_SEARCH_BASE_URL);
    }

    #[test]
    fn partial_toml_fills_the_rest_from_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            force_mock = true
            search_api_key = "k"
            trends_latency_ms = 0
            "#,
        )
        .unwrap();
        assert!(cfg.force_mock);
        assert!(!cfg.live_search_enabled());
        assert_eq!(cfg.trends_latency_ms, 0);
        assert_eq!(cfg.summary_model, DEFAULT_SUMMARY_MODEL);
    }
}
