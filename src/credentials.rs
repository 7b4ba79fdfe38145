// src/credentials.rs
//! File-backed slot for the summarizer API key.
//!
//! This is the service-side stand-in for the UI's saved-key storage: one JSON
//! file, explicit save/clear, absence is not an error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CREDENTIALS_PATH: &str = "config/credentials.json";
pub const ENV_SUMMARY_API_KEY: &str = "OPENAI_API_KEY";

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredKeys {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    summary_api_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct KeyStore {
    path: PathBuf,
}

impl KeyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored key, if any. Unreadable or malformed files count as
    /// absent.
    pub fn load(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let keys: StoredKeys = serde_json::from_str(&raw).ok()?;
        keys.summary_api_key.filter(|k| !k.trim().is_empty())
    }

    pub fn save(&self, key: &str) -> Result<()> {
        let keys = StoredKeys {
            summary_api_key: Some(key.to_string()),
        };
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(&keys)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("removing {}", self.path.display())),
        }
    }
}

/// Resolve the summarizer key once, at wiring time.
///
/// Precedence: explicit argument > stored key > process environment. A missing
/// key is not an error; summarization degrades to fallback text downstream.
pub fn resolve_summary_key(explicit: Option<String>, store: &KeyStore) -> Option<String> {
    explicit
        .filter(|k| !k.trim().is_empty())
        .or_else(|| store.load())
        .or_else(|| std::env::var(ENV_SUMMARY_API_KEY).ok())
        .filter(|k| !k.trim().is_empty())
}
