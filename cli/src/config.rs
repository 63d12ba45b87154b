use medium_core::{MediumError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const API_KEY_ENV: &str = "RAPIDAPI_KEY";

/// Persistent configuration saved to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// RapidAPI key (optional, can also be set via RAPIDAPI_KEY env var)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Default tracing filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_pretty() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            log_level: default_log_level(),
            pretty: default_pretty(),
        }
    }
}

impl Config {
    /// Get the config file path (~/.config/medium/config.json)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("medium").join("config.json"))
    }

    /// Load config from `path`, or return default if missing or unreadable
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Set the API key and save to config
    pub fn set_api_key(&mut self, key: String, path: &Path) -> std::io::Result<()> {
        self.api_key = Some(key);
        self.save_to(path)
    }

    /// Resolve the API key.
    /// Priority: 1. command-line flag, 2. RAPIDAPI_KEY env var, 3. config file
    pub fn resolve_api_key(&self, flag: Option<String>) -> Result<String> {
        pick_api_key(flag, std::env::var(API_KEY_ENV).ok(), self.api_key.as_deref()).ok_or_else(
            || {
                MediumError::Config(format!(
                    "no API key: pass --api-key, set {} or run `medium config set-key`",
                    API_KEY_ENV
                ))
            },
        )
    }
}

fn pick_api_key(flag: Option<String>, env: Option<String>, stored: Option<&str>) -> Option<String> {
    flag.filter(|k| !k.is_empty())
        .or_else(|| env.filter(|k| !k.is_empty()))
        .or_else(|| stored.filter(|k| !k.is_empty()).map(str::to_string))
}
