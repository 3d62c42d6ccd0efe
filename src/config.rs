use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TaskboardError;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const API_URL_ENV: &str = "TASKBOARD_API_URL";
pub const CONFIG_DIR: &str = ".taskboard";
pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Find `.taskboard/config.json` by walking up from `start`.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let candidate = dir.join(CONFIG_DIR).join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}

pub fn load_file(path: &Path) -> Result<Config, TaskboardError> {
    let text = fs::read_to_string(path)
        .map_err(|e| TaskboardError::config(format!("Cannot read {}: {e}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|e| TaskboardError::config(format!("Invalid config {}: {e}", path.display())))
}

/// Resolve the effective configuration for this process.
///
/// Precedence: `--api-url` flag, then `TASKBOARD_API_URL`, then the nearest
/// config file, then built-in defaults. The timeout only comes from the file.
pub fn resolve(api_url_flag: Option<&str>) -> Result<Config, TaskboardError> {
    let cwd = env::current_dir().map_err(|e| TaskboardError::config(e.to_string()))?;
    resolve_from(api_url_flag, env::var(API_URL_ENV).ok(), &cwd)
}

pub fn resolve_from(
    api_url_flag: Option<&str>,
    api_url_env: Option<String>,
    start: &Path,
) -> Result<Config, TaskboardError> {
    let mut config = match find_config_file(start) {
        Some(path) => {
            debug!(path = %path.display(), "loading config file");
            load_file(&path)?
        }
        None => Config::default(),
    };

    if let Some(url) = api_url_env.filter(|u| !u.trim().is_empty()) {
        config.api_url = url;
    }
    if let Some(url) = api_url_flag {
        config.api_url = url.to_string();
    }
    config.api_url = normalize_api_url(&config.api_url)?;
    Ok(config)
}

pub fn normalize_api_url(url: &str) -> Result<String, TaskboardError> {
    let url = url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(TaskboardError::config(format!(
            "API URL must start with http:// or https://: {url}"
        )));
    }
    Ok(url.trim_end_matches('/').to_string())
}

/// Write `<dir>/.taskboard/config.json`, creating the directory if needed.
pub fn write_config(dir: &Path, config: &Config) -> Result<PathBuf, TaskboardError> {
    let config_dir = dir.join(CONFIG_DIR);
    fs::create_dir_all(&config_dir).map_err(|e| TaskboardError::config(e.to_string()))?;
    let path = config_dir.join(CONFIG_FILE);
    let text = serde_json::to_string_pretty(config)?;
    fs::write(&path, text).map_err(|e| TaskboardError::config(e.to_string()))?;
    Ok(path)
}
