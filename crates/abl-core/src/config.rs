use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/abl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AblConfig {
    /// Root URL the bootstrap resource path is resolved against.
    pub base_url: String,
    /// Path of the bootstrap document, relative to `base_url`.
    pub resource_path: String,
    /// Connect timeout in seconds for the fetch.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds for the fetch.
    pub request_timeout_secs: u64,
    /// Optional response body size cap in bytes (None = unlimited).
    #[serde(default)]
    pub max_body_bytes: Option<u64>,
}

impl Default for AblConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000/".to_string(),
            resource_path: "json/basic.json".to_string(),
            connect_timeout_secs: 15,
            request_timeout_secs: 30,
            max_body_bytes: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("abl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AblConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = AblConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: AblConfig = toml::from_str(&data)?;
    Ok(cfg)
}
