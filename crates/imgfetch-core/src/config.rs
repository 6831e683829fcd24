use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::url_model::DEFAULT_FILENAME;

/// Global configuration loaded from `~/.config/imgfetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FetcherConfig {
    /// Directory images are saved into, relative to the working directory unless absolute.
    pub output_dir: PathBuf,
    /// Filename used when a URL has no usable final path component.
    pub default_filename: String,
    /// Total time allowed per request, in seconds.
    pub timeout_secs: u64,
    /// Time allowed to establish the connection, in seconds.
    pub connect_timeout_secs: u64,
    /// Maximum number of redirects followed per request.
    pub max_redirects: u32,
    /// Optional User-Agent header; libcurl sends none by default.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("Fetched_Images"),
            default_filename: DEFAULT_FILENAME.to_string(),
            timeout_secs: 10,
            connect_timeout_secs: 10,
            max_redirects: 10,
            user_agent: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FetcherConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FetcherConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)
            .with_context(|| format!("write default config {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: FetcherConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
