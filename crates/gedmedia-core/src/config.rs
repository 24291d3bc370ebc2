use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::MediaError;

/// Media resolution settings loaded from `~/.config/gedmedia/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaLocatorConfig {
    /// Directory served directly by the web server.
    pub unprotected_root: PathBuf,
    /// Access-controlled directory only reachable through the media firewall.
    pub protected_root: PathBuf,
    /// Maximum width in pixels of generated thumbnails.
    pub thumbnail_max_width: u32,
    /// When set, protected images are served without a watermark. Part of the etag.
    #[serde(default)]
    pub suppress_watermark: bool,
    /// Number of sub-directories of a media filename kept beneath the media root.
    #[serde(default)]
    pub media_directory_levels: usize,
    /// Where the placeholder thumbnail lives; defaults to the XDG cache dir.
    #[serde(default)]
    pub thumbnail_cache_dir: Option<PathBuf>,
    /// Path of the unprotected root as seen from the web root. Direct links
    /// and `filename=` gateway requests are built beneath it.
    #[serde(default = "default_media_url_prefix")]
    pub media_url_prefix: String,
    /// Web path of the placeholder thumbnail image.
    #[serde(default = "default_placeholder_url")]
    pub placeholder_url: String,
}

fn default_media_url_prefix() -> String {
    "media".to_string()
}

fn default_placeholder_url() -> String {
    "images/media/placeholder.png".to_string()
}

impl Default for MediaLocatorConfig {
    fn default() -> Self {
        Self {
            unprotected_root: PathBuf::from("media"),
            protected_root: PathBuf::from("media_firewall"),
            thumbnail_max_width: 100,
            suppress_watermark: false,
            media_directory_levels: 0,
            thumbnail_cache_dir: None,
            media_url_prefix: default_media_url_prefix(),
            placeholder_url: default_placeholder_url(),
        }
    }
}

impl MediaLocatorConfig {
    /// Rejects settings the locator cannot work with.
    pub fn validate(&self) -> Result<(), MediaError> {
        if self.thumbnail_max_width == 0 {
            return Err(MediaError::Config(
                "thumbnail_max_width must be greater than zero".to_string(),
            ));
        }
        if self.unprotected_root == self.protected_root {
            return Err(MediaError::Config(format!(
                "unprotected_root and protected_root must differ (both {})",
                self.unprotected_root.display()
            )));
        }
        if self.placeholder_url.is_empty() {
            return Err(MediaError::Config(
                "placeholder_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Directory holding the placeholder thumbnail.
    pub fn cache_dir(&self) -> PathBuf {
        if let Some(dir) = &self.thumbnail_cache_dir {
            return dir.clone();
        }
        xdg::BaseDirectories::with_prefix("gedmedia")
            .map(|dirs| dirs.get_cache_home().join("gedmedia"))
            .unwrap_or_else(|_| std::env::temp_dir().join("gedmedia"))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gedmedia")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MediaLocatorConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MediaLocatorConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<MediaLocatorConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: MediaLocatorConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
