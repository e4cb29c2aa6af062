use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::lang::COMPONENT;

/// Filter configuration loaded from `~/.config/actimg/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Component (string namespace) the state titles are localized from.
    pub string_component: String,
    /// Drop the inline `style` attribute of annotated images (legacy markup cleanup).
    pub strip_image_style: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            string_component: COMPONENT.to_string(),
            strip_image_style: true,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("actimg")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FilterConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FilterConfig::default();
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

/// Load configuration from an explicit path. Missing keys take their defaults.
pub fn load_from(path: &Path) -> Result<FilterConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config file: {}", path.display()))?;
    let cfg: FilterConfig =
        toml::from_str(&data).with_context(|| format!("parse config file: {}", path.display()))?;
    Ok(cfg)
}
