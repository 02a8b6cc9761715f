//! User configuration file.
//!
//! `config.toml` lives under `$XDG_CONFIG_HOME/reel` (or `REEL_CONFIG`). A
//! missing file means defaults: data under `$XDG_DATA_HOME/reel`, UTC
//! display times, newest-first lists and `warn` logging.

use std::path::{Path, PathBuf};

use reel_core::{SortKey, SortOrder};
use serde::{Deserialize, Serialize};

/// Contents of `config.toml`. Every section is optional.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ReelConfig {
    #[serde(default)]
    pub data: DataSection,
    #[serde(default)]
    pub ui: UiSection,
    #[serde(default)]
    pub log: LogSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DataSection {
    pub dir: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UiSection {
    pub timezone: Option<String>,
    pub default_sort: Option<SortKey>,
    pub default_order: Option<SortOrder>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LogSection {
    pub level: Option<String>,
}

impl ReelConfig {
    pub fn new(data_dir: PathBuf, timezone: Option<String>) -> Self {
        Self {
            data: DataSection {
                dir: Some(data_dir.to_string_lossy().to_string()),
            },
            ui: UiSection {
                timezone,
                default_sort: Some(SortKey::default()),
                default_order: Some(SortOrder::default()),
            },
            log: LogSection {
                level: Some(crate::constants::DEFAULT_LOG_LEVEL.to_string()),
            },
        }
    }

    /// Parsed display timezone, if one is configured.
    pub fn timezone(&self) -> anyhow::Result<Option<chrono_tz::Tz>> {
        match self.ui.timezone.as_deref() {
            Some(name) => parse_timezone(name),
            None => Ok(None),
        }
    }
}

/// Parse an IANA timezone name; blank or "auto" means unset.
pub fn parse_timezone(value: &str) -> anyhow::Result<Option<chrono_tz::Tz>> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
        return Ok(None);
    }
    trimmed
        .parse::<chrono_tz::Tz>()
        .map(Some)
        .map_err(|_| anyhow::anyhow!("Invalid timezone: {}", trimmed))
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    xdg_data_dir()
}

/// Read the config at `path`; a missing file yields the defaults.
pub fn read_config(path: &Path) -> anyhow::Result<ReelConfig> {
    if !path.exists() {
        return Ok(ReelConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &ReelConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    reel_core::fs::write_atomic(path, contents.as_bytes())
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("reel"));
        }
    }
    Ok(home_dir()?.join(".config").join("reel"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("reel"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("reel"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
