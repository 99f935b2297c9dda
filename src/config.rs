use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::timeline::layout::{LayoutMode, LayoutOptions, PackingBasis};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct TimelaneConfig {
    pub log: LogConfig,
    pub layout: LayoutConfig,
    pub viewport: ViewportConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LayoutConfig {
    pub default_lane_width: u32,
    pub min_item_width: u32,
    pub lane_height: u32,
    pub mode: LayoutMode,
    pub packing: PackingBasis,
    pub band_gap: usize,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ViewportConfig {
    /// Smallest change in pixels worth re-publishing after a scroll or resize.
    pub anchor_epsilon: f64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_lane_width: 40,
            min_item_width: 60,
            lane_height: 80,
            mode: LayoutMode::Split,
            packing: PackingBasis::Time,
            band_gap: 1,
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            anchor_epsilon: 0.5,
        }
    }
}

impl LayoutConfig {
    pub fn options(&self) -> LayoutOptions {
        LayoutOptions {
            mode: self.mode,
            packing: self.packing,
            band_gap: self.band_gap,
            lane_height: self.lane_height,
        }
    }
}

/// Returns `~/.timelane/`, or `./.timelane/` when no home directory is known.
pub fn default_timelane_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".timelane")
}

/// Returns the default config file path: `~/.timelane/config.toml`
pub fn default_config_path() -> PathBuf {
    default_timelane_dir().join("config.toml")
}

impl TimelaneConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = expand_tilde(&path.as_ref().to_string_lossy());
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(&path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            TimelaneConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply TIMELANE_LOG_LEVEL, TIMELANE_LANE_WIDTH, and TIMELANE_MODE overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("TIMELANE_LOG_LEVEL") {
            self.log.level = val;
        }
        if let Ok(val) = std::env::var("TIMELANE_LANE_WIDTH") {
            match val.parse() {
                Ok(width) => self.layout.default_lane_width = width,
                Err(_) => warn!(value = %val, "ignoring non-numeric TIMELANE_LANE_WIDTH"),
            }
        }
        if let Ok(val) = std::env::var("TIMELANE_MODE") {
            match val.parse() {
                Ok(mode) => self.layout.mode = mode,
                Err(e) => warn!(error = %e, "ignoring TIMELANE_MODE"),
            }
        }
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
