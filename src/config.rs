//! User settings, read from `config.toml` in the platform config directory.
//!
//! Every field has a default so a partial file (or none at all) is fine.

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::media::AutoplayPolicy;

pub const APP_NAME: &str = "portfolui";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tick_rate_ms: u64,
    pub log_level: String,
    pub mouse: bool,
    pub set_title: bool,
    pub media: MediaConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    pub muted: bool,
    pub autoplay: AutoplayPolicy,
    pub visibility_threshold: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 80,
            log_level: "info".into(),
            mouse: true,
            set_title: false,
            media: MediaConfig::default(),
        }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            muted: true,
            autoplay: AutoplayPolicy::RequireMuted,
            visibility_threshold: 0.5,
        }
    }
}

impl Config {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    fn validate(self) -> Result<Self> {
        let threshold = self.media.visibility_threshold;
        ensure!(
            threshold > 0.0 && threshold <= 1.0,
            "media.visibility_threshold must be in (0, 1], got {threshold}"
        );
        ensure!(self.tick_rate_ms > 0, "tick_rate_ms must be positive");
        Ok(self)
    }
}

/// Directory holding `config.toml` and an optional `content.toml`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|path| path.join(APP_NAME))
}

/// Loads the default config file, falling back to defaults when it is missing.
pub fn load() -> Result<Config> {
    match config_dir().map(|dir| dir.join(CONFIG_FILE)) {
        Some(path) if path.exists() => load_from_path(&path),
        _ => Ok(Config::default()),
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: Config = toml::from_str(&text)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    config.validate()
}
