use std::fs;
use std::path::Path;
use std::time::Duration;

use log::{info, warn};
use serde::Deserialize;

/// Default config file, overridable with `FOLIO_CONFIG`.
pub const DEFAULT_CONFIG_PATH: &str = "folio.toml";

/// Site configuration read from `folio.toml`. Every key has a default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// File path (relative to the working directory) or http(s) URL.
    pub data_source: String,
    pub static_dir: String,
    pub prefs_path: String,
    pub theme_key: String,
    /// Stand-in for the browser's `prefers-color-scheme: dark`.
    pub prefers_dark: bool,
    pub toast_ms: u64,
    pub particle_count: usize,
    pub frame_ms: u64,
    pub animation_delay_ms: u64,
}

impl Default for FolioConfig {
    fn default() -> Self {
        FolioConfig {
            data_source: "website/mydata.json".to_string(),
            static_dir: "website/static".to_string(),
            prefs_path: "website/prefs.json".to_string(),
            theme_key: "theme".to_string(),
            prefers_dark: false,
            toast_ms: 3000,
            particle_count: 100,
            frame_ms: 16,
            animation_delay_ms: 100,
        }
    }
}

impl FolioConfig {
    /// Load from `FOLIO_CONFIG` or `folio.toml`.
    pub fn load() -> Result<Self, String> {
        let path = std::env::var("FOLIO_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&path))
    }

    /// A missing file yields defaults; an unreadable or malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            warn!("{} not found, using default config", path.display());
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let config = Self::parse(&raw).map_err(|e| format!("{}: {}", path.display(), e))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(raw: &str) -> Result<Self, String> {
        toml::from_str(raw).map_err(|e| format!("Invalid config: {}", e))
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }

    pub fn animation_delay(&self) -> Duration {
        Duration::from_millis(self.animation_delay_ms)
    }
}
