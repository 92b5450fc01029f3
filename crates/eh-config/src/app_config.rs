//! Application configuration
//!
//! Configuration loaded from .eh-core.toml file.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::{config_file, paths};

/// Application configuration loaded from .eh-core.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Host the gallery client talks to
    #[serde(default = "default_gallery_host")]
    pub gallery_host: String,

    /// Delay before an empty page is skipped by fetching the next one
    #[serde(default = "default_gap_skip_delay_ms")]
    pub gap_skip_delay_ms: u64,

    /// Overrides the platform data directory for the gallery store
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_gallery_host() -> String {
    eh_client::DEFAULT_HOST.to_string()
}

fn default_gap_skip_delay_ms() -> u64 {
    200
}

fn default_log_level() -> String {
    "debug".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gallery_host: default_gallery_host(),
            gap_skip_delay_ms: default_gap_skip_delay_ms(),
            data_dir: None,
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        config_file::load_app_config_from(&config_file::candidate_paths())
    }

    pub fn gap_skip_delay(&self) -> Duration {
        Duration::from_millis(self.gap_skip_delay_ms)
    }

    /// Location of the JSON gallery store
    pub fn store_path(&self) -> Result<PathBuf> {
        let dir = match &self.data_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir)?;
                dir.clone()
            }
            None => paths::data_dir()?,
        };
        Ok(paths::store_path_in(&dir))
    }
}
