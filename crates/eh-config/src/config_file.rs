//! Locating, parsing and validating `.eh-core.toml`
//!
//! The first readable candidate wins: the working directory, then the home
//! directory. A file that exists but does not parse or validate is reported
//! and ignored in favor of the defaults; it never falls through to the next
//! candidate.

use anyhow::{bail, ensure, Context, Result};
use eh_client::GalleryHost;
use std::path::PathBuf;

use crate::app_config::AppConfig;

pub const CONFIG_FILE: &str = ".eh-core.toml";

/// Longest accepted pause before an empty page is skipped
pub const MAX_GAP_SKIP_DELAY_MS: u64 = 60_000;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Where a config file may live, most specific first
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(CONFIG_FILE));
    }
    candidates
}

/// First candidate that can be read, with its content
pub fn read_first(candidates: &[PathBuf]) -> Option<(PathBuf, String)> {
    candidates.iter().find_map(|path| {
        std::fs::read_to_string(path)
            .ok()
            .map(|content| (path.clone(), content))
    })
}

/// Parse and validate config file content
pub fn parse_app_config(content: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(content).context("Config is not valid TOML")?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &AppConfig) -> Result<()> {
    let hosts = [GalleryHost::EHentai, GalleryHost::ExHentai];
    if !hosts.iter().any(|host| host.domain() == config.gallery_host) {
        bail!("Unknown gallery_host '{}'", config.gallery_host);
    }
    ensure!(
        config.gap_skip_delay_ms <= MAX_GAP_SKIP_DELAY_MS,
        "gap_skip_delay_ms {} exceeds {}",
        config.gap_skip_delay_ms,
        MAX_GAP_SKIP_DELAY_MS
    );
    let level = config.log_level.trim().to_lowercase();
    ensure!(
        LOG_LEVELS.contains(&level.as_str()),
        "Unknown log_level '{}'",
        config.log_level
    );
    Ok(())
}

/// Load the config from the first readable candidate, or defaults
pub fn load_app_config_from(candidates: &[PathBuf]) -> AppConfig {
    let Some((path, content)) = read_first(candidates) else {
        log::debug!("No {} found, using default app config", CONFIG_FILE);
        return AppConfig::default();
    };

    match parse_app_config(&content) {
        Ok(config) => {
            log::info!("Loaded app config from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!("Ignoring {}: {:#}", path.display(), e);
            AppConfig::default()
        }
    }
}
