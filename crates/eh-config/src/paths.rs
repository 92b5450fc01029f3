//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate with fallbacks.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/eh-core/`, `~/.cache/eh-core/`, `~/.local/share/eh-core/`
//! - macOS: `~/Library/Application Support/eh-core/`, `~/Library/Caches/eh-core/`
//! - Windows: `%APPDATA%\eh-core\`, `%LOCALAPPDATA%\eh-core\`

use anyhow::{Context, Result};
use std::path::PathBuf;

pub(crate) const APP_NAME: &str = "eh-core";
const STORE_FILE: &str = "store.json";

/// Get the application config directory
/// Returns ~/.config/eh-core/ on Linux, ~/Library/Application Support/eh-core/ on macOS
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory
/// Returns ~/.cache/eh-core/ on Linux, ~/Library/Caches/eh-core/ on macOS
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application data directory
pub fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not determine data directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get path to the gallery store inside `dir`
pub fn store_path_in(dir: &std::path::Path) -> PathBuf {
    dir.join(STORE_FILE)
}
