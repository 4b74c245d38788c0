//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/contact-keeper/`
//! - macOS: `~/Library/Application Support/contact-keeper/`
//! - Windows: `%APPDATA%\contact-keeper\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "contact-keeper";
const STORAGE_FILE: &str = "storage.toml";

/// Get the application config directory, creating it if missing
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory: {:?}", dir))?;
    Ok(dir)
}

/// Get path to the durable key-value storage file
pub fn storage_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(STORAGE_FILE))
}
