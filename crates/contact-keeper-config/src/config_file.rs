//! Config file lookup

use std::path::PathBuf;

/// File name looked up in the working directory and in `$HOME`
pub const CONFIG_FILE: &str = ".contact-keeper.toml";

/// Config file locations in lookup order: working directory, then `$HOME`
pub fn config_file_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = std::env::var_os("HOME") {
        candidates.push(PathBuf::from(home).join(CONFIG_FILE));
    }
    candidates
}

/// Read the first config file that exists
///
/// Returns the path it was read from along with its content.
pub fn load_config_file() -> Option<(PathBuf, String)> {
    config_file_candidates().into_iter().find_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some((path, content))
    })
}
