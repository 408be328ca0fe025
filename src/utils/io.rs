// src/utils/io.rs
use std::path::PathBuf;

/// Platform config directory, e.g. `~/.config/passmeter` on Linux.
pub fn get_app_config_dir() -> Option<PathBuf> {
    let dirs = directories::ProjectDirs::from("com", "passmeter", "passmeter");
    if dirs.is_none() {
        log::warn!("Could not determine config directory");
    }
    dirs.map(|d| d.config_dir().to_path_buf())
}

pub fn default_preferences_file() -> Option<PathBuf> {
    get_app_config_dir().map(|dir| dir.join("preferences.json"))
}
