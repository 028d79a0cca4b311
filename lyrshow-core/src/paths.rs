//! Path constants for configuration, lyrics cache, and music library.

use std::path::{Path, PathBuf};

/// The name of the configuration directory under ~/.config/
pub const CONFIG_DIR_NAME: &str = "lyrshow";

/// The name of the main configuration file
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// The name of the lyrics cache directory under the home directory
pub const LYRICS_CACHE_DIR_NAME: &str = ".lyrics_cache";

/// The name of the default music library directory under the home directory
pub const MUSIC_DIR_NAME: &str = "Music";

/// Get the configuration directory path (~/.config/lyrshow/)
#[must_use]
pub fn config_dir() -> PathBuf {
    home_dir().join(".config").join(CONFIG_DIR_NAME)
}

/// Get the config file path (~/.config/lyrshow/config.toml)
#[must_use]
pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// Get the default lyrics cache directory (`~/.lyrics_cache/`)
#[must_use]
pub fn lyrics_cache_dir() -> PathBuf {
    home_dir().join(LYRICS_CACHE_DIR_NAME)
}

/// Get the default music library directory (`~/Music/`)
#[must_use]
pub fn music_dir() -> PathBuf {
    home_dir().join(MUSIC_DIR_NAME)
}

/// Expand a leading `~` component to the user's home directory
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => home_dir().join(rest),
        Err(_) => path.to_path_buf(),
    }
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}
