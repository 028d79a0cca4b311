use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub effects: EffectsConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub library: LibraryConfig,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub mode: DisplayMode,
}

/// How lyrics are laid out on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Sliding window around the current line with a header and footer
    #[default]
    Scrolling,
    /// Only the current line, horizontally centered
    Centered,
    /// Every line at once with the current one marked
    List,
}

impl DisplayMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scrolling => "scrolling",
            Self::Centered => "centered",
            Self::List => "list",
        }
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scrolling" => Ok(Self::Scrolling),
            "centered" => Ok(Self::Centered),
            "list" => Ok(Self::List),
            other => Err(format!(
                "unknown display mode {other:?} (expected \"scrolling\", \"centered\", or \"list\")"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EffectsConfig {
    /// Corrupt displayed text with random combining marks
    #[serde(default)]
    pub glitch: bool,
    /// Render the current line bright white instead of the accent color
    #[serde(default)]
    pub flash: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    #[serde(default = "default_player_command")]
    pub command: String,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
}

fn default_player_command() -> String {
    "ffplay".to_string()
}

const fn default_poll_interval() -> u64 {
    100
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            command: default_player_command(),
            poll_interval_ms: default_poll_interval(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Overrides ~/Music as the audio file location
    #[serde(default)]
    pub music_dir: Option<PathBuf>,
    /// Overrides ~/.lyrics_cache as the lyrics location
    #[serde(default)]
    pub lyrics_dir: Option<PathBuf>,
}

impl Config {
    /// Get the config file path (~/.config/lyrshow/config.toml)
    #[must_use]
    pub fn config_path() -> PathBuf {
        crate::paths::config_path()
    }

    /// Load config from the default location, creating a template on first run
    ///
    /// A freshly created template is immediately usable, so the first run
    /// proceeds with default settings instead of failing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or written, fails
    /// to parse, or contains invalid values.
    pub fn load_or_create() -> Result<Self> {
        Self::load_or_create_at(&Self::config_path())
    }

    /// Load config from `path`, creating a template there on first run
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or written, fails
    /// to parse, or contains invalid values.
    pub fn load_or_create_at(path: &Path) -> Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, CONFIG_TEMPLATE)?;
            tracing::info!("Created config template at {}", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Delay between elapsed-time polls during playback
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.player.poll_interval_ms)
    }

    /// Music library directory, honoring the `[library]` override
    #[must_use]
    pub fn music_dir(&self) -> PathBuf {
        self.library
            .music_dir
            .as_deref()
            .map_or_else(crate::paths::music_dir, crate::paths::expand_tilde)
    }

    /// Lyrics cache directory, honoring the `[library]` override
    #[must_use]
    pub fn lyrics_dir(&self) -> PathBuf {
        self.library
            .lyrics_dir
            .as_deref()
            .map_or_else(crate::paths::lyrics_cache_dir, crate::paths::expand_tilde)
    }

    fn validate(&self) -> Result<()> {
        if self.player.poll_interval_ms == 0 {
            return Err(CoreError::ConfigInvalid {
                message: "player.poll_interval_ms must be greater than zero".to_string(),
            });
        }
        if self.player.command.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "player.command must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

const CONFIG_TEMPLATE: &str = r#"# lyrshow configuration
# ~/.config/lyrshow/config.toml

[display]
# Display mode: "scrolling", "centered", or "list"
mode = "scrolling"

[effects]
# Corrupt displayed text with random combining marks
glitch = false
# Render the current line bright white instead of cyan
flash = false

[player]
# External audio player. "ffplay" and "mpv" get video-less, quiet argument
# sets; any other command is invoked with the file path as its only argument.
command = "ffplay"
# Delay between elapsed-time polls in milliseconds. Keep at or below 150 so
# line transitions feel immediate.
poll_interval_ms = 100

[library]
# Uncomment to override the default locations.
# music_dir = "~/Music"
# lyrics_dir = "~/.lyrics_cache"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses_to_defaults() {
        let config: Config = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.display.mode, DisplayMode::Scrolling);
        assert!(!config.effects.glitch);
        assert!(!config.effects.flash);
        assert_eq!(config.player.command, "ffplay");
        assert_eq!(config.poll_interval(), Duration::from_millis(100));
        assert!(config.library.music_dir.is_none());
        assert!(config.library.lyrics_dir.is_none());
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.display.mode, DisplayMode::Scrolling);
        assert_eq!(config.player.poll_interval_ms, 100);
    }

    #[test]
    fn test_first_run_writes_template_and_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_or_create_at(&path).unwrap();
        assert_eq!(config.player.command, "ffplay");
        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);

        // Second load reads the file it just wrote
        let reloaded = Config::load_or_create_at(&path).unwrap();
        assert_eq!(reloaded.player.poll_interval_ms, 100);
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[player]\npoll_interval_ms = 0\n").unwrap();

        let err = Config::load_or_create_at(&path).unwrap_err();
        assert!(matches!(err, CoreError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_blank_player_command_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[player]\ncommand = \"  \"\n").unwrap();

        let err = Config::load_or_create_at(&path).unwrap_err();
        assert!(matches!(err, CoreError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "display = {{{{").unwrap();

        let err = Config::load_or_create_at(&path).unwrap_err();
        assert!(matches!(err, CoreError::ConfigParseError(_)));
    }

    #[test]
    fn test_display_mode_from_str() {
        assert_eq!("scrolling".parse::<DisplayMode>(), Ok(DisplayMode::Scrolling));
        assert_eq!("Centered".parse::<DisplayMode>(), Ok(DisplayMode::Centered));
        assert_eq!("LIST".parse::<DisplayMode>(), Ok(DisplayMode::List));
        assert!("karaoke".parse::<DisplayMode>().is_err());
    }

    #[test]
    fn test_library_overrides_expand_tilde() {
        let config: Config =
            toml::from_str("[library]\nmusic_dir = \"~/tunes\"\nlyrics_dir = \"/srv/lrc\"\n")
                .unwrap();
        assert!(!config.music_dir().starts_with("~"));
        assert!(config.music_dir().ends_with("tunes"));
        assert_eq!(config.lyrics_dir(), PathBuf::from("/srv/lrc"));
    }
}
