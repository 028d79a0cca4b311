//! Command-line interface definition

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use lyrshow_core::DisplayMode;

/// Synchronized lyrics in your terminal
#[derive(Debug, Parser)]
#[command(name = "lyrshow", version, about)]
pub struct Cli {
    /// Path to the config file (defaults to ~/.config/lyrshow/config.toml)
    #[arg(long, global = true, env = "LYRSHOW_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Play a track from the music library with synchronized lyrics
    Play(PlayArgs),
    /// Show cached lyrics on a timer, without playing audio
    Show(ShowArgs),
    /// List library tracks and whether lyrics are cached for them
    List,
    /// Add a lyrics file to the cache
    Add(AddArgs),
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Track to play, matched against library file names
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Display mode (scrolling, centered, list)
    #[arg(long)]
    pub mode: Option<DisplayMode>,

    /// Corrupt the current line with combining marks
    #[arg(long)]
    pub glitch: bool,

    /// Highlight the current line in white instead of cyan
    #[arg(long)]
    pub flash: bool,

    /// Use this lyrics file instead of the cache
    #[arg(long, value_name = "FILE")]
    pub lyrics_file: Option<PathBuf>,

    /// Play without lyrics
    #[arg(long, conflicts_with = "lyrics_file")]
    pub audio_only: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Title to look up in the lyrics cache
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Display mode (scrolling, centered, list)
    #[arg(long)]
    pub mode: Option<DisplayMode>,

    /// Corrupt the current line with combining marks
    #[arg(long)]
    pub glitch: bool,

    /// Highlight the current line in white instead of cyan
    #[arg(long)]
    pub flash: bool,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Lyrics file to store
    pub file: PathBuf,

    /// Cache the lyrics under this title instead of the file name
    #[arg(long)]
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_collects_query_words() {
        let cli = Cli::parse_from(["lyrshow", "play", "bohemian", "rhapsody"]);
        match cli.command {
            Command::Play(args) => {
                assert_eq!(args.query, vec!["bohemian", "rhapsody"]);
                assert!(args.mode.is_none());
                assert!(!args.glitch);
                assert!(!args.audio_only);
            }
            _ => panic!("Expected play subcommand"),
        }
    }

    #[test]
    fn test_play_mode_and_effects() {
        let cli = Cli::parse_from(["lyrshow", "play", "song", "--mode", "centered", "--glitch"]);
        match cli.command {
            Command::Play(args) => {
                assert_eq!(args.mode, Some(DisplayMode::Centered));
                assert!(args.glitch);
                assert!(!args.flash);
            }
            _ => panic!("Expected play subcommand"),
        }
    }

    #[test]
    fn test_play_requires_query() {
        assert!(Cli::try_parse_from(["lyrshow", "play"]).is_err());
    }

    #[test]
    fn test_audio_only_conflicts_with_lyrics_file() {
        let result = Cli::try_parse_from([
            "lyrshow",
            "play",
            "song",
            "--audio-only",
            "--lyrics-file",
            "a.lrc",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(Cli::try_parse_from(["lyrshow", "play", "song", "--mode", "spiral"]).is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["lyrshow", "list", "--config", "/tmp/custom.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/custom.toml")));
        assert!(matches!(cli.command, Command::List));
    }

    #[test]
    fn test_add_with_title() {
        let cli = Cli::parse_from(["lyrshow", "add", "song.lrc", "--title", "My Song"]);
        match cli.command {
            Command::Add(args) => {
                assert_eq!(args.file, PathBuf::from("song.lrc"));
                assert_eq!(args.title.as_deref(), Some("My Song"));
            }
            _ => panic!("Expected add subcommand"),
        }
    }
}
