pub mod cache;
pub mod config;
pub mod cursor;
pub mod error;
pub mod fuzzy;
pub mod lrc;
pub mod paths;
pub mod render;
pub mod session;
pub mod source;
pub mod time;

pub use cache::LyricsCache;
pub use config::{Config, DisplayConfig, DisplayMode, EffectsConfig, LibraryConfig, PlayerConfig};
pub use cursor::Cursor;
pub use error::CoreError;
pub use fuzzy::MatchCandidate;
pub use lrc::{LyricLine, Timeline};
pub use paths::{config_dir, config_path, lyrics_cache_dir, music_dir, CONFIG_DIR_NAME};
pub use render::{Frame, Renderer};
pub use session::{
    run_session, SessionDriver, SessionOptions, SessionResult, StopReason, DEFAULT_POLL_INTERVAL,
};
pub use source::{AudioHandle, Stopwatch};
pub use time::format_mm_ss;
