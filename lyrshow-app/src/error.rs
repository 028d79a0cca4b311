//! Application-level error type

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the command-line application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No track in {} matches {query:?}", .dir.display())]
    TrackNotFound { query: String, dir: PathBuf },

    #[error("No cached lyrics match {query:?} (add some with `lyrshow add`)")]
    LyricsNotFound { query: String },

    #[error(transparent)]
    CoreError(#[from] lyrshow_core::CoreError),

    #[error(transparent)]
    PlayerError(#[from] lyrshow_player::PlayerError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
