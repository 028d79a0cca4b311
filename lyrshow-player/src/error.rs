use thiserror::Error;

/// Unified error type for external player and library operations.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// The configured player binary is not installed or not on PATH.
    #[error("Player {command:?} not found; install it or change player.command in the config")]
    PlayerNotFound { command: String },

    /// The player binary exists but could not be started.
    #[error("Failed to start player {command:?}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Library scanning or other I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with `PlayerError`.
pub type Result<T> = std::result::Result<T, PlayerError>;
