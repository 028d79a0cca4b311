pub mod error;
pub mod library;
pub mod process;

pub use error::PlayerError;
pub use library::{MusicLibrary, AUDIO_EXTENSIONS};
pub use process::PlayerProcess;
