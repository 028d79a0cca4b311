//! External audio player process management.

use crate::error::{PlayerError, Result};
use lyrshow_core::AudioHandle;
use std::io;
use std::path::Path;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::{Child, Command};
use tracing::{debug, info};

/// A spawned external audio player.
///
/// Elapsed playback time is wall-clock time since the spawn. That tracks
/// real playback closely enough for lyric display as long as the player
/// starts immediately and is never paused, which holds for the headless
/// invocations used here.
#[derive(Debug)]
pub struct PlayerProcess {
    child: Child,
    command: String,
    started: Instant,
}

impl PlayerProcess {
    /// Spawn `command` playing `file`.
    ///
    /// `ffplay` and `mpv` get arguments that suppress video output and exit
    /// when the track ends; any other command is invoked with the file path
    /// as its only argument. All standard streams are detached so the
    /// player cannot scribble over the lyrics display.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::PlayerNotFound`] when the binary is not on
    /// PATH, or [`PlayerError::Spawn`] for any other spawn failure.
    pub fn spawn(command: &str, file: &Path) -> Result<Self> {
        let mut cmd = Command::new(command);
        match command {
            "ffplay" => {
                cmd.args(["-nodisp", "-autoexit", "-loglevel", "quiet"]);
            }
            "mpv" => {
                cmd.args(["--no-video", "--really-quiet"]);
            }
            _ => {}
        }
        cmd.arg(file)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        debug!("Spawning player: {command} {}", file.display());
        let child = cmd.spawn().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                PlayerError::PlayerNotFound {
                    command: command.to_string(),
                }
            } else {
                PlayerError::Spawn {
                    command: command.to_string(),
                    source: e,
                }
            }
        })?;
        info!("Player started (pid {:?})", child.id());

        Ok(Self {
            child,
            command: command.to_string(),
            started: Instant::now(),
        })
    }

    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }
}

impl AudioHandle for PlayerProcess {
    fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    fn is_alive(&mut self) -> io::Result<bool> {
        Ok(self.child.try_wait()?.is_none())
    }

    fn terminate(&mut self) -> io::Result<()> {
        match self.child.start_kill() {
            Ok(()) => Ok(()),
            // The process already exited and was reaped
            Err(e) if e.kind() == io::ErrorKind::InvalidInput => Ok(()),
            Err(e) => Err(e),
        }
    }
}
