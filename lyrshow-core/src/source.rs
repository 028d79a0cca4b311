//! Playback timing source abstraction.

use std::io;
use std::time::{Duration, Instant};

/// Handle to externally running audio playback.
///
/// The session driver owns exactly one handle per session and uses it as the
/// sole source of elapsed playback time. Implementations should:
///
/// - Report elapsed time monotonically from the moment playback started
/// - Keep `is_alive` and `terminate` non-blocking; both are called from the
///   driver's poll loop
/// - Tolerate `terminate` after the underlying process already exited
pub trait AudioHandle: Send {
    /// Elapsed playback time since the session started.
    fn elapsed(&self) -> Duration;

    /// Non-blocking liveness check.
    ///
    /// `Ok(false)` means playback ended on its own and the session should
    /// finish normally.
    ///
    /// # Errors
    ///
    /// Returns an error when the handle itself is broken and can no longer
    /// answer; the driver treats this as a timing-source failure and ends
    /// the session early.
    fn is_alive(&mut self) -> io::Result<bool>;

    /// Ask the underlying playback to stop.
    ///
    /// # Errors
    ///
    /// Returns an error if the stop signal cannot be delivered.
    fn terminate(&mut self) -> io::Result<()>;
}

/// Clock-only timing source with nothing behind it.
///
/// Reports alive until `run_for` wall-clock time has passed, then reports
/// finished. Lets a session display lyrics on a timer when no audio is
/// being played.
#[derive(Debug)]
pub struct Stopwatch {
    started: Instant,
    run_for: Duration,
}

impl Stopwatch {
    #[must_use]
    pub fn new(run_for: Duration) -> Self {
        Self {
            started: Instant::now(),
            run_for,
        }
    }
}

impl AudioHandle for Stopwatch {
    fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    fn is_alive(&mut self) -> io::Result<bool> {
        Ok(self.started.elapsed() < self.run_for)
    }

    fn terminate(&mut self) -> io::Result<()> {
        Ok(())
    }
}
