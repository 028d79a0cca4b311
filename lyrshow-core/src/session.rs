//! Session driver: polls an audio handle and repaints synchronized lyrics.

use crate::config::EffectsConfig;
use crate::cursor::Cursor;
use crate::lrc::Timeline;
use crate::render::{Frame, Renderer};
use crate::source::AudioHandle;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Default delay between elapsed-time polls. Small enough that line
/// transitions feel immediate.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The audio process ended on its own.
    PlaybackFinished,
    /// Cancellation was requested, typically by Ctrl+C.
    Cancelled,
    /// The elapsed-time source failed mid-session.
    TimingSourceFailed,
}

/// Outcome of one synchronized display session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionResult {
    /// True when the audio process ran to completion.
    pub completed_normally: bool,
    /// How many distinct lyric lines were current in a painted frame.
    pub lines_shown: usize,
    pub reason: StopReason,
}

/// Tunables for a session.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// Delay between polls of the elapsed-time source.
    pub poll_interval: Duration,
    /// Effects forwarded to the display strategy with every frame.
    pub effects: EffectsConfig,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            effects: EffectsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DriverState {
    Idle,
    Running,
    Stopped,
}

/// Drives one synchronized display session to completion.
///
/// Owns the cursor, the audio handle, and the display strategy for the
/// session's whole lifetime. [`run`](Self::run) consumes the driver, so no
/// polls or paints can happen after it stops.
pub struct SessionDriver<'a, H, R> {
    timeline: &'a Timeline,
    cursor: Cursor<'a>,
    handle: H,
    renderer: R,
    options: SessionOptions,
    cancel: CancellationToken,
    state: DriverState,
    lines_shown: usize,
    last_painted: Option<usize>,
}

impl<'a, H: AudioHandle, R: Renderer> SessionDriver<'a, H, R> {
    pub fn new(
        timeline: &'a Timeline,
        handle: H,
        renderer: R,
        options: SessionOptions,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            timeline,
            cursor: Cursor::new(timeline),
            handle,
            renderer,
            options,
            cancel,
            state: DriverState::Idle,
            lines_shown: 0,
            last_painted: None,
        }
    }

    /// Run the session until playback ends, cancellation fires, or the
    /// timing source fails.
    pub async fn run(mut self) -> SessionResult {
        self.transition(DriverState::Running);
        let cancel = self.cancel.clone();

        let reason = loop {
            tokio::select! {
                () = cancel.cancelled() => {
                    debug!("Cancellation requested, terminating playback");
                    if let Err(e) = self.handle.terminate() {
                        warn!("Failed to terminate playback: {e}");
                    }
                    break StopReason::Cancelled;
                }
                () = tokio::time::sleep(self.options.poll_interval) => {
                    match self.handle.is_alive() {
                        Ok(true) => self.poll_and_paint(),
                        Ok(false) => break StopReason::PlaybackFinished,
                        Err(e) => {
                            warn!("Timing source failed: {e}");
                            break StopReason::TimingSourceFailed;
                        }
                    }
                }
            }
        };

        self.transition(DriverState::Stopped);
        if let Err(e) = self.renderer.finish(reason) {
            warn!("Failed to paint final frame: {e}");
        }

        SessionResult {
            completed_normally: reason == StopReason::PlaybackFinished,
            lines_shown: self.lines_shown,
            reason,
        }
    }

    fn poll_and_paint(&mut self) {
        let elapsed = self.handle.elapsed();
        let current = self.cursor.advance_to(elapsed);
        let frame = Frame {
            timeline: self.timeline,
            elapsed,
            current,
            effects: &self.options.effects,
        };
        match self.renderer.paint(&frame) {
            Ok(()) => {
                // The cursor never moves backward, so a changed index is a
                // line not counted yet
                if current.is_some() && current != self.last_painted {
                    self.last_painted = current;
                    self.lines_shown += 1;
                }
            }
            // Transient output trouble; the next poll repaints anyway
            Err(e) => warn!("Frame paint failed: {e}"),
        }
    }

    fn transition(&mut self, next: DriverState) {
        debug!(from = ?self.state, to = ?next, "Session state change");
        self.state = next;
    }
}

/// Run a full synchronized display session.
///
/// Single entry point tying together a parsed timeline, a live audio
/// handle, and a display strategy. Cancellation is observed within one poll
/// interval; on cancellation the audio process is terminated before this
/// returns. The final screen state is always painted via
/// [`Renderer::finish`], whatever ended the session.
pub async fn run_session<H: AudioHandle, R: Renderer>(
    timeline: &Timeline,
    handle: H,
    renderer: R,
    options: SessionOptions,
    cancel: CancellationToken,
) -> SessionResult {
    SessionDriver::new(timeline, handle, renderer, options, cancel)
        .run()
        .await
}
