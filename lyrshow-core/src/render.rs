//! Rendering contract between the session driver and display strategies.

use crate::config::EffectsConfig;
use crate::lrc::Timeline;
use crate::session::StopReason;
use std::io;
use std::time::Duration;

/// Everything a display strategy needs to paint one frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub timeline: &'a Timeline,
    /// Elapsed playback time at the moment of the poll.
    pub elapsed: Duration,
    /// Index of the current line; `None` exactly when the timeline is empty.
    pub current: Option<usize>,
    pub effects: &'a EffectsConfig,
}

/// A display strategy for synchronized lyrics.
///
/// The driver calls [`paint`](Self::paint) once per poll with a full frame
/// description. Strategies redraw the whole screen from the frame alone;
/// painting the same frame twice must produce identical output. After the
/// session stops the driver calls [`finish`](Self::finish) exactly once.
pub trait Renderer {
    /// Paint one frame.
    ///
    /// # Errors
    ///
    /// Returns any terminal write error. The driver logs these and carries
    /// on; the next poll repaints.
    fn paint(&mut self, frame: &Frame<'_>) -> io::Result<()>;

    /// Paint the final message after the session stopped.
    ///
    /// # Errors
    ///
    /// Returns any terminal write error.
    fn finish(&mut self, reason: StopReason) -> io::Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn paint(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        (**self).paint(frame)
    }

    fn finish(&mut self, reason: StopReason) -> io::Result<()> {
        (**self).finish(reason)
    }
}
