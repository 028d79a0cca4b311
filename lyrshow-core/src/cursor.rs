//! Forward-only cursor tracking the current lyric line.

use crate::lrc::Timeline;
use std::time::Duration;

/// Stateful pointer into a [`Timeline`].
///
/// The current line is the last one whose offset is at or before the elapsed
/// time, clamped to the first line before any line is due. Advancing is
/// amortized O(1) per poll: each line is stepped past at most once over a
/// whole session.
#[derive(Debug)]
pub struct Cursor<'a> {
    timeline: &'a Timeline,
    index: Option<usize>,
    last_elapsed: Duration,
}

impl<'a> Cursor<'a> {
    #[must_use]
    pub fn new(timeline: &'a Timeline) -> Self {
        let index = if timeline.is_empty() { None } else { Some(0) };
        Self {
            timeline,
            index,
            last_elapsed: Duration::ZERO,
        }
    }

    /// Advance to the line current at `elapsed` and return its index.
    ///
    /// The cursor never moves backward: an `elapsed` below the largest value
    /// seen so far is treated as that largest value, so a jittery clock
    /// cannot rewind the display.
    pub fn advance_to(&mut self, elapsed: Duration) -> Option<usize> {
        let elapsed = elapsed.max(self.last_elapsed);
        self.last_elapsed = elapsed;

        if let Some(index) = self.index.as_mut() {
            let lines = self.timeline.lines();
            while *index + 1 < lines.len() && lines[*index + 1].offset <= elapsed {
                *index += 1;
            }
        }
        self.index
    }

    /// Index of the current line; `None` exactly when the timeline is empty.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        self.index
    }

    /// Largest elapsed value observed so far.
    #[must_use]
    pub const fn last_elapsed(&self) -> Duration {
        self.last_elapsed
    }
}
