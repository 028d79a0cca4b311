//! Display strategies for the playback session.
//!
//! Each strategy repaints the whole screen on every poll and writes through a
//! generic [`Write`] so tests can capture the output bytes.

mod centered;
mod effects;
mod list;
mod scrolling;

pub use centered::CenteredRenderer;
pub use list::ListRenderer;
pub use scrolling::ScrollingRenderer;

use std::io::{self, Write};

use crossterm::cursor::Show;
use crossterm::QueueableCommand;
use lyrshow_core::{DisplayMode, Frame, Renderer, StopReason};

/// Horizontal rule width shared by the framed displays.
const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Build the renderer for a display mode, painting to stdout.
pub fn for_mode(mode: DisplayMode, title: &str) -> Box<dyn Renderer + Send> {
    match mode {
        DisplayMode::Scrolling => Box::new(ScrollingRenderer::new(title)),
        DisplayMode::Centered => Box::new(CenteredRenderer::new()),
        DisplayMode::List => Box::new(ListRenderer::new()),
    }
}

/// The current line's text, glitched when the effect is enabled.
fn current_line_text(frame: &Frame<'_>, text: &str) -> String {
    if frame.effects.glitch {
        let seed = effects::frame_seed(frame.elapsed, frame.current.unwrap_or(0));
        effects::glitch(text, seed)
    } else {
        text.to_string()
    }
}

const fn stop_message(reason: StopReason) -> &'static str {
    match reason {
        StopReason::PlaybackFinished => "Playback finished",
        StopReason::Cancelled => "Stopped",
        StopReason::TimingSourceFailed => "Playback ended early",
    }
}

/// Restore the cursor and print the final session message.
fn finish_screen<W: Write>(w: &mut W, reason: StopReason) -> io::Result<()> {
    w.queue(Show)?;
    writeln!(w, "\n{}", stop_message(reason))?;
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_messages() {
        assert_eq!(stop_message(StopReason::PlaybackFinished), "Playback finished");
        assert_eq!(stop_message(StopReason::Cancelled), "Stopped");
        assert_eq!(stop_message(StopReason::TimingSourceFailed), "Playback ended early");
    }
}
