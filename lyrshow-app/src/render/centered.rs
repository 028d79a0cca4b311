//! Centered display: only the current line, in the middle of the screen.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo};
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use lyrshow_core::{format_mm_ss, Frame, Renderer, StopReason};

use super::{current_line_text, finish_screen};

/// Blank lines above and below the current line.
const VERTICAL_PAD: usize = 10;

/// Width used when the terminal size cannot be queried.
const FALLBACK_WIDTH: u16 = 80;

pub struct CenteredRenderer<W> {
    out: W,
    /// Fixed width for tests; live terminal width when `None`.
    width_override: Option<u16>,
}

impl CenteredRenderer<io::Stdout> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            width_override: None,
        }
    }
}

impl Default for CenteredRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> CenteredRenderer<W> {
    #[cfg(test)]
    fn with_output(out: W, width: u16) -> Self {
        Self {
            out,
            width_override: Some(width),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn width(&self) -> u16 {
        self.width_override.unwrap_or_else(|| {
            crossterm::terminal::size().map_or(FALLBACK_WIDTH, |(cols, _)| cols)
        })
    }
}

fn centered_padding(width: u16, text: &str) -> usize {
    usize::from(width).saturating_sub(text.chars().count()) / 2
}

impl<W: Write> Renderer for CenteredRenderer<W> {
    fn paint(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        let width = self.width();
        let w = &mut self.out;
        w.queue(Clear(ClearType::All))?
            .queue(MoveTo(0, 0))?
            .queue(Hide)?;

        for _ in 0..VERTICAL_PAD {
            writeln!(w)?;
        }

        if let Some(line) = frame.current.and_then(|i| frame.timeline.get(i)) {
            let text = current_line_text(frame, &line.text);
            let pad = " ".repeat(centered_padding(width, &text));
            let styled = if frame.effects.flash {
                text.white().bold()
            } else {
                text.cyan().bold()
            };
            writeln!(w, "{pad}{styled}")?;
        }

        for _ in 0..VERTICAL_PAD {
            writeln!(w)?;
        }

        writeln!(w)?;
        writeln!(w, "  {}", format_mm_ss(frame.elapsed))?;
        w.flush()
    }

    fn finish(&mut self, reason: StopReason) -> io::Result<()> {
        finish_screen(&mut self.out, reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyrshow_core::{EffectsConfig, Timeline};
    use std::time::Duration;

    #[test]
    fn test_padding_centers_by_char_count() {
        assert_eq!(centered_padding(40, "Hello"), 17);
        assert_eq!(centered_padding(11, "Hello"), 3);
        assert_eq!(centered_padding(4, "too long for this"), 0);
    }

    #[test]
    fn test_paint_shows_only_current_line() {
        let timeline = Timeline::parse("[00:01.00] Alpha\n[00:03.00] Beta");
        let effects = EffectsConfig::default();
        let frame = Frame {
            timeline: &timeline,
            elapsed: Duration::from_secs(3),
            current: Some(1),
            effects: &effects,
        };

        let mut renderer = CenteredRenderer::with_output(Vec::new(), 40);
        renderer.paint(&frame).unwrap();
        let screen = String::from_utf8(renderer.into_inner()).unwrap();

        assert!(screen.contains("Beta"));
        assert!(!screen.contains("Alpha"));
        assert!(screen.contains("00:03"));
    }

    #[test]
    fn test_empty_timeline_still_paints_footer() {
        let timeline = Timeline::default();
        let effects = EffectsConfig::default();
        let frame = Frame {
            timeline: &timeline,
            elapsed: Duration::from_secs(59),
            current: None,
            effects: &effects,
        };

        let mut renderer = CenteredRenderer::with_output(Vec::new(), 40);
        renderer.paint(&frame).unwrap();
        let screen = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(screen.contains("00:59"));
    }
}
