//! Scrolling display: a short window of lyrics around the current line.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo};
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use lyrshow_core::{format_mm_ss, Frame, Renderer, StopReason};

use super::{current_line_text, finish_screen, rule};

/// Context lines shown after the current one.
const CONTEXT_AFTER: usize = 3;

pub struct ScrollingRenderer<W> {
    out: W,
    title: String,
}

impl ScrollingRenderer<io::Stdout> {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_output(title, io::stdout())
    }
}

impl<W: Write> ScrollingRenderer<W> {
    pub fn with_output(title: impl Into<String>, out: W) -> Self {
        Self {
            out,
            title: title.into(),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for ScrollingRenderer<W> {
    fn paint(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        let w = &mut self.out;
        w.queue(Clear(ClearType::All))?
            .queue(MoveTo(0, 0))?
            .queue(Hide)?;

        writeln!(w, "{}", rule())?;
        writeln!(w, "  NOW PLAYING: {}", self.title)?;
        writeln!(w, "{}", rule())?;
        writeln!(w)?;

        let lines = frame.timeline.lines();
        if let Some(current) = frame.current {
            let start = current.saturating_sub(1);
            let end = (current + CONTEXT_AFTER + 1).min(lines.len());
            for (i, line) in lines.iter().enumerate().take(end).skip(start) {
                if i == current {
                    let text = format!("► {}", current_line_text(frame, &line.text));
                    let styled = if frame.effects.flash {
                        text.white().bold()
                    } else {
                        text.cyan().bold()
                    };
                    writeln!(w, "\n  {styled}\n")?;
                } else {
                    writeln!(w, "    {}", line.text.as_str().dark_grey())?;
                }
            }
        } else {
            writeln!(w, "  {}", "(no synchronized lyrics)".dark_grey())?;
        }

        writeln!(w)?;
        writeln!(w, "  {}  [Ctrl+C to stop]", format_mm_ss(frame.elapsed))?;
        w.flush()
    }

    fn finish(&mut self, reason: StopReason) -> io::Result<()> {
        finish_screen(&mut self.out, reason)
    }
}
