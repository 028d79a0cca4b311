//! List display: the full lyric sheet with the current line marked.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo};
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use lyrshow_core::{format_mm_ss, Frame, Renderer, StopReason};

use super::{finish_screen, rule};

pub struct ListRenderer<W> {
    out: W,
}

impl ListRenderer<io::Stdout> {
    #[must_use]
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for ListRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ListRenderer<W> {
    #[cfg(test)]
    fn with_output(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for ListRenderer<W> {
    fn paint(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        let w = &mut self.out;
        w.queue(Clear(ClearType::All))?
            .queue(MoveTo(0, 0))?
            .queue(Hide)?;

        writeln!(w, "{}", rule())?;
        writeln!(w, "  LYRICS")?;
        writeln!(w, "{}", rule())?;
        writeln!(w)?;

        let lines = frame.timeline.lines();
        if lines.is_empty() {
            writeln!(w, "  {}", "(no synchronized lyrics)".dark_grey())?;
        }
        for (i, line) in lines.iter().enumerate() {
            if Some(i) == frame.current {
                writeln!(w, "  {}", format!("► {}", line.text).cyan().bold())?;
            } else {
                writeln!(w, "    {}", line.text)?;
            }
        }

        writeln!(w)?;
        writeln!(w, "  {}", format_mm_ss(frame.elapsed))?;
        w.flush()
    }

    fn finish(&mut self, reason: StopReason) -> io::Result<()> {
        finish_screen(&mut self.out, reason)
    }
}
