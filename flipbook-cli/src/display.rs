//! Terminal rendering of the computed frame index.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU32, Ordering};

use crossterm::{
    cursor,
    terminal::{self, ClearType},
    QueueableCommand,
};
use flipbook_lib::sink::{DisplaySink, SinkError};

/// Display sink that redraws a single status line in place.
///
/// Frames arrive 0-based from the engine; the line shows a marker sweeping
/// through the pass plus a human-friendly 1-based counter.
pub struct TerminalDisplaySink {
    frame_count: u32,
    last_frame: AtomicU32,
}

impl TerminalDisplaySink {
    pub fn new(frame_count: u32) -> Self {
        Self {
            frame_count,
            last_frame: AtomicU32::new(u32::MAX),
        }
    }

    fn render(&self, frame: u32) -> io::Result<()> {
        let mut line = String::with_capacity(self.frame_count as usize + 16);
        line.push('[');
        for position in 0..self.frame_count {
            line.push(if position == frame { '#' } else { '.' });
        }
        line.push(']');

        let mut stdout = io::stdout();
        stdout.queue(cursor::MoveToColumn(0))?;
        stdout.queue(terminal::Clear(ClearType::CurrentLine))?;
        write!(stdout, "{} frame {:>3}/{}", line, frame + 1, self.frame_count)?;
        stdout.flush()
    }
}

impl DisplaySink for TerminalDisplaySink {
    fn set_frame(&self, frame: u32) -> Result<(), SinkError> {
        // Late ticks can land on the frame already shown; skip the redraw.
        if self.last_frame.swap(frame, Ordering::Relaxed) == frame {
            return Ok(());
        }
        self.render(frame).map_err(SinkError::Io)
    }
}
