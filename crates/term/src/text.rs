//! Text console presentation.
//!
//! ```text
//! Score: 100
//! . . . . X X . . . .
//! . . . . X X . . . .
//! ```
//!
//! Empty cells print as `.`, filled cells as `X`, separated by one space.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use crossterm::{cursor, terminal, QueueableCommand};

use crate::core::GameSnapshot;
use crate::engine::Sink;

pub const EMPTY_MARK: char = '.';
pub const FILLED_MARK: char = 'X';
pub const GAME_OVER_TEXT: &str = "Game Over!";

/// Append the score line and grid rows to `out`, each line ending in `newline`.
pub fn render_text_into(snap: &GameSnapshot, newline: &str, out: &mut String) {
    let _ = write!(out, "Score: {}{}", snap.score, newline);
    for y in 0..snap.rows {
        for (x, cell) in snap.row(y).iter().enumerate() {
            if x > 0 {
                out.push(' ');
            }
            out.push(if cell.is_some() { FILLED_MARK } else { EMPTY_MARK });
        }
        out.push_str(newline);
    }
}

pub fn render_text(snap: &GameSnapshot) -> String {
    let mut out = String::new();
    render_text_into(snap, "\n", &mut out);
    out
}

/// Prints each state as text, clearing the screen first when asked to.
pub struct TextSink<W: Write> {
    out: W,
    clear_screen: bool,
    newline: &'static str,
    scratch: String,
}

impl<W: Write> TextSink<W> {
    /// Plain output: no screen clearing, `\n` line endings.
    pub fn new(out: W) -> Self {
        Self {
            out,
            clear_screen: false,
            newline: "\n",
            scratch: String::new(),
        }
    }

    /// Clear the screen before each frame and use `\r\n` so output stays
    /// aligned while the terminal is in raw mode.
    pub fn interactive(mut self) -> Self {
        self.clear_screen = true;
        self.newline = "\r\n";
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for TextSink<W> {
    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        if self.clear_screen {
            self.out.queue(terminal::Clear(terminal::ClearType::All))?;
            self.out.queue(cursor::MoveTo(0, 0))?;
        }
        self.scratch.clear();
        render_text_into(snapshot, self.newline, &mut self.scratch);
        self.out.write_all(self.scratch.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn finish(&mut self, _snapshot: &GameSnapshot) -> Result<()> {
        write!(self.out, "{}{}", GAME_OVER_TEXT, self.newline)?;
        self.out.flush()?;
        Ok(())
    }
}
