//! Render-facing copy of a game state.
//!
//! Sinks only ever see snapshots: the grid with the active piece composited in,
//! plus the counters a renderer prints.

use crate::types::{Cell, PieceKind, DEFAULT_COLS, DEFAULT_ROWS};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub cols: u16,
    pub rows: u16,
    /// Row-major cells, active piece included
    pub cells: Vec<Cell>,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cols = DEFAULT_COLS;
        self.rows = DEFAULT_ROWS;
        self.cells.clear();
        self.cells
            .resize(DEFAULT_COLS as usize * DEFAULT_ROWS as usize, None);
        self.score = 0;
        self.lines = 0;
        self.game_over = false;
    }

    /// Cell at (x, y); out-of-range reads as empty.
    pub fn get(&self, x: u16, y: u16) -> Option<PieceKind> {
        if x >= self.cols || y >= self.rows {
            return None;
        }
        self.cells
            .get(y as usize * self.cols as usize + x as usize)
            .copied()
            .flatten()
    }

    pub fn row(&self, y: u16) -> &[Cell] {
        let w = self.cols as usize;
        let start = (y as usize * w).min(self.cells.len());
        let end = (start + w).min(self.cells.len());
        &self.cells[start..end]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            cells: Vec::new(),
            score: 0,
            lines: 0,
            game_over: false,
        };
        s.clear();
        s
    }
}
