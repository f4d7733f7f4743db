//! Grid module - the playfield
//!
//! A `cols x rows` matrix where each cell is empty or filled with a piece kind.
//! Uses a flat row-major vector; dimensions are fixed for the lifetime of a grid.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//!
//! Operations that change the playfield (`with_filled`, `cleared`) return a new
//! grid and leave `self` untouched.

use arrayvec::ArrayVec;

use crate::types::{Cell, MAX_GRID_DIM, MIN_GRID_DIM};

/// Indices of rows removed by a line clear, bottom to top.
pub type ClearedRows = ArrayVec<u16, { MAX_GRID_DIM as usize }>;

/// The game grid using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cols: u16,
    rows: u16,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid.
    ///
    /// Dimensions are clamped to `MIN_GRID_DIM..=MAX_GRID_DIM`.
    pub fn new(cols: u16, rows: u16) -> Self {
        let cols = cols.clamp(MIN_GRID_DIM, MAX_GRID_DIM);
        let rows = rows.clamp(MIN_GRID_DIM, MAX_GRID_DIM);
        Self {
            cols,
            rows,
            cells: vec![None; cols as usize * rows as usize],
        }
    }

    /// Build a grid from text rows: `.` is empty, any other character is
    /// filled with `kind`. Returns `None` for ragged or out-of-range input.
    pub fn from_text(rows: &[&str], kind: crate::types::PieceKind) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.chars().count();
        if !(MIN_GRID_DIM as usize..=MAX_GRID_DIM as usize).contains(&width)
            || !(MIN_GRID_DIM as usize..=MAX_GRID_DIM as usize).contains(&height)
        {
            return None;
        }

        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            if row.chars().count() != width {
                return None;
            }
            cells.extend(row.chars().map(|c| if c == '.' { None } else { Some(kind) }));
        }

        Some(Self {
            cols: width as u16,
            rows: height as u16,
            cells,
        })
    }

    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.cols as i16 || y < 0 || y >= self.rows as i16 {
            return None;
        }
        Some((y as usize) * (self.cols as usize) + (x as usize))
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a piece cell may occupy (x, y).
    ///
    /// Columns outside `[0, cols)` and rows at or below `rows` are blocked.
    /// Rows above the top edge are open space.
    pub fn is_free(&self, x: i16, y: i16) -> bool {
        if x < 0 || x >= self.cols as i16 || y >= self.rows as i16 {
            return false;
        }
        if y < 0 {
            return true;
        }
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// One row as a slice. Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[Cell] {
        let width = self.cols as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// Number of filled cells in row `y` (0 if out of range)
    pub fn filled_in_row(&self, y: usize) -> usize {
        if y >= self.rows as usize {
            return 0;
        }
        self.row(y).iter().filter(|c| c.is_some()).count()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.rows as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Copy of this grid with `cell` written at every in-bounds (x, y).
    /// Coordinates outside the grid are skipped.
    pub fn with_filled<I>(&self, coords: I, cell: Cell) -> Self
    where
        I: IntoIterator<Item = (i16, i16)>,
    {
        let mut next = self.clone();
        for (x, y) in coords {
            next.set(x, y, cell);
        }
        next
    }

    /// Copy of this grid with every full row removed and empty rows
    /// prepended, plus the indices of the removed rows (bottom to top).
    ///
    /// Uses a two-pointer pass from the bottom up.
    pub fn cleared(&self) -> (Self, ClearedRows) {
        let mut next = self.clone();
        let mut cleared_rows = ArrayVec::new();
        let width = self.cols as usize;
        let mut write_y = self.rows as usize;

        for read_y in (0..self.rows as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y as u16);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    next.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Everything above the last written row becomes empty.
        for cell in &mut next.cells[..write_y * width] {
            *cell = None;
        }

        (next, cleared_rows)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_COLS, crate::types::DEFAULT_ROWS)
    }
}
