//! Shapes module - tetromino matrices and clockwise rotation
//!
//! A shape is a small boolean matrix (at most 4x4). Shapes are values: rotation
//! returns a new shape and never touches the original. There are no per-kind
//! rotation tables and no wall kicks; the same transpose-then-reverse transform
//! applies to every shape.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, MAX_SHAPE_DIM};

/// Offset of a single occupied cell relative to the shape's top-left corner
pub type MinoOffset = (i16, i16);

/// Occupied offsets of a shape, row-major
pub type Minos = ArrayVec<MinoOffset, { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// Boolean matrix of up to 4x4 cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from rows of 0/1 values.
    ///
    /// Returns `None` if the matrix is empty, ragged, larger than 4x4, or has
    /// no occupied cell.
    ///
    /// ```
    /// use stream_tetris_core::Shape;
    ///
    /// let t = Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]).unwrap();
    /// assert_eq!((t.width(), t.height()), (3, 2));
    /// assert!(Shape::from_rows(&[&[0, 0]]).is_none());
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height == 0 || height > MAX_SHAPE_DIM || width == 0 || width > MAX_SHAPE_DIM {
            return None;
        }

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut any = false;
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return None;
            }
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
                any |= v != 0;
            }
        }

        any.then_some(Self {
            width: width as u8,
            height: height as u8,
            cells,
        })
    }

    /// Canonical spawn shape for a piece kind
    pub fn of(kind: PieceKind) -> Self {
        let rows: &[&[u8]] = match kind {
            PieceKind::I => &[&[1, 1, 1, 1]],
            PieceKind::O => &[&[1, 1], &[1, 1]],
            PieceKind::T => &[&[0, 1, 0], &[1, 1, 1]],
            PieceKind::J => &[&[1, 0, 0], &[1, 1, 1]],
            PieceKind::L => &[&[0, 0, 1], &[1, 1, 1]],
            PieceKind::S => &[&[0, 1, 1], &[1, 1, 0]],
            PieceKind::Z => &[&[1, 1, 0], &[0, 1, 1]],
        };
        // Static tables above are always within 4x4 and non-empty.
        match Self::from_rows(rows) {
            Some(shape) => shape,
            None => unreachable!("invalid built-in shape for {:?}", kind),
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Occupied offsets, row-major. Stack-only.
    pub fn minos(&self) -> Minos {
        let mut out = Minos::new();
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                if self.cells[y][x] {
                    out.push((x as i16, y as i16));
                }
            }
        }
        out
    }

    /// Rotate 90° clockwise: transpose, then reverse each row.
    ///
    /// New row `i` is old column `i` read bottom to top.
    pub fn rotate_cw(&self) -> Self {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, row) in cells.iter_mut().enumerate().take(w) {
            for (j, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.cells[h - 1 - j][i];
            }
        }
        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }

    /// Render as rows of `#` and `.` (tests and debugging)
    pub fn to_rows_string(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                out.push(if self.cells[y][x] { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }
}
