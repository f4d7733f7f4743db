//! Game state module - the grid simulation engine
//!
//! Ties the grid, the active piece and the piece queue together and folds one
//! [`Event`] at a time into the next state. Every transition takes `&self` and
//! returns a fresh `GameState`; nothing passed in is ever mutated.
//!
//! Lock sequence (only a failed gravity tick triggers it):
//!
//! 1. merge the piece into the grid at its current position
//! 2. clear full rows, prepending empty rows to keep the height
//! 3. add `lines * LINE_CLEAR_POINTS` to the score
//! 4. spawn the next piece at `(cols / 2 - 1, 0)`
//! 5. if that spawn collides, the game is over and the state is kept as it
//!    was at the moment of lock

use crate::grid::Grid;
use crate::rng::{PieceQueue, Randomizer};
use crate::shape::Shape;
use crate::types::{Event, PieceKind, DEFAULT_COLS, DEFAULT_ROWS, LINE_CLEAR_POINTS};

/// Top-left offset of a piece's shape within the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Shifted position, or `None` if either coordinate would overflow.
    pub fn offset(self, dx: i16, dy: i16) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// Spawn position: horizontally centered at `cols / 2 - 1`, top row.
    ///
    /// On boards too narrow for that, the shape is pushed left until it fits.
    pub fn spawn(cols: u16, shape_width: u8) -> Self {
        let centered = cols as i16 / 2 - 1;
        let rightmost = cols as i16 - shape_width as i16;
        Self::new(centered.min(rightmost).max(0), 0)
    }
}

/// Active falling piece: a shape plus the kind it was spawned as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
}

impl Piece {
    /// Piece in its canonical spawn orientation
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: Shape::of(kind),
        }
    }

    /// Piece with an arbitrary shape, colored as `kind`
    pub fn with_shape(kind: PieceKind, shape: Shape) -> Self {
        Self { kind, shape }
    }

    /// Same piece rotated 90° clockwise
    pub fn rotated(&self) -> Self {
        Self {
            kind: self.kind,
            shape: self.shape.rotate_cw(),
        }
    }

    /// Absolute grid coordinates of every occupied cell at `position`
    pub fn cells_at(&self, position: Position) -> impl Iterator<Item = (i16, i16)> {
        self.shape
            .minos()
            .into_iter()
            .map(move |(dx, dy)| {
                (position.x.saturating_add(dx), position.y.saturating_add(dy))
            })
    }
}

/// Check that every occupied cell of `piece` at `position` is inside the
/// horizontal bounds, above the floor, and on an empty grid cell.
///
/// Stops at the first violation.
pub fn is_valid_position(grid: &Grid, piece: &Piece, position: Position) -> bool {
    piece.cells_at(position).all(|(x, y)| grid.is_free(x, y))
}

/// New grid with every occupied cell of `piece` at `position` filled with the
/// piece kind. The input grid is left untouched.
pub fn merge_piece(grid: &Grid, piece: &Piece, position: Position) -> Grid {
    grid.with_filled(piece.cells_at(position), Some(piece.kind))
}

/// New grid with all full rows removed (empty rows prepended), plus the number
/// of rows removed.
pub fn clear_lines(grid: &Grid) -> (Grid, u32) {
    let (next, rows) = grid.cleared();
    (next, rows.len() as u32)
}

/// Per-game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub cols: u16,
    pub rows: u16,
    pub seed: u32,
    pub randomizer: Randomizer,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            seed: 1,
            randomizer: Randomizer::default(),
        }
    }
}

/// Coarse game phase. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Running,
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    grid: Grid,
    piece: Piece,
    position: Position,
    queue: PieceQueue,
    score: u32,
    lines: u32,
    /// Number of pieces locked into the grid so far
    pieces_locked: u32,
    game_over: bool,
}

impl GameState {
    /// Start a game on an empty grid
    pub fn new(config: GameConfig) -> Self {
        Self::with_grid(
            Grid::new(config.cols, config.rows),
            PieceQueue::new(config.seed, config.randomizer),
        )
    }

    /// Start a game on an existing grid, spawning the first piece from `queue`.
    ///
    /// If the first piece cannot spawn the game starts in the game-over state.
    pub fn with_grid(grid: Grid, mut queue: PieceQueue) -> Self {
        let piece = Piece::new(queue.draw());
        let position = Position::spawn(grid.cols(), piece.shape.width());
        let game_over = !is_valid_position(&grid, &piece, position);
        Self {
            grid,
            piece,
            position,
            queue,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            game_over,
        }
    }

    /// Same state with a different active piece and position
    pub fn with_piece(&self, piece: Piece, position: Position) -> Self {
        Self {
            piece,
            position,
            ..self.clone()
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn status(&self) -> Status {
        if self.game_over {
            Status::GameOver
        } else {
            Status::Running
        }
    }

    /// Fold one event into the state. Every event is a no-op once the game is over.
    pub fn apply(&self, event: Event) -> Self {
        match event {
            Event::Move { dx, dy } => self.apply_move(dx as i16, dy as i16),
            Event::Rotate => self.apply_rotate(),
            Event::Tick => self.apply_tick(),
        }
    }

    /// Shift the piece; a blocked move leaves the state unchanged and never locks.
    ///
    /// Pieces only travel sideways and down: any `dy < 0` is rejected, as is
    /// an offset that overflows the coordinate range.
    pub fn apply_move(&self, dx: i16, dy: i16) -> Self {
        if self.game_over || dy < 0 {
            return self.clone();
        }
        match self.position.offset(dx, dy) {
            Some(target) if is_valid_position(&self.grid, &self.piece, target) => Self {
                position: target,
                ..self.clone()
            },
            _ => self.clone(),
        }
    }

    /// Rotate clockwise in place; no kicks, a blocked rotation is a no-op.
    pub fn apply_rotate(&self) -> Self {
        if self.game_over {
            return self.clone();
        }
        let rotated = self.piece.rotated();
        if is_valid_position(&self.grid, &rotated, self.position) {
            Self {
                piece: rotated,
                ..self.clone()
            }
        } else {
            self.clone()
        }
    }

    /// Gravity: one row down, or lock if the piece has landed.
    pub fn apply_tick(&self) -> Self {
        if self.game_over {
            return self.clone();
        }
        if let Some(below) = self.position.offset(0, 1) {
            if is_valid_position(&self.grid, &self.piece, below) {
                return Self {
                    position: below,
                    ..self.clone()
                };
            }
        }
        self.locked()
    }

    fn locked(&self) -> Self {
        let merged = merge_piece(&self.grid, &self.piece, self.position);
        let (grid, cleared) = clear_lines(&merged);

        let mut queue = self.queue.clone();
        let piece = Piece::new(queue.draw());
        let position = Position::spawn(grid.cols(), piece.shape.width());

        if !is_valid_position(&grid, &piece, position) {
            return Self {
                game_over: true,
                ..self.clone()
            };
        }

        Self {
            grid,
            piece,
            position,
            queue,
            score: self.score.saturating_add(cleared * LINE_CLEAR_POINTS),
            lines: self.lines + cleared,
            pieces_locked: self.pieces_locked + 1,
            game_over: false,
        }
    }

    /// Write a render-facing copy of this state into `out`, reusing its buffer.
    pub fn snapshot_into(&self, out: &mut crate::snapshot::GameSnapshot) {
        out.cols = self.grid.cols();
        out.rows = self.grid.rows();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());

        for (x, y) in self.piece.cells_at(self.position) {
            if x >= 0 && y >= 0 && x < out.cols as i16 && y < out.rows as i16 {
                out.cells[y as usize * out.cols as usize + x as usize] = Some(self.piece.kind);
            }
        }

        out.score = self.score;
        out.lines = self.lines;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> crate::snapshot::GameSnapshot {
        let mut s = crate::snapshot::GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> GameState {
        GameState::new(GameConfig::default())
    }

    #[test]
    fn spawn_is_centered_at_top() {
        let state = game();
        assert_eq!(state.position(), Position::new(4, 0));
        assert_eq!(state.status(), Status::Running);
    }

    #[test]
    fn spawn_clamps_on_narrow_boards() {
        assert_eq!(Position::spawn(4, 4), Position::new(0, 0));
        assert_eq!(Position::spawn(10, 4), Position::new(4, 0));
    }

    #[test]
    fn merge_does_not_touch_input_grid() {
        let grid = Grid::new(10, 20);
        let piece = Piece::new(PieceKind::O);
        let merged = merge_piece(&grid, &piece, Position::new(0, 18));
        assert_eq!(grid.cells().iter().filter(|c| c.is_some()).count(), 0);
        assert_eq!(merged.get(0, 18), Some(Some(PieceKind::O)));
        assert_eq!(merged.get(1, 19), Some(Some(PieceKind::O)));
    }

    #[test]
    fn failed_soft_drop_does_not_lock() {
        let state = game().with_piece(Piece::new(PieceKind::I), Position::new(3, 19));
        let next = state.apply(Event::DOWN);
        assert_eq!(next, state);
        assert_eq!(next.pieces_locked(), 0);
    }

    #[test]
    fn tick_on_landed_piece_locks() {
        let state = game().with_piece(Piece::new(PieceKind::I), Position::new(3, 19));
        let next = state.apply(Event::Tick);
        assert_eq!(next.pieces_locked(), 1);
        assert_eq!(next.grid().filled_in_row(19), 4);
        assert_eq!(next.position().y, 0);
    }

    #[test]
    fn snapshot_overlays_active_piece() {
        let state = game().with_piece(Piece::new(PieceKind::O), Position::new(0, 0));
        let snap = state.snapshot();
        assert_eq!(snap.get(0, 0), Some(PieceKind::O));
        assert_eq!(snap.get(1, 1), Some(PieceKind::O));
        assert_eq!(snap.get(2, 0), None);
        // The grid itself stays empty until lock.
        assert!(!state.grid().is_occupied(0, 0));
    }
}
