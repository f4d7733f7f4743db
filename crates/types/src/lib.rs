//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, rendering, input mapping, event scripts).
//!
//! # Grid Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: (`cols / 2 - 1`, 0), i.e. (4, 0) on the default board
//!
//! Both dimensions are configurable per game within
//! [`MIN_GRID_DIM`]..=[`MAX_GRID_DIM`].
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_MS` | 500 | Gravity tick period |
//! | `MIN_TICK_MS` | 10 | Lower clamp for configured tick periods |
//!
//! # Examples
//!
//! ```
//! use stream_tetris_types::{Event, PieceKind, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! // Short names, used in logs
//! assert_eq!(PieceKind::T.as_str(), "t");
//!
//! // Parse an event name
//! assert_eq!(Event::from_str("left"), Some(Event::LEFT));
//! assert_eq!(Event::from_str("tick"), Some(Event::Tick));
//!
//! // Grid dimensions
//! assert_eq!(DEFAULT_COLS, 10);
//! assert_eq!(DEFAULT_ROWS, 20);
//! ```

/// Default board width in cells (10 columns)
pub const DEFAULT_COLS: u16 = 10;

/// Default board height in cells (20 rows)
pub const DEFAULT_ROWS: u16 = 20;

/// Smallest accepted board dimension. A 4x4 shape must always fit.
pub const MIN_GRID_DIM: u16 = 4;

/// Largest accepted board dimension.
pub const MAX_GRID_DIM: u16 = 64;

/// Largest shape width/height (tetrominoes fit in 4x4)
pub const MAX_SHAPE_DIM: usize = 4;

/// Default gravity tick period in milliseconds
pub const DEFAULT_TICK_MS: u64 = 500;

/// Minimum gravity tick period in milliseconds
pub const MIN_TICK_MS: u64 = 10;

/// Points awarded per cleared line
pub const LINE_CLEAR_POINTS: u32 = 100;

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in canonical order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// A discrete input to the simulation.
///
/// Events carry no payload beyond a direction. Timer ticks and key presses
/// are merged into one ordered stream of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// Shift the piece by (dx, dy). A rejected move is a no-op.
    Move { dx: i8, dy: i8 },
    /// Rotate the piece 90° clockwise.
    Rotate,
    /// Gravity: move down one row, locking the piece if it cannot.
    Tick,
}

impl Event {
    pub const LEFT: Event = Event::Move { dx: -1, dy: 0 };
    pub const RIGHT: Event = Event::Move { dx: 1, dy: 0 };
    pub const DOWN: Event = Event::Move { dx: 0, dy: 1 };

    /// Parse a single-word event name (case-insensitive)
    ///
    /// ```
    /// use stream_tetris_types::Event;
    ///
    /// assert_eq!(Event::from_str("Rotate"), Some(Event::Rotate));
    /// assert_eq!(Event::from_str("down"), Some(Event::Move { dx: 0, dy: 1 }));
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Event::LEFT),
            "right" => Some(Event::RIGHT),
            "down" => Some(Event::DOWN),
            "rotate" => Some(Event::Rotate),
            "tick" => Some(Event::Tick),
            _ => None,
        }
    }

    /// Name of the event; arbitrary moves are reported as "move".
    pub fn as_str(&self) -> &'static str {
        match *self {
            Event::LEFT => "left",
            Event::RIGHT => "right",
            Event::DOWN => "down",
            Event::Move { .. } => "move",
            Event::Rotate => "rotate",
            Event::Tick => "tick",
        }
    }
}

/// A cell on the game grid
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a piece of that kind (its color)
pub type Cell = Option<PieceKind>;
