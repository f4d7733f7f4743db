//! Core game logic module - pure, deterministic, and testable
//!
//! This crate is the grid simulation engine. It has **zero dependencies** on UI,
//! timers or I/O:
//!
//! - **Deterministic**: a seed fully determines the piece sequence
//! - **Pure**: every transition borrows the current state and returns a new one
//! - **Small**: a handful of geometry helpers and one transition function
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size playfield with bounds checks and line clearing
//! - [`shape`]: tetromino matrices and clockwise rotation
//! - [`game_state`]: active piece, score, lock sequence, game over
//! - [`rng`]: seeded uniform or 7-bag piece generation
//! - [`snapshot`]: what renderers see
//!
//! # Rules
//!
//! - Left/right/down moves and rotations that collide are silently rejected
//! - Only a failed gravity tick locks a piece
//! - Each cleared line scores 100 points
//! - The game ends when a freshly spawned piece collides
//!
//! # Example
//!
//! ```
//! use stream_tetris_core::{GameConfig, GameState, Status};
//! use stream_tetris_types::Event;
//!
//! let game = GameState::new(GameConfig::default());
//! let game = game.apply(Event::LEFT).apply(Event::Rotate).apply(Event::Tick);
//!
//! assert_eq!(game.status(), Status::Running);
//! assert_eq!(game.score(), 0);
//! ```

pub mod game_state;
pub mod grid;
pub mod rng;
pub mod shape;
pub mod snapshot;

pub use stream_tetris_types as types;

// Re-export commonly used types for convenience
pub use game_state::{
    clear_lines, is_valid_position, merge_piece, GameConfig, GameState, Piece, Position, Status,
};
pub use grid::Grid;
pub use rng::{PieceQueue, Randomizer, SimpleRng};
pub use shape::Shape;
pub use snapshot::GameSnapshot;
