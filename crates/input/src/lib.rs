//! Terminal input module.
//!
//! Maps `crossterm` key events onto simulation [`Event`](crate::types::Event)s.
//! Keys with no mapping produce nothing; they are never an error.

pub mod map;

pub use stream_tetris_types as types;

pub use map::{handle_key_event, should_quit};
