//! Stream Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, tests and
//! benches can use `stream_tetris::{core, engine, input, term, types}`.

pub use stream_tetris_core as core;
pub use stream_tetris_engine as engine;
pub use stream_tetris_input as input;
pub use stream_tetris_term as term;
pub use stream_tetris_types as types;
