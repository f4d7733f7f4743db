//! Terminal sinks for the run loop.
//!
//! Two presentations of the same snapshot:
//!
//! - [`BlockSink`]: colored blocks in a bordered playfield, drawn through a
//!   framebuffer and flushed with diffing (`crossterm`)
//! - [`TextSink`]: the console variant, a `Score:` line followed by a `.`/`X`
//!   grid, and `Game Over!` at the end
//!
//! Rendering into the framebuffer (`GameView`) and into text is pure and
//! unit-tested; only the sinks touch a writer.

pub mod blocks;
pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod text;

pub use stream_tetris_core as core;
pub use stream_tetris_engine as engine;
pub use stream_tetris_types as types;

pub use blocks::BlockSink;
pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{piece_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use text::{render_text, render_text_into, TextSink};
