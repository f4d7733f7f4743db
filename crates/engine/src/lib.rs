//! Run loop module - event sources, the single consuming fold, and sinks
//!
//! Timer ticks, key presses and scripted events all become [`Command`]s on one
//! bounded `tokio::sync::mpsc` channel. [`run`] is the only consumer: it folds
//! each event into the [`GameState`](crate::core::GameState) and hands every new
//! state to a [`Sink`].
//!
//! # Lifecycle
//!
//! 1. Create the channel and spawn sources with a cloned `Sender` each
//! 2. `run` renders the initial state, then one render per event
//! 3. On game over the sink's `finish` is called once and the loop returns
//! 4. Returning drops the receiver; sources notice the closed channel and exit
//!
//! # Configuration
//!
//! [`RunConfig::from_env`] and [`LogConfig::from_env`] read `TETRIS_*`
//! environment variables; see [`config`] for the list.

pub mod config;
pub mod run;
pub mod script;
pub mod sink;
pub mod sources;

pub use stream_tetris_core as core;
pub use stream_tetris_input as input;
pub use stream_tetris_types as types;

pub use config::{LogConfig, RendererKind, RunConfig};
pub use run::{run, Command, Outcome, RunReport, CHANNEL_CAPACITY};
pub use script::{load_script, parse_script};
pub use sink::Sink;
pub use sources::{spawn_keyboard, spawn_script, spawn_ticker};
