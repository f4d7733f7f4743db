//! The single consuming loop.

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, trace};

use crate::core::{GameSnapshot, GameState};
use crate::sink::Sink;
use crate::types::Event;

/// Bounded capacity of the command channel shared by all sources.
pub const CHANNEL_CAPACITY: usize = 64;

/// Message from a source to the run loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Event),
    Quit,
}

impl From<Event> for Command {
    fn from(event: Event) -> Self {
        Command::Play(event)
    }
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    GameOver,
    Quit,
    /// Every sender was dropped (e.g. a script ran out)
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub outcome: Outcome,
    pub state: GameState,
    /// Events folded into the state (quit commands excluded)
    pub events: u64,
}

/// Fold commands from `rx` into `initial`, rendering every state to `sink`.
///
/// The receiver is dropped on return, which closes the channel for every
/// source still holding a sender.
pub async fn run<S: Sink + ?Sized>(
    initial: GameState,
    mut rx: mpsc::Receiver<Command>,
    sink: &mut S,
) -> Result<RunReport> {
    let mut state = initial;
    let mut snap = GameSnapshot::default();
    let mut events = 0u64;

    info!(
        cols = state.grid().cols(),
        rows = state.grid().rows(),
        "game started"
    );

    state.snapshot_into(&mut snap);
    if state.game_over() {
        sink.finish(&snap)?;
        return Ok(RunReport {
            outcome: Outcome::GameOver,
            state,
            events,
        });
    }
    sink.render(&snap)?;

    let outcome = loop {
        let Some(command) = rx.recv().await else {
            debug!("all event sources closed");
            break Outcome::Exhausted;
        };
        let event = match command {
            Command::Play(event) => event,
            Command::Quit => {
                info!(score = state.score(), lines = state.lines(), "quit requested");
                break Outcome::Quit;
            }
        };

        events += 1;
        trace!(event = event.as_str(), "event");
        let next = state.apply(event);
        if next.pieces_locked() != state.pieces_locked() {
            debug!(
                piece = state.piece().kind.as_str(),
                lines_cleared = next.lines() - state.lines(),
                points = next.score() - state.score(),
                pieces = next.pieces_locked(),
                "piece locked"
            );
        }
        state = next;
        state.snapshot_into(&mut snap);

        if state.game_over() {
            info!(
                score = state.score(),
                lines = state.lines(),
                pieces = state.pieces_locked(),
                "game over"
            );
            sink.finish(&snap)?;
            break Outcome::GameOver;
        }
        sink.render(&snap)?;
    };

    rx.close();
    Ok(RunReport {
        outcome,
        state,
        events,
    })
}
