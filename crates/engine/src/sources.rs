//! Event sources feeding the run loop.
//!
//! Each source owns a `Sender` and stops by itself once the run loop has
//! dropped its receiver.

use std::time::Duration;

use crossterm::event::{self, Event as TermEvent, KeyEventKind};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, warn};

use crate::input::{handle_key_event, should_quit};
use crate::run::Command;
use crate::types::Event;

/// How long the keyboard thread blocks before re-checking the channel.
const KEY_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Emit `Tick` every `period`, the first one after a full period.
pub fn spawn_ticker(tx: mpsc::Sender<Command>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = interval.tick() => {}
                _ = tx.closed() => break,
            }
            if tx.send(Command::Play(Event::Tick)).await.is_err() {
                break;
            }
        }
        debug!("ticker stopped");
    })
}

/// Read key presses from the terminal on a blocking thread.
///
/// Mapped keys become `Play` commands, quit keys become `Quit`, everything
/// else is dropped. Auto-repeat and release events are ignored.
pub fn spawn_keyboard(tx: mpsc::Sender<Command>) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match event::poll(KEY_POLL_INTERVAL) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(err) => {
                    warn!(error = %err, "keyboard poll failed");
                    break;
                }
            }

            let key = match event::read() {
                Ok(TermEvent::Key(key)) if key.kind == KeyEventKind::Press => key,
                Ok(_) => continue,
                Err(err) => {
                    warn!(error = %err, "keyboard read failed");
                    break;
                }
            };

            let command = if should_quit(key) {
                Command::Quit
            } else if let Some(event) = handle_key_event(key) {
                Command::Play(event)
            } else {
                continue;
            };

            if tx.blocking_send(command).is_err() {
                break;
            }
        }
        debug!("keyboard source stopped");
    })
}

/// Replay a fixed list of events, then drop the sender.
pub fn spawn_script(tx: mpsc::Sender<Command>, events: Vec<Event>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let total = events.len();
        let mut sent = 0usize;
        for event in events {
            if tx.send(Command::Play(event)).await.is_err() {
                break;
            }
            sent += 1;
        }
        debug!(sent, total, "script source finished");
    })
}
