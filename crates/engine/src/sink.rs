//! Output side of the run loop.

use anyhow::Result;

use crate::core::GameSnapshot;

/// Receives every state the run loop produces.
///
/// `render` is called for the initial state and after each event while the
/// game is running. `finish` is called exactly once, with the final state, when
/// the game ends by game over.
pub trait Sink {
    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()>;

    fn finish(&mut self, snapshot: &GameSnapshot) -> Result<()>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        (**self).render(snapshot)
    }

    fn finish(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        (**self).finish(snapshot)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        (**self).render(snapshot)
    }

    fn finish(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        (**self).finish(snapshot)
    }
}
