//! Full-screen block sink: `GameView` + `TerminalRenderer`.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;

use crate::core::GameSnapshot;
use crate::engine::Sink;
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

/// How long the final "GAME OVER" frame stays up before the screen is restored.
const GAME_OVER_HOLD: Duration = Duration::from_millis(1500);

pub struct BlockSink<W: Write = io::Stdout> {
    view: GameView,
    renderer: TerminalRenderer<W>,
    fb: FrameBuffer,
    /// Fixed viewport; `None` follows the terminal size.
    viewport: Option<Viewport>,
    hold: Duration,
}

impl BlockSink<io::Stdout> {
    pub fn new(view: GameView) -> Self {
        Self {
            view,
            renderer: TerminalRenderer::new(),
            fb: FrameBuffer::new(0, 0),
            viewport: None,
            hold: GAME_OVER_HOLD,
        }
    }

    /// Enter raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    /// Restore the terminal.
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl<W: Write> BlockSink<W> {
    /// Sink drawing into an arbitrary writer at a fixed size.
    pub fn with_writer(view: GameView, out: W, viewport: Viewport) -> Self {
        Self {
            view,
            renderer: TerminalRenderer::with_writer(out),
            fb: FrameBuffer::new(viewport.width, viewport.height),
            viewport: Some(viewport),
            hold: Duration::ZERO,
        }
    }

    pub fn renderer(&self) -> &TerminalRenderer<W> {
        &self.renderer
    }

    fn current_viewport(&self) -> Viewport {
        self.viewport.unwrap_or_else(|| {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            Viewport::new(w, h)
        })
    }

    fn draw(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        let viewport = self.current_viewport();
        self.view.render_into(snapshot, viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}

impl<W: Write> Sink for BlockSink<W> {
    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.draw(snapshot)
    }

    fn finish(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.draw(snapshot)?;
        if !self.hold.is_zero() {
            std::thread::sleep(self.hold);
        }
        Ok(())
    }
}
