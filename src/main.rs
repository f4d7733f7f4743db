//! Terminal Tetris runner (default binary).
//!
//! Live play: a gravity ticker and the keyboard feed the run loop, drawn as
//! colored blocks (or as text with `TETRIS_RENDERER=text`).
//! With `TETRIS_SCRIPT=path` the events come from a file instead.

use std::fs::File;
use std::io;
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::terminal;
use tokio::sync::mpsc;
use tracing::info;

use stream_tetris::core::GameState;
use stream_tetris::engine::{
    load_script, run, spawn_keyboard, spawn_script, spawn_ticker, Command, LogConfig,
    RendererKind, RunConfig, RunReport, CHANNEL_CAPACITY,
};
use stream_tetris::term::{BlockSink, GameView, TextSink};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging(&LogConfig::from_env())?;
    let config = RunConfig::from_env();
    info!(
        cols = config.game.cols,
        rows = config.game.rows,
        seed = config.game.seed,
        randomizer = config.game.randomizer.as_str(),
        tick_ms = config.tick_ms,
        renderer = ?config.renderer,
        script = ?config.script_path,
        "configuration loaded"
    );

    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    let interactive = match &config.script_path {
        Some(path) => {
            spawn_script(tx, load_script(path)?);
            false
        }
        None => {
            spawn_ticker(tx.clone(), config.tick_period());
            spawn_keyboard(tx);
            true
        }
    };

    let report = play(&config, rx, interactive).await?;
    info!(
        outcome = ?report.outcome,
        score = report.state.score(),
        lines = report.state.lines(),
        events = report.events,
        "run finished"
    );
    if config.renderer == RendererKind::Blocks {
        println!(
            "Score: {}  Lines: {}",
            report.state.score(),
            report.state.lines()
        );
    }
    Ok(())
}

async fn play(
    config: &RunConfig,
    rx: mpsc::Receiver<Command>,
    interactive: bool,
) -> Result<RunReport> {
    let initial = GameState::new(config.game);

    match config.renderer {
        RendererKind::Text if interactive => {
            terminal::enable_raw_mode()?;
            let mut sink = TextSink::new(io::stdout()).interactive();
            let result = run(initial, rx, &mut sink).await;
            // Always try to restore terminal state.
            let _ = terminal::disable_raw_mode();
            result
        }
        RendererKind::Text => {
            let mut sink = TextSink::new(io::stdout());
            run(initial, rx, &mut sink).await
        }
        RendererKind::Blocks => {
            let mut sink = BlockSink::new(GameView::new(config.cell_w, config.cell_h));
            if let Err(err) = sink.enter() {
                let _ = sink.exit();
                return Err(err);
            }
            let result = run(initial, rx, &mut sink).await;
            let _ = sink.exit();
            result
        }
    }
}

/// Log to `TETRIS_LOG_PATH` when set. The terminal belongs to the game, so
/// there is no console logging.
fn init_logging(config: &LogConfig) -> Result<()> {
    let Some(path) = &config.path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_max_level(config.level)
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}
