//! Environment-driven configuration.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TETRIS_COLS` | 10 | grid columns |
//! | `TETRIS_ROWS` | 20 | grid rows |
//! | `TETRIS_SEED` | 1 | piece RNG seed |
//! | `TETRIS_RANDOMIZER` | `uniform` | `uniform` or `bag` |
//! | `TETRIS_TICK_MS` | 500 | gravity period (min 10) |
//! | `TETRIS_RENDERER` | `blocks` | `blocks` or `text` |
//! | `TETRIS_CELL_W` / `TETRIS_CELL_H` | 2 / 1 | block size in terminal cells |
//! | `TETRIS_SCRIPT` | unset | replay events from a file |
//! | `TETRIS_LOG_PATH` | unset | log file |
//! | `TETRIS_LOG_LEVEL` | `info` | `trace`, `debug`, `info`, `warn`, `error` |
//!
//! Unparsable values fall back to the default with a warning.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::{warn, Level};

use crate::core::{GameConfig, Randomizer};
use crate::types::{MAX_GRID_DIM, MIN_GRID_DIM, MIN_TICK_MS, DEFAULT_TICK_MS};

/// Which sink draws the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RendererKind {
    /// Colored blocks in a bordered playfield (full screen)
    #[default]
    Blocks,
    /// `.`/`X` text grid with a score line
    Text,
}

impl RendererKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "blocks" | "block" | "canvas" => Some(RendererKind::Blocks),
            "text" | "console" => Some(RendererKind::Text),
            _ => None,
        }
    }
}

/// Settings for one run of the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub game: GameConfig,
    pub tick_ms: u64,
    pub renderer: RendererKind,
    pub cell_w: u16,
    pub cell_h: u16,
    /// When set, events come from this file instead of keyboard and timer
    pub script_path: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            tick_ms: DEFAULT_TICK_MS,
            renderer: RendererKind::default(),
            cell_w: 2,
            cell_h: 1,
            script_path: None,
        }
    }
}

impl RunConfig {
    /// Load from `TETRIS_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let cols = parse_or(&lookup, "TETRIS_COLS", defaults.game.cols, u16::from_str)
            .clamp(MIN_GRID_DIM, MAX_GRID_DIM);
        let rows = parse_or(&lookup, "TETRIS_ROWS", defaults.game.rows, u16::from_str)
            .clamp(MIN_GRID_DIM, MAX_GRID_DIM);
        let seed = parse_or(&lookup, "TETRIS_SEED", defaults.game.seed, u32::from_str);
        let randomizer = parse_or(&lookup, "TETRIS_RANDOMIZER", defaults.game.randomizer, |s| {
            Randomizer::from_str(s).ok_or(())
        });
        let tick_ms =
            parse_or(&lookup, "TETRIS_TICK_MS", defaults.tick_ms, u64::from_str).max(MIN_TICK_MS);
        let renderer = parse_or(&lookup, "TETRIS_RENDERER", defaults.renderer, |s| {
            RendererKind::from_str(s).ok_or(())
        });
        let cell_w = parse_or(&lookup, "TETRIS_CELL_W", defaults.cell_w, u16::from_str).clamp(1, 8);
        let cell_h = parse_or(&lookup, "TETRIS_CELL_H", defaults.cell_h, u16::from_str).clamp(1, 4);
        let script_path = non_empty(&lookup, "TETRIS_SCRIPT").map(PathBuf::from);

        Self {
            game: GameConfig {
                cols,
                rows,
                seed,
                randomizer,
            },
            tick_ms,
            renderer,
            cell_w,
            cell_h,
            script_path,
        }
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// Where and how verbosely to log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub path: Option<PathBuf>,
    pub level: Level,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let level = non_empty(&lookup, "TETRIS_LOG_LEVEL")
            .and_then(|s| Level::from_str(&s).ok())
            .unwrap_or(Level::INFO);
        Self {
            path: non_empty(&lookup, "TETRIS_LOG_PATH").map(PathBuf::from),
            level,
        }
    }
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}

fn parse_or<T, E>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
    parse: impl Fn(&str) -> Result<T, E>,
) -> T {
    match non_empty(lookup, key) {
        None => default,
        Some(raw) => match parse(&raw) {
            Ok(v) => v,
            Err(_) => {
                warn!(key, value = %raw, "ignoring invalid setting, using default");
                default
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_env_gives_defaults() {
        let config = RunConfig::from_lookup(|_| None);
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.tick_period(), Duration::from_millis(500));
        assert_eq!(config.game.cols, 10);
        assert_eq!(config.game.rows, 20);
    }

    #[test]
    fn values_are_parsed_and_clamped() {
        let config = RunConfig::from_lookup(lookup(&[
            ("TETRIS_COLS", "12"),
            ("TETRIS_ROWS", "1000"),
            ("TETRIS_SEED", "42"),
            ("TETRIS_RANDOMIZER", "bag"),
            ("TETRIS_TICK_MS", "1"),
            ("TETRIS_RENDERER", "Text"),
            ("TETRIS_SCRIPT", " moves.txt "),
        ]));
        assert_eq!(config.game.cols, 12);
        assert_eq!(config.game.rows, MAX_GRID_DIM);
        assert_eq!(config.game.seed, 42);
        assert_eq!(config.game.randomizer, Randomizer::Bag);
        assert_eq!(config.tick_ms, MIN_TICK_MS);
        assert_eq!(config.renderer, RendererKind::Text);
        assert_eq!(config.script_path, Some(PathBuf::from("moves.txt")));
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = RunConfig::from_lookup(lookup(&[
            ("TETRIS_COLS", "wide"),
            ("TETRIS_RENDERER", "opengl"),
            ("TETRIS_SCRIPT", "   "),
        ]));
        assert_eq!(config.game.cols, 10);
        assert_eq!(config.renderer, RendererKind::Blocks);
        assert_eq!(config.script_path, None);
    }

    #[test]
    fn log_config() {
        let config = LogConfig::from_lookup(lookup(&[
            ("TETRIS_LOG_PATH", "/tmp/tetris.log"),
            ("TETRIS_LOG_LEVEL", "debug"),
        ]));
        assert_eq!(config.path, Some(PathBuf::from("/tmp/tetris.log")));
        assert_eq!(config.level, Level::DEBUG);

        let fallback = LogConfig::from_lookup(lookup(&[("TETRIS_LOG_LEVEL", "loud")]));
        assert_eq!(fallback.level, Level::INFO);
        assert_eq!(fallback.path, None);
    }
}
