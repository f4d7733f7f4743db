//! Event scripts: replay a fixed event sequence instead of live input.
//!
//! One event per line:
//!
//! ```text
//! # comments and blank lines are ignored
//! left
//! right
//! down
//! rotate
//! tick
//! tick 19        # repeat count, at most MAX_REPEAT
//! move -2 1      # arbitrary offset, never upward
//! ```

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::types::Event;

/// Largest repeat count accepted after an event word.
pub const MAX_REPEAT: usize = 10_000;

/// Parse a script into events. Unknown words are an error naming the line.
pub fn parse_script(text: &str) -> Result<Vec<Event>> {
    let mut events = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let mut words = line.split_whitespace();
        let head = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        if head.eq_ignore_ascii_case("move") {
            let [dx, dy] = args.as_slice() else {
                bail!("line {line_no}: `move` takes two offsets, got {:?}", args);
            };
            let dx: i8 = dx
                .parse()
                .with_context(|| format!("line {line_no}: bad dx {dx:?}"))?;
            let dy: i8 = dy
                .parse()
                .with_context(|| format!("line {line_no}: bad dy {dy:?}"))?;
            if dy < 0 {
                bail!("line {line_no}: pieces cannot move up (dy = {dy})");
            }
            events.push(Event::Move { dx, dy });
            continue;
        }

        let Some(event) = Event::from_str(head) else {
            bail!("line {line_no}: unknown event {head:?}");
        };
        let repeat = match args.as_slice() {
            [] => 1,
            [n] => n
                .parse::<usize>()
                .with_context(|| format!("line {line_no}: bad repeat count {n:?}"))?,
            _ => bail!("line {line_no}: too many arguments for {head:?}"),
        };
        if repeat > MAX_REPEAT {
            bail!("line {line_no}: repeat count too large ({repeat} > {MAX_REPEAT})");
        }
        events.extend(std::iter::repeat(event).take(repeat));
    }

    Ok(events)
}

/// Read and parse a script file.
pub fn load_script(path: &Path) -> Result<Vec<Event>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read event script {}", path.display()))?;
    parse_script(&text).with_context(|| format!("invalid event script {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_words_moves_and_repeats() {
        let events = parse_script(
            "# warm up\n\
             left\n\
             RIGHT  \n\
             \n\
             rotate # spin\n\
             tick 3\n\
             move -2 1\n",
        )
        .unwrap();

        assert_eq!(
            events,
            vec![
                Event::LEFT,
                Event::RIGHT,
                Event::Rotate,
                Event::Tick,
                Event::Tick,
                Event::Tick,
                Event::Move { dx: -2, dy: 1 },
            ]
        );
    }

    #[test]
    fn unknown_event_names_the_line() {
        let err = parse_script("left\njump\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }

    #[test]
    fn move_needs_two_numbers() {
        assert!(parse_script("move 1").is_err());
        assert!(parse_script("move a b").is_err());
        assert!(parse_script("tick 1 2").is_err());
    }

    #[test]
    fn upward_moves_are_rejected() {
        let err = parse_script("left\nmove 0 -128\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
        assert!(parse_script("move 0 0").is_ok());
    }

    #[test]
    fn huge_repeat_counts_are_rejected() {
        let err = parse_script("tick 18446744073709551615").unwrap_err();
        assert!(err.to_string().contains("too large"), "{err}");
        assert!(parse_script("tick 1000000000000").is_err());
        assert!(parse_script("tick 99999999999999999999999").is_err());
        assert_eq!(parse_script("tick 10000").unwrap().len(), MAX_REPEAT);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_script(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(err.to_string().contains("failed to read event script"));
    }
}
