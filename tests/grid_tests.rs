//! Grid tests - bounds, collision and line clearing

use stream_tetris::core::{clear_lines, is_valid_position, merge_piece, Grid, Piece, Position};
use stream_tetris::types::{PieceKind, DEFAULT_COLS, DEFAULT_ROWS, MAX_GRID_DIM, MIN_GRID_DIM};

fn text_grid(rows: &[&str]) -> Grid {
    Grid::from_text(rows, PieceKind::Z).expect("well-formed grid text")
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::default();
    assert_eq!(grid.cols(), DEFAULT_COLS);
    assert_eq!(grid.rows(), DEFAULT_ROWS);

    for y in 0..DEFAULT_ROWS as i16 {
        for x in 0..DEFAULT_COLS as i16 {
            assert_eq!(grid.get(x, y), Some(None), "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_grid_dimensions_are_clamped() {
    let tiny = Grid::new(1, 0);
    assert_eq!((tiny.cols(), tiny.rows()), (MIN_GRID_DIM, MIN_GRID_DIM));

    let huge = Grid::new(500, 500);
    assert_eq!((huge.cols(), huge.rows()), (MAX_GRID_DIM, MAX_GRID_DIM));
}

#[test]
fn test_grid_out_of_bounds() {
    let mut grid = Grid::new(10, 20);
    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, 20), None);
    assert!(!grid.set(10, 0, Some(PieceKind::T)));
    assert!(!grid.set(0, -1, Some(PieceKind::T)));

    // Above the top edge is open; walls and floor are not.
    assert!(grid.is_free(3, -2));
    assert!(!grid.is_free(-1, 5));
    assert!(!grid.is_free(10, 5));
    assert!(!grid.is_free(3, 20));
}

#[test]
fn test_from_text_rejects_ragged_rows() {
    assert!(Grid::from_text(&["....", "...", "....", "...."], PieceKind::I).is_none());
    assert!(Grid::from_text(&["....", "...."], PieceKind::I).is_none());
    assert!(Grid::from_text(&[], PieceKind::I).is_none());
}

#[test]
fn test_valid_position_checks_walls_floor_and_blocks() {
    let grid = text_grid(&[
        "......", //
        "......", //
        "......", //
        "..X...",
    ]);
    let o = Piece::new(PieceKind::O);

    assert!(is_valid_position(&grid, &o, Position::new(0, 0)));
    assert!(is_valid_position(&grid, &o, Position::new(0, 2)));
    // Overlaps the filled cell at (2, 3).
    assert!(!is_valid_position(&grid, &o, Position::new(1, 2)));
    // Right wall and floor.
    assert!(!is_valid_position(&grid, &o, Position::new(5, 0)));
    assert!(!is_valid_position(&grid, &o, Position::new(0, 3)));
    // Partly above the top edge.
    assert!(is_valid_position(&grid, &o, Position::new(0, -1)));
}

#[test]
fn test_merge_writes_piece_kind() {
    let grid = Grid::new(6, 4);
    let t = Piece::new(PieceKind::T);
    let merged = merge_piece(&grid, &t, Position::new(1, 2));

    assert_eq!(merged.get(2, 2), Some(Some(PieceKind::T)));
    assert_eq!(merged.get(1, 3), Some(Some(PieceKind::T)));
    assert_eq!(merged.get(3, 3), Some(Some(PieceKind::T)));
    assert_eq!(merged.get(1, 2), Some(None));
    assert_eq!(merged.filled_in_row(3), 3);
    assert_eq!(grid, Grid::new(6, 4));
}

#[test]
fn test_clear_lines_shifts_rows_down() {
    let grid = text_grid(&[
        "X.....", //
        "XXXXXX", //
        ".X....", //
        "XXXXXX",
    ]);
    let (cleared, count) = clear_lines(&grid);

    assert_eq!(count, 2);
    assert_eq!(
        cleared,
        text_grid(&[
            "......", //
            "......", //
            "X.....", //
            ".X....",
        ])
    );
}

#[test]
fn test_clear_lines_without_full_rows_is_identity() {
    let grid = text_grid(&[
        "......", //
        "X.X.X.", //
        "XXXXX.", //
        ".XXXXX",
    ]);
    let (cleared, count) = clear_lines(&grid);
    assert_eq!(count, 0);
    assert_eq!(cleared, grid);
}

#[test]
fn test_clear_all_rows() {
    let grid = text_grid(&["XXXX", "XXXX", "XXXX", "XXXX"]);
    let (cleared, count) = clear_lines(&grid);
    assert_eq!(count, 4);
    assert_eq!(cleared, Grid::new(4, 4));
}
