// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Grid construction tests: only an exact 64x64 shape is accepted.

mod common;

use std::fs;
use word_search::{Grid, GridError, GRID_SIDE};

#[test]
fn test_rejects_small_matrix() {
    let result = Grid::from_rows(["This", "Matrix", "Is", "Not", "Right"]);
    assert_eq!(result, Err(GridError::RowCount { found: 5 }));
}

#[test]
fn test_accepts_64_by_64() {
    let grid = Grid::from_rows(common::uniform_rows('A'));
    assert!(grid.is_ok());
}

#[test]
fn test_rejects_64_short_rows() {
    let rows = vec!["AAAA"; GRID_SIDE];
    assert_eq!(
        Grid::from_rows(rows),
        Err(GridError::RowLength { row: 0, found: 4 })
    );
}

#[test]
fn test_error_message_names_the_shape() {
    let err = Grid::from_rows(["x"]).unwrap_err();
    assert!(err.to_string().contains("64x64"));
}

#[test]
fn test_parse_sample_file_layout() {
    let text = common::uniform_rows('q').join("\n");
    let grid: Grid = text.parse().unwrap();
    assert_eq!(grid, common::uniform_grid('q'));
}

#[test]
fn test_round_trip_through_file() {
    let grid = common::padded_grid(&common::OK_COOL_PATTERN);
    let path = std::env::temp_dir().join(format!("word_search_grid_{}.txt", std::process::id()));
    fs::write(&path, grid.to_string()).unwrap();

    let loaded: Grid = fs::read_to_string(&path).unwrap().parse().unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(loaded, grid);
}
