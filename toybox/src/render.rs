//! Output formatting for command results.

use anyhow::{Context, Result};
use cake::Bake;
use serde::Serialize;
use wordsearch::{Placement, Puzzle, Unplaced};

#[derive(Serialize)]
struct PuzzleDocument<'a> {
    grid: Vec<String>,
    placed: &'a [Placement],
    unplaced: &'a [Unplaced],
}

pub fn bake_text(bake: &Bake) -> String {
    format!(
        "cakes={} flour_left={} sugar_left={}",
        bake.cakes, bake.flour_left, bake.sugar_left
    )
}

pub fn bake_json(bake: &Bake) -> Result<String> {
    serde_json::to_string_pretty(bake).context("serialize bake json")
}

/// Grid rows followed by one line per placed and unplaced word.
pub fn puzzle_text(puzzle: &Puzzle) -> String {
    let mut out = puzzle.grid.to_string();
    for placement in &puzzle.placed {
        out.push_str(&format!(
            "placed: {} row={} col={} direction={}\n",
            placement.word, placement.row, placement.col, placement.direction
        ));
    }
    for unplaced in &puzzle.unplaced {
        out.push_str(&format!(
            "unplaced: {} attempts={}\n",
            unplaced.word, unplaced.attempts
        ));
    }
    out
}

pub fn puzzle_json(puzzle: &Puzzle) -> Result<String> {
    let doc = PuzzleDocument {
        grid: puzzle.grid.rows(),
        placed: &puzzle.placed,
        unplaced: &puzzle.unplaced,
    };
    serde_json::to_string_pretty(&doc).context("serialize puzzle json")
}
