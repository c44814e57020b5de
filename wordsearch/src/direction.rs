//! Direction vectors a word may run along.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::GRID_SIZE;

/// One of the eight straight directions (orthogonal and diagonal).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    East,
    West,
    South,
    North,
    SouthEast,
    NorthWest,
    SouthWest,
    NorthEast,
}

impl Direction {
    /// All directions, in the order candidates draw from.
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::West,
        Direction::South,
        Direction::North,
        Direction::SouthEast,
        Direction::NorthWest,
        Direction::SouthWest,
        Direction::NorthEast,
    ];

    /// `(row_delta, col_delta)`; rows grow downwards.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::South => (1, 0),
            Direction::North => (-1, 0),
            Direction::SouthEast => (1, 1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthWest => (1, -1),
            Direction::NorthEast => (-1, 1),
        }
    }

    /// Cell reached after `steps` moves from `(row, col)`.
    ///
    /// Returns `None` once the walk leaves the grid.
    pub fn step(self, row: usize, col: usize, steps: usize) -> Option<(usize, usize)> {
        let (dr, dc) = self.delta();
        let steps = isize::try_from(steps).ok()?;
        let row = offset(row, dr.checked_mul(steps)?)?;
        let col = offset(col, dc.checked_mul(steps)?)?;
        Some((row, col))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::East => "east",
            Direction::West => "west",
            Direction::South => "south",
            Direction::North => "north",
            Direction::SouthEast => "south_east",
            Direction::NorthWest => "north_west",
            Direction::SouthWest => "south_west",
            Direction::NorthEast => "north_east",
        };
        f.write_str(name)
    }
}

fn offset(base: usize, delta: isize) -> Option<usize> {
    let moved = base.checked_add_signed(delta)?;
    (moved < GRID_SIZE).then_some(moved)
}
