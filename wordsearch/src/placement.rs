//! Checking and committing a single placement candidate.

use crate::direction::Direction;
use crate::grid::{Cell, Grid};

/// A start cell plus a direction to test a word against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl Candidate {
    fn cell(&self, index: usize) -> Option<(usize, usize)> {
        self.direction.step(self.row, self.col, index)
    }
}

/// Uppercase a word into the letters it occupies on the grid.
pub fn normalize(word: &str) -> Vec<char> {
    word.chars().flat_map(char::to_uppercase).collect()
}

/// True if every letter lands inside the grid on an empty or matching cell.
///
/// `letters` must already be normalized. Stops at the first violation.
pub fn fits(grid: &Grid, letters: &[char], candidate: &Candidate) -> bool {
    letters.iter().enumerate().all(|(i, &letter)| {
        let Some((row, col)) = candidate.cell(i) else {
            return false;
        };
        match grid.get(row, col) {
            Some(Cell::Empty) => true,
            Some(Cell::Letter(existing)) => existing == letter,
            None => false,
        }
    })
}

/// Write `letters` along the candidate. Callers check [`fits`] first.
pub fn commit(grid: &mut Grid, letters: &[char], candidate: &Candidate) {
    for (i, &letter) in letters.iter().enumerate() {
        if let Some((row, col)) = candidate.cell(i) {
            grid.set(row, col, Cell::Letter(letter));
        }
    }
}
