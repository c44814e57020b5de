//! Randomized word placement and the final fill pass.

use std::cmp::Reverse;

use anyhow::{Result, bail};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::direction::Direction;
use crate::grid::{ALPHABET, Cell, GRID_SIZE, Grid};
use crate::placement::{Candidate, commit, fits, normalize};

/// Default number of random candidates tried per word.
pub const MAX_ATTEMPTS: u32 = 2000;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Random candidates tried per word before it is reported unplaced.
    pub max_attempts: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            bail!("max_attempts must be > 0");
        }
        Ok(())
    }
}

/// Where a word ended up: start cell and direction of its first letter.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Placement {
    /// The word as written into the grid (uppercase).
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

/// A word that exhausted its attempts without finding a valid placement.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Unplaced {
    pub word: String,
    pub attempts: u32,
}

/// A generated puzzle plus the placement report.
///
/// `placed` and `unplaced` are listed in processing order (longest word first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub grid: Grid,
    pub placed: Vec<Placement>,
    pub unplaced: Vec<Unplaced>,
}

#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate using the thread-local random generator.
    pub fn generate<S: AsRef<str>>(&self, words: &[S]) -> Puzzle {
        self.generate_with_rng(words, &mut rand::thread_rng())
    }

    /// Generate drawing every random choice from `rng`.
    #[instrument(skip_all, fields(words = words.len(), max_attempts = self.config.max_attempts))]
    pub fn generate_with_rng<S, R>(&self, words: &[S], rng: &mut R) -> Puzzle
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let mut ordered: Vec<&str> = words.iter().map(|word| word.as_ref()).collect();
        ordered.sort_by_key(|word| Reverse(word.chars().count()));

        let mut grid = Grid::new();
        let mut placed = Vec::new();
        let mut unplaced = Vec::new();

        for word in ordered {
            match self.place_word(&mut grid, word, rng) {
                Some(placement) => {
                    debug!(
                        word = %placement.word,
                        row = placement.row,
                        col = placement.col,
                        direction = ?placement.direction,
                        "word placed"
                    );
                    placed.push(placement);
                }
                None => {
                    warn!(
                        word,
                        attempts = self.config.max_attempts,
                        "word could not be placed"
                    );
                    unplaced.push(Unplaced {
                        word: word.to_string(),
                        attempts: self.config.max_attempts,
                    });
                }
            }
        }

        fill_empty(&mut grid, rng);

        Puzzle {
            grid,
            placed,
            unplaced,
        }
    }

    fn place_word<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        word: &str,
        rng: &mut R,
    ) -> Option<Placement> {
        let letters = normalize(word);
        for _ in 0..self.config.max_attempts {
            let candidate = random_candidate(rng);
            if fits(grid, &letters, &candidate) {
                commit(grid, &letters, &candidate);
                return Some(Placement {
                    word: letters.iter().collect(),
                    row: candidate.row,
                    col: candidate.col,
                    direction: candidate.direction,
                });
            }
        }
        None
    }
}

fn random_candidate<R: Rng + ?Sized>(rng: &mut R) -> Candidate {
    Candidate {
        row: rng.gen_range(0..GRID_SIZE),
        col: rng.gen_range(0..GRID_SIZE),
        direction: Direction::ALL[rng.gen_range(0..Direction::ALL.len())],
    }
}

/// Overwrite every empty cell with a uniformly random letter.
///
/// Cells that already hold a letter are left alone.
pub fn fill_empty<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    for cell in grid.cells_mut() {
        if cell.is_empty() {
            let letter = ALPHABET[rng.gen_range(0..ALPHABET.len())];
            *cell = Cell::Letter(char::from(letter));
        }
    }
}

/// Generate a grid for `words` with the default attempt cap and thread-local randomness.
pub fn generate<S: AsRef<str>>(words: &[S]) -> Grid {
    Generator::default().generate(words).grid
}
