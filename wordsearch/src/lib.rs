//! Word-search puzzle generation.
//!
//! Places a list of words into a fixed [`GRID_SIZE`] square grid along one of
//! eight straight directions, then fills the leftover cells with random
//! letters. The crate is split the same way the generation proceeds:
//!
//! - **[`grid`]**: cell state and the grid itself.
//! - **[`direction`]**: the eight direction vectors and bounds-checked stepping.
//! - **[`placement`]**: checking and committing a single candidate placement.
//! - **[`generator`]**: the bounded random search per word and the fill pass.
//!
//! Randomness is always injectable through [`Generator::generate_with_rng`];
//! the convenience entry points draw from `rand::thread_rng`.

pub mod direction;
pub mod generator;
pub mod grid;
pub mod placement;

pub use direction::Direction;
pub use generator::{
    Generator, GeneratorConfig, MAX_ATTEMPTS, Placement, Puzzle, Unplaced, fill_empty, generate,
};
pub use grid::{ALPHABET, Cell, GRID_SIZE, Grid};
pub use placement::Candidate;
