//! Public API tests for puzzle generation.
//!
//! Uses seeded generators so every run places words identically.

use rand::SeedableRng;
use rand::rngs::StdRng;
use wordsearch::{Direction, GRID_SIZE, Generator, GeneratorConfig, Grid, generate};

fn contains_run(grid: &Grid, word: &str) -> bool {
    let len = word.chars().count();
    (0..GRID_SIZE).any(|row| {
        (0..GRID_SIZE).any(|col| {
            Direction::ALL
                .iter()
                .any(|&direction| grid.read(row, col, direction, len).as_deref() == Some(word))
        })
    })
}

fn assert_fully_lettered(grid: &Grid) {
    assert!(grid.is_filled());
    let rows = grid.rows();
    assert_eq!(rows.len(), GRID_SIZE);
    for row in rows {
        assert_eq!(row.chars().count(), GRID_SIZE);
        assert!(row.chars().all(|ch| ch.is_ascii_uppercase()), "row {row}");
    }
}

#[test]
fn three_letter_word_is_always_placed() {
    for seed in 0..50 {
        let puzzle =
            Generator::default().generate_with_rng(&["cat"], &mut StdRng::seed_from_u64(seed));
        assert!(puzzle.unplaced.is_empty());
        assert!(contains_run(&puzzle.grid, "CAT"));
        assert_fully_lettered(&puzzle.grid);
    }
}

#[test]
fn thread_rng_entry_point_fills_grid() {
    let grid = generate(&["Cat", "dog", "bird"]);
    assert_fully_lettered(&grid);
    assert!(contains_run(&grid, "CAT"));
    assert!(contains_run(&grid, "DOG"));
}

#[test]
fn empty_word_list_is_random_letters() {
    let words: [&str; 0] = [];
    let puzzle = Generator::default().generate_with_rng(&words, &mut StdRng::seed_from_u64(2));
    assert!(puzzle.placed.is_empty());
    assert!(puzzle.unplaced.is_empty());
    assert_fully_lettered(&puzzle.grid);
}

#[test]
fn eleven_letters_never_fit() {
    let word = "A".repeat(11);
    for seed in 0..5 {
        let puzzle = Generator::default()
            .generate_with_rng(&[word.as_str()], &mut StdRng::seed_from_u64(seed));
        assert!(puzzle.placed.is_empty());
        assert_eq!(puzzle.unplaced.len(), 1);
        assert_eq!(puzzle.unplaced[0].word, word);
        assert_fully_lettered(&puzzle.grid);
    }
}

#[test]
fn duplicate_words_are_attempted_independently() {
    let puzzle = Generator::default()
        .generate_with_rng(&["sun", "sun", "sun"], &mut StdRng::seed_from_u64(4));
    assert_eq!(puzzle.placed.len() + puzzle.unplaced.len(), 3);
    assert_eq!(puzzle.placed.len(), 3);
    assert!(puzzle.placed.iter().all(|placement| placement.word == "SUN"));
}

#[test]
fn ten_letter_word_spans_the_grid() {
    let puzzle = Generator::default()
        .generate_with_rng(&["lighthouse"], &mut StdRng::seed_from_u64(8));
    assert_eq!(puzzle.placed.len(), 1);
    let placement = &puzzle.placed[0];
    let last = placement
        .direction
        .step(placement.row, placement.col, GRID_SIZE - 1)
        .expect("last letter inside grid");
    assert_eq!(puzzle.grid.letter(last.0, last.1), Some('E'));
    assert!(contains_run(&puzzle.grid, "LIGHTHOUSE"));
}

#[test]
fn small_attempt_cap_still_reports_and_continues() {
    let generator = Generator::new(GeneratorConfig { max_attempts: 1 }).expect("config");
    let long = "Q".repeat(15);
    let puzzle =
        generator.generate_with_rng(&[long.as_str(), "hi"], &mut StdRng::seed_from_u64(6));
    assert_eq!(puzzle.unplaced[0].word, long);
    assert_eq!(puzzle.unplaced[0].attempts, 1);
    assert_eq!(puzzle.placed.len() + puzzle.unplaced.len(), 2);
    assert_fully_lettered(&puzzle.grid);
}
