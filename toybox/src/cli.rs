//! CLI command implementations.

use anyhow::{Context, Result};
use cake::Stock;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};
use wordsearch::Generator;

use crate::config::ToyboxConfig;
use crate::exit_codes;
use crate::render;

/// Arguments for `toybox grid` after CLI parsing.
#[derive(Debug, Clone, Default)]
pub struct GridArgs {
    pub words: Vec<String>,
    pub seed: Option<u64>,
    pub max_attempts: Option<u32>,
    pub json: bool,
    pub strict: bool,
}

/// Compute cakes for the given stock using the configured recipe.
pub fn bake_cakes(cfg: &ToyboxConfig, flour: i64, sugar: i64, json: bool) -> Result<i32> {
    let bake = cake::bake(Stock { flour, sugar }, cfg.cake);
    debug!(flour, sugar, cakes = bake.cakes, "bake computed");
    if json {
        println!("{}", render::bake_json(&bake)?);
    } else {
        println!("{}", render::bake_text(&bake));
    }
    Ok(exit_codes::OK)
}

/// Generate a word-search grid and print it with its placement report.
pub fn make_grid(cfg: &ToyboxConfig, args: &GridArgs) -> Result<i32> {
    let mut generator_cfg = cfg.wordsearch.generator();
    if let Some(max_attempts) = args.max_attempts {
        generator_cfg.max_attempts = max_attempts;
    }
    let generator = Generator::new(generator_cfg).context("configure generator")?;

    let seed = args.seed.or(cfg.wordsearch.seed);
    info!(words = args.words.len(), seed = ?seed, "generating grid");
    let puzzle = match seed {
        Some(seed) => generator.generate_with_rng(&args.words, &mut StdRng::seed_from_u64(seed)),
        None => generator.generate(&args.words),
    };

    if args.json {
        println!("{}", render::puzzle_json(&puzzle)?);
    } else {
        print!("{}", render::puzzle_text(&puzzle));
    }

    if args.strict && !puzzle.unplaced.is_empty() {
        return Ok(exit_codes::UNPLACED);
    }
    Ok(exit_codes::OK)
}
