//! Toybox: a cake yield calculator and a word-search grid generator.
//!
//! Both commands read optional settings from `toybox.toml`; command line
//! flags take precedence over the file.

mod cli;
mod config;
mod exit_codes;
mod logging;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::cli::GridArgs;
use crate::config::{DEFAULT_CONFIG_FILE, load_config};

#[derive(Parser)]
#[command(
    name = "toybox",
    version,
    about = "Cake yield calculator and word-search grid generator"
)]
struct Cli {
    /// Config file (default: `toybox.toml` in the working directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Count the cakes a stock of flour and sugar can bake.
    Cakes {
        #[arg(allow_negative_numbers = true)]
        flour: i64,
        #[arg(allow_negative_numbers = true)]
        sugar: i64,
        /// Print a JSON object instead of `key=value` text.
        #[arg(long)]
        json: bool,
    },
    /// Place words into a 10x10 grid and fill the rest with random letters.
    Grid {
        words: Vec<String>,
        /// Seed the generator for a reproducible grid.
        #[arg(long)]
        seed: Option<u64>,
        /// Random candidates tried per word before giving up on it.
        #[arg(long)]
        max_attempts: Option<u32>,
        /// Print a JSON document instead of the text grid.
        #[arg(long)]
        json: bool,
        /// Exit with a distinct code if any word could not be placed.
        #[arg(long)]
        strict: bool,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let cfg = load_config(&config_path)?;
    match cli.command {
        Command::Cakes { flour, sugar, json } => cli::bake_cakes(&cfg, flour, sugar, json),
        Command::Grid {
            words,
            seed,
            max_attempts,
            json,
            strict,
        } => cli::make_grid(
            &cfg,
            &GridArgs {
                words,
                seed,
                max_attempts,
                json,
                strict,
            },
        ),
    }
}
