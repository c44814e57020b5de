//! Toybox configuration stored in `toybox.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cake::Recipe;
use serde::{Deserialize, Serialize};
use wordsearch::GeneratorConfig;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "toybox.toml";

/// Toybox configuration (TOML).
///
/// Every section and field is optional; missing values fall back to the
/// built-in recipe and attempt cap.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ToyboxConfig {
    pub cake: Recipe,
    pub wordsearch: WordsearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WordsearchConfig {
    /// Random candidates tried per word before it is reported unplaced.
    pub max_attempts: u32,

    /// Seed for reproducible grids. Unset draws from the thread-local generator.
    pub seed: Option<u64>,
}

impl Default for WordsearchConfig {
    fn default() -> Self {
        Self {
            max_attempts: GeneratorConfig::default().max_attempts,
            seed: None,
        }
    }
}

impl WordsearchConfig {
    pub fn generator(&self) -> GeneratorConfig {
        GeneratorConfig {
            max_attempts: self.max_attempts,
        }
    }
}

impl ToyboxConfig {
    pub fn validate(&self) -> Result<()> {
        self.cake.validate().context("invalid [cake] section")?;
        self.wordsearch
            .generator()
            .validate()
            .context("invalid [wordsearch] section")?;
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ToyboxConfig::default()`.
pub fn load_config(path: &Path) -> Result<ToyboxConfig> {
    if !path.exists() {
        let cfg = ToyboxConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ToyboxConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}
