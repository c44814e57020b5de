//! Cake yield calculator.
//!
//! Given a stock of flour and sugar, bakes as many cakes as a fixed-ratio
//! recipe allows and reports what is left over. Baking is greedy: one cake
//! at a time until either ingredient runs short. The computation here uses
//! the closed form, which yields the same triple as that loop for every input.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Ingredient amounts consumed by a single cake.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Recipe {
    pub flour_per_cake: i64,
    pub sugar_per_cake: i64,
}

impl Recipe {
    /// 100 flour and 50 sugar per cake.
    pub const STANDARD: Recipe = Recipe {
        flour_per_cake: 100,
        sugar_per_cake: 50,
    };

    pub fn validate(&self) -> Result<()> {
        if self.flour_per_cake <= 0 {
            bail!("flour_per_cake must be > 0");
        }
        if self.sugar_per_cake <= 0 {
            bail!("sugar_per_cake must be > 0");
        }
        Ok(())
    }
}

impl Default for Recipe {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Ingredients on hand before baking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stock {
    pub flour: i64,
    pub sugar: i64,
}

/// Outcome of a bake: cakes produced and the leftover ingredients.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bake {
    pub cakes: i64,
    pub flour_left: i64,
    pub sugar_left: i64,
}

impl Bake {
    pub fn into_tuple(self) -> (i64, i64, i64) {
        (self.cakes, self.flour_left, self.sugar_left)
    }
}

/// Bake with [`Recipe::STANDARD`].
pub fn compute_cakes(flour: i64, sugar: i64) -> Bake {
    bake(Stock { flour, sugar }, Recipe::STANDARD)
}

/// Bake as many cakes as `stock` allows under `recipe`.
///
/// Negative stock bakes nothing and is returned untouched. The recipe must
/// have positive amounts (see [`Recipe::validate`]); a non-positive recipe
/// also bakes nothing rather than dividing by zero.
pub fn bake(stock: Stock, recipe: Recipe) -> Bake {
    if recipe.validate().is_err() {
        return untouched(stock);
    }
    let cakes = (stock.flour / recipe.flour_per_cake)
        .min(stock.sugar / recipe.sugar_per_cake)
        .max(0);
    Bake {
        cakes,
        flour_left: stock.flour - cakes * recipe.flour_per_cake,
        sugar_left: stock.sugar - cakes * recipe.sugar_per_cake,
    }
}

fn untouched(stock: Stock) -> Bake {
    Bake {
        cakes: 0,
        flour_left: stock.flour,
        sugar_left: stock.sugar,
    }
}
