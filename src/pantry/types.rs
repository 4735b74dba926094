//! Type definitions for the recipe helper.
//!
//! This module contains the data structures shared by the catalog, the matcher and
//! the MCP server: the ingredients a user keeps on hand, the recipes they can cook,
//! and the results of matching one against the other.
//!
//! ## Key Types
//!
//! - [`Ingredient`] - A named ingredient with an on-hand quantity
//! - [`Inventory`] - The ordered set of ingredients the user tracks
//! - [`Recipe`] - An immutable catalog entry with its required ingredients
//! - [`MissingDetail`] - One shortfall of a recipe against an inventory
//! - [`Matches`] - The outcome of a matcher run: best match plus almost-makeable recipes
//!
//! ## Lookups
//!
//! Ingredient names are the only key. Looking up a name the inventory does not track
//! yields a quantity of `0` rather than an error.

use rmcp::schemars;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ingredient the user keeps track of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique ingredient name (e.g. "Fancy Apple")
    pub name: String,
    /// Display icon
    #[serde(default)]
    pub icon: String,
    /// Quantity on hand, never negative
    #[serde(default)]
    pub quantity: u32,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            quantity: 0,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }
}

/// The kind of dish a recipe produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema)]
pub enum DishType {
    Curry,
    Salad,
    Dessert,
}

impl fmt::Display for DishType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DishType::Curry => "Curry",
            DishType::Salad => "Salad",
            DishType::Dessert => "Dessert",
        };
        f.write_str(name)
    }
}

/// A single required ingredient of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Ingredient name, matched against [`Ingredient::name`]
    pub name: String,
    /// Quantity needed, always positive in a well-formed catalog
    pub quantity: u32,
}

/// A recipe from the catalog.
///
/// Recipes are loaded once and never modified. The requirements keep the order in
/// which they were authored, which is also the order missing ingredients are reported in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe name
    pub name: String,
    /// Curry, salad or dessert
    pub dish_type: DishType,
    /// Ingredients and quantities needed to cook this recipe
    pub required_ingredients: Vec<Requirement>,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
    /// Display icon
    #[serde(default)]
    pub icon: String,
}

impl Recipe {
    /// Quantity of `ingredient` this recipe needs, if it needs any.
    pub fn required(&self, ingredient: &str) -> Option<u32> {
        self.required_ingredients
            .iter()
            .find(|req| req.name == ingredient)
            .map(|req| req.quantity)
    }
}

/// The user's ingredients and how many of each are on hand.
///
/// The set of names is fixed when the inventory is created from a catalog. Updates go
/// through [`crate::pantry::matcher::adjust_quantity`], which returns a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    ingredients: Vec<Ingredient>,
}

impl Inventory {
    pub fn new(ingredients: Vec<Ingredient>) -> Self {
        Self { ingredients }
    }

    /// On-hand quantity of `name`; untracked names have none.
    pub fn quantity_of(&self, name: &str) -> u32 {
        self.get(name).map_or(0, |ingredient| ingredient.quantity)
    }

    pub fn get(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|ingredient| ingredient.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ingredient> {
        self.ingredients.iter()
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Whether any ingredient has a non-zero quantity.
    pub fn has_any(&self) -> bool {
        self.ingredients.iter().any(|ingredient| ingredient.quantity > 0)
    }

    pub fn total_quantity(&self) -> u64 {
        self.ingredients
            .iter()
            .map(|ingredient| u64::from(ingredient.quantity))
            .sum()
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Ingredient;
    type IntoIter = std::slice::Iter<'a, Ingredient>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Ingredient> for Inventory {
    fn from_iter<I: IntoIterator<Item = Ingredient>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// One ingredient a recipe needs more of than the inventory holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingDetail {
    pub name: String,
    pub needed: u32,
    pub have: u32,
    /// `needed - have`, always greater than zero
    pub missing: u32,
}

/// A recipe that cannot be cooked yet, together with what it lacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlmostMatch<'a> {
    pub recipe: &'a Recipe,
    pub missing_details: Vec<MissingDetail>,
}

/// Result of matching a catalog against an inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Matches<'a> {
    /// First recipe in catalog order whose requirements are all met
    pub best_match: Option<&'a Recipe>,
    /// Recipes with at least one shortfall, in catalog order, capped at
    /// [`crate::pantry::matcher::ALMOST_MATCH_LIMIT`]
    pub almost: Vec<AlmostMatch<'a>>,
}
