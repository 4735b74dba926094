//! # Pantry and Recipe Matching
//!
//! This module holds everything the recipe helper knows about ingredients and recipes,
//! independent of how results are presented.
//!
//! ## Modules
//!
//! - [`catalog`] - Built-in recipe catalog and JSON catalog loading
//! - [`matcher`] - Pure matching operations: missing ingredients, best and almost matches,
//!   quantity adjustment
//! - [`types`] - Ingredient, recipe, inventory and match result types
//!
//! ## Quick Start
//!
//! ```
//! use mcp_recipe_helper::pantry::{adjust_quantity, find_matches, Catalog};
//!
//! let catalog = Catalog::builtin();
//! let inventory = adjust_quantity(&catalog.inventory(), "Fancy Apple", 7);
//!
//! let matches = find_matches(&catalog.recipes, &inventory);
//! assert_eq!(matches.best_match.map(|r| r.name.as_str()), Some("Fancy Apple Curry"));
//! ```

pub mod catalog;
pub mod matcher;
pub mod types;

pub use catalog::Catalog;
pub use matcher::{adjust_quantity, compute_missing, find_matches, ALMOST_MATCH_LIMIT};
pub use types::*;
