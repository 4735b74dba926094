//! Recipe matching against an inventory.
//!
//! All three operations are pure: they read their inputs and return new values.
//! Callers hold the current [`Inventory`] and replace it with whatever
//! [`adjust_quantity`] returns, then call [`find_matches`] on the new value.

use crate::pantry::types::{AlmostMatch, Inventory, Matches, MissingDetail, Recipe};

/// Maximum number of almost-makeable recipes reported by [`find_matches`].
pub const ALMOST_MATCH_LIMIT: usize = 5;

/// Lists every requirement of `recipe` the inventory cannot cover.
///
/// Untracked ingredients count as zero on hand. The result follows the recipe's
/// requirement order and is empty exactly when the recipe can be cooked.
pub fn compute_missing(recipe: &Recipe, inventory: &Inventory) -> Vec<MissingDetail> {
    recipe
        .required_ingredients
        .iter()
        .filter_map(|req| {
            let have = inventory.quantity_of(&req.name);
            (req.quantity > have).then(|| MissingDetail {
                name: req.name.clone(),
                needed: req.quantity,
                have,
                missing: req.quantity - have,
            })
        })
        .collect()
}

/// Finds the first cookable recipe and the first few almost-makeable ones.
///
/// The best match is the first recipe in catalog order with nothing missing; no
/// quality ranking is applied. Almost-makeable recipes are those with at least one
/// shortfall, in catalog order, capped at [`ALMOST_MATCH_LIMIT`].
pub fn find_matches<'a>(catalog: &'a [Recipe], inventory: &Inventory) -> Matches<'a> {
    let mut best_match = None;
    let mut almost = Vec::new();

    for recipe in catalog {
        let missing_details = compute_missing(recipe, inventory);
        if missing_details.is_empty() {
            if best_match.is_none() {
                best_match = Some(recipe);
            }
        } else if almost.len() < ALMOST_MATCH_LIMIT {
            almost.push(AlmostMatch {
                recipe,
                missing_details,
            });
        }
    }

    Matches { best_match, almost }
}

/// Returns a copy of `inventory` with `ingredient_name` changed by `delta`.
///
/// Quantities saturate at zero and at `u32::MAX`. An unknown name leaves the
/// inventory unchanged.
pub fn adjust_quantity(inventory: &Inventory, ingredient_name: &str, delta: i32) -> Inventory {
    if !inventory.contains(ingredient_name) {
        tracing::debug!("Ignoring adjustment for unknown ingredient: {}", ingredient_name);
        return inventory.clone();
    }

    inventory
        .iter()
        .map(|ingredient| {
            let mut ingredient = ingredient.clone();
            if ingredient.name == ingredient_name {
                ingredient.quantity = ingredient.quantity.saturating_add_signed(delta);
            }
            ingredient
        })
        .collect()
}
