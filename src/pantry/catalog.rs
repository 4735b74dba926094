//! Recipe catalog and starting ingredient set.
//!
//! The catalog is fixed for the lifetime of the process. [`Catalog::builtin`] provides
//! the default set of eleven ingredients and 65 recipes; [`Catalog::from_path`] loads
//! an alternative catalog from a JSON file.
//!
//! ## File Format
//!
//! ```json
//! {
//!   "ingredients": [{ "name": "Fancy Apple", "icon": "🍏" }],
//!   "recipes": [{
//!     "name": "Fancy Apple Curry",
//!     "dish_type": "Curry",
//!     "required_ingredients": [{ "name": "Fancy Apple", "quantity": 7 }],
//!     "description": "A special curry made from Fancy Apples!",
//!     "icon": "🍛"
//!   }]
//! }
//! ```
//!
//! Loaded catalogs are validated: names must be unique, every recipe needs at least
//! one requirement, and every required quantity must be positive. The built-in
//! catalog is trusted as is.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::pantry::types::{DishType, Ingredient, Inventory, Recipe, Requirement};

// (name, dish type, requirements, description, icon)
type RecipeRow = (
    &'static str,
    DishType,
    &'static [(&'static str, u32)],
    &'static str,
    &'static str,
);

const BUILTIN_INGREDIENTS: &[(&str, &str)] = &[
    ("Fancy Apple", "🍏"),
    ("Soft Potato", "🥔"),
    ("Snoozy Tomato", "🍅"),
    ("Honey", "🍯"),
    ("Fiery Herb", "🌶️"),
    ("Moomoo Milk", "🥛"),
    ("Warming Ginger", "🍠"),
    ("Slowpoke Tail", "🐌"),
    ("Greengrass Soybeans", "🌱"),
    ("Greengrass Corn", "🌽"),
    ("Rousing Coffee", "☕"),
];

const BUILTIN_RECIPES: &[RecipeRow] = &[
    (
        "Fancy Apple Curry",
        DishType::Curry,
        &[("Fancy Apple", 7)],
        "A special curry made from Fancy Apples!",
        "🍛",
    ),
    (
        "Grilled Tail Curry",
        DishType::Curry,
        &[("Slowpoke Tail", 8), ("Fiery Herb", 25)],
        "A spicy and savory curry with Slowpoke Tail.",
        "🍲",
    ),
    (
        "Solar Power Tomato Curry",
        DishType::Curry,
        &[("Snoozy Tomato", 10), ("Fiery Herb", 5)],
        "A curry full of flavor with Solar Power from Snoozy Tomatoes.",
        "🍛",
    ),
    (
        "Dream Eater Butter Curry",
        DishType::Curry,
        &[("Soft Potato", 18), ("Snoozy Tomato", 15), ("Soothing Cacao", 12), ("Moomoo Milk", 10)],
        "A creamy and rich curry with a touch of Dream Eater flavor.",
        "🍛",
    ),
    (
        "Spicy Leek Curry",
        DishType::Curry,
        &[("Large Leek", 14), ("Warming Ginger", 10), ("Fiery Herb", 8)],
        "A spicy curry made with Leeks and a touch of Ginger.",
        "🍲",
    ),
    (
        "Spore Mushroom Curry",
        DishType::Curry,
        &[("Tasty Mushroom", 14), ("Soft Potato", 9)],
        "A hearty mushroom curry with soft potatoes.",
        "🍛",
    ),
    (
        "Egg Bomb Curry",
        DishType::Curry,
        &[("Honey", 12), ("Fancy Apple", 11), ("Fancy Egg", 8), ("Soft Potato", 4)],
        "An explosive curry with eggs and apples.",
        "🍛",
    ),
    (
        "Hearty Cheeseburger Curry",
        DishType::Curry,
        &[("Moomoo Milk", 8), ("Bean Sausage", 8)],
        "A cheeseburger-inspired curry that fills you up.",
        "🍛",
    ),
    (
        "Soft Potato Chowder",
        DishType::Curry,
        &[("Moomoo Milk", 10), ("Soft Potato", 8), ("Tasty Mushroom", 4)],
        "A creamy potato chowder with mushrooms.",
        "🍛",
    ),
    (
        "Simple Chowder",
        DishType::Curry,
        &[("Moomoo Milk", 7)],
        "A basic but comforting milk chowder.",
        "🍛",
    ),
    (
        "Beanburger Curry",
        DishType::Curry,
        &[("Bean Sausage", 7)],
        "A simple curry made with bean sausages.",
        "🍛",
    ),
    (
        "Mild Honey Curry",
        DishType::Curry,
        &[("Honey", 7)],
        "A sweet and mild honey-flavored curry.",
        "🍛",
    ),
    (
        "Drought Katsu Curry",
        DishType::Curry,
        &[("Bean Sausage", 10), ("Pure Oil", 5)],
        "A katsu-style curry with bean sausage.",
        "🍛",
    ),
    (
        "Melty Omelette Curry",
        DishType::Curry,
        &[("Fancy Egg", 10), ("Snoozy Tomato", 6)],
        "A curry with a melty omelette topping.",
        "🍛",
    ),
    (
        "Bulk Up Bean Curry",
        DishType::Curry,
        &[("Greengrass Soybeans", 12), ("Bean Sausage", 6), ("Fiery Herb", 4), ("Fancy Egg", 4)],
        "A protein-packed curry to bulk you up.",
        "🍛",
    ),
    (
        "Ninja Curry",
        DishType::Curry,
        &[
            ("Greengrass Soybeans", 24),
            ("Bean Sausage", 9),
            ("Large Leek", 12),
            ("Tasty Mushroom", 5),
        ],
        "A stealthy, powerful curry favored by ninjas.",
        "🍛",
    ),
    (
        "Limber Corn Stew",
        DishType::Curry,
        &[("Greengrass Corn", 14), ("Moomoo Milk", 8), ("Soft Potato", 8)],
        "A flexible corn stew that keeps you limber.",
        "🍛",
    ),
    (
        "Inferno Corn Keema Curry",
        DishType::Curry,
        &[
            ("Fiery Herb", 27),
            ("Bean Sausage", 24),
            ("Greengrass Corn", 14),
            ("Warming Ginger", 12),
        ],
        "An extremely spicy corn and keema curry.",
        "🍲",
    ),
    (
        "Dizzy Punch Spicy Curry",
        DishType::Curry,
        &[("Rousing Coffee", 11), ("Fiery Herb", 11), ("Honey", 11)],
        "A curry that packs a punch with coffee and spice.",
        "🍛",
    ),
    (
        "Hidden Power Perk-Up Stew",
        DishType::Curry,
        &[
            ("Greengrass Soybeans", 28),
            ("Snoozy Tomato", 25),
            ("Tasty Mushroom", 23),
            ("Rousing Coffee", 16),
        ],
        "A stew that reveals your hidden potential.",
        "🍛",
    ),
    (
        "Slowpoke Tail Pepper Salad",
        DishType::Salad,
        &[("Slowpoke Tail", 10), ("Fiery Herb", 10), ("Pure Oil", 15)],
        "A peppery salad featuring Slowpoke Tail.",
        "🥗",
    ),
    (
        "Spore Mushroom Salad",
        DishType::Salad,
        &[("Tasty Mushroom", 17), ("Snoozy Tomato", 8), ("Pure Oil", 8)],
        "A salad with spore-bearing mushrooms.",
        "🥗",
    ),
    (
        "Snow Cloak Caesar Salad",
        DishType::Salad,
        &[("Moomoo Milk", 10), ("Bean Sausage", 6)],
        "A Caesar salad with a snowy milk dressing.",
        "🥗",
    ),
    (
        "Gluttony Potato Salad",
        DishType::Salad,
        &[("Soft Potato", 14), ("Fancy Egg", 9), ("Bean Sausage", 7), ("Fancy Apple", 6)],
        "A potato salad that satisfies even the biggest appetites.",
        "🥗",
    ),
    (
        "Water Veil Tofu Salad",
        DishType::Salad,
        &[("Greengrass Soybeans", 15), ("Snoozy Tomato", 9)],
        "A refreshing tofu salad with a water veil.",
        "🥗",
    ),
    (
        "Superpower Extreme Salad",
        DishType::Salad,
        &[("Bean Sausage", 9), ("Warming Ginger", 6), ("Fancy Egg", 5), ("Soft Potato", 3)],
        "A salad that gives you extreme superpowers.",
        "🥗",
    ),
    (
        "Bean Ham Salad",
        DishType::Salad,
        &[("Bean Sausage", 8)],
        "A simple salad with bean ham.",
        "🥗",
    ),
    (
        "Snoozy Tomato Salad",
        DishType::Salad,
        &[("Snoozy Tomato", 8)],
        "A salad made with snoozy tomatoes.",
        "🥗",
    ),
    (
        "Moomoo Caprese Salad",
        DishType::Salad,
        &[("Moomoo Milk", 12), ("Snoozy Tomato", 6), ("Pure Oil", 5)],
        "A caprese salad with moomoo milk.",
        "🥗",
    ),
    (
        "Contrary Chocolate Meat Salad",
        DishType::Salad,
        &[("Soothing Cacao", 14), ("Bean Sausage", 9)],
        "A contrary combination of chocolate and meat.",
        "🥗",
    ),
    (
        "Overheat Ginger Salad",
        DishType::Salad,
        &[("Fiery Herb", 17), ("Warming Ginger", 10), ("Snoozy Tomato", 8)],
        "A salad that might make you overheat!",
        "🥗",
    ),
    (
        "Fancy Apple Salad",
        DishType::Salad,
        &[("Fancy Apple", 8)],
        "A simple salad made with fancy apples.",
        "🥗",
    ),
    (
        "Immunity Leek Salad",
        DishType::Salad,
        &[("Large Leek", 10), ("Warming Ginger", 5)],
        "A salad that boosts your immunity.",
        "🥗",
    ),
    (
        "Dazzling Apple Cheese Salad",
        DishType::Salad,
        &[("Fancy Apple", 15), ("Moomoo Milk", 5), ("Pure Oil", 3)],
        "A dazzling salad with apples and cheese.",
        "🥗",
    ),
    (
        "Ninja Salad",
        DishType::Salad,
        &[
            ("Large Leek", 15),
            ("Greengrass Soybeans", 19),
            ("Tasty Mushroom", 12),
            ("Warming Ginger", 11),
        ],
        "A salad favored by stealthy ninjas.",
        "🥗",
    ),
    (
        "Heat Wave Tofu Salad",
        DishType::Salad,
        &[("Greengrass Soybeans", 10), ("Fiery Herb", 6)],
        "A tofu salad that brings the heat.",
        "🥗",
    ),
    (
        "Greengrass Salad",
        DishType::Salad,
        &[("Pure Oil", 22), ("Greengrass Corn", 17), ("Snoozy Tomato", 14), ("Soft Potato", 9)],
        "A salad made with fresh Greengrass ingredients.",
        "🥗",
    ),
    (
        "Calm Mind Fruit Salad",
        DishType::Salad,
        &[("Fancy Apple", 21), ("Honey", 16), ("Greengrass Corn", 12)],
        "A fruit salad that calms your mind.",
        "🥗",
    ),
    (
        "Fury Attack Corn Salad",
        DishType::Salad,
        &[("Greengrass Corn", 9), ("Pure Oil", 8)],
        "A corn salad that fuels your fury attacks.",
        "🥗",
    ),
    (
        "Cross Chop Salad",
        DishType::Salad,
        &[("Fancy Egg", 20), ("Bean Sausage", 15), ("Greengrass Corn", 11), ("Snoozy Tomato", 10)],
        "A salad that helps you cross chop your opponents.",
        "🥗",
    ),
    (
        "Defiant Coffee-Dressed Salad",
        DishType::Salad,
        &[("Rousing Coffee", 28), ("Bean Sausage", 28), ("Pure Oil", 22), ("Soft Potato", 22)],
        "A defiant salad with coffee dressing.",
        "🥗",
    ),
    (
        "Fluffy Sweet Potatoes",
        DishType::Dessert,
        &[("Soft Potato", 9), ("Moomoo Milk", 5)],
        "Fluffy sweet potatoes in creamy milk.",
        "🍨",
    ),
    (
        "Steadfast Ginger Cookies",
        DishType::Dessert,
        &[("Honey", 14), ("Warming Ginger", 12), ("Soothing Cacao", 5), ("Fancy Egg", 4)],
        "Cookies that make you steadfast with ginger.",
        "🍪",
    ),
    (
        "Fancy Apple Juice",
        DishType::Dessert,
        &[("Fancy Apple", 8)],
        "Juice made from fancy apples.",
        "🧃",
    ),
    (
        "Craft Soda Pop",
        DishType::Dessert,
        &[("Honey", 9)],
        "A craft soda pop sweetened with honey.",
        "🥤",
    ),
    (
        "Ember Ginger Tea",
        DishType::Dessert,
        &[("Warming Ginger", 9), ("Fancy Apple", 7)],
        "A warming tea with ember-like ginger.",
        "🍵",
    ),
    (
        "Jigglypuff's Fruity Flan",
        DishType::Dessert,
        &[("Honey", 20), ("Fancy Egg", 15), ("Moomoo Milk", 10), ("Fancy Apple", 10)],
        "Jigglypuff's signature fruity flan dessert.",
        "🍮",
    ),
    (
        "Lovely Kiss Smoothie",
        DishType::Dessert,
        &[("Fancy Apple", 11), ("Moomoo Milk", 9), ("Honey", 7), ("Soothing Cacao", 8)],
        "A smoothie so good it feels like a lovely kiss.",
        "🥤",
    ),
    (
        "Lucky Chant Apple Pie",
        DishType::Dessert,
        &[("Fancy Apple", 12), ("Moomoo Milk", 4)],
        "An apple pie that brings good luck.",
        "🥧",
    ),
    (
        "Neroli's Restorative Tea",
        DishType::Dessert,
        &[("Warming Ginger", 11), ("Fancy Apple", 15), ("Tasty Mushroom", 9)],
        "Neroli's special tea that restores your energy.",
        "🍵",
    ),
    (
        "Sweet Scent Chocolate Cake",
        DishType::Dessert,
        &[("Honey", 9), ("Soothing Cacao", 8), ("Moomoo Milk", 7)],
        "A chocolate cake with a sweet scent.",
        "🍰",
    ),
    (
        "Warm Moomoo Milk",
        DishType::Dessert,
        &[("Moomoo Milk", 7)],
        "Simple warm moomoo milk.",
        "🥛",
    ),
    (
        "Cloud Nine Soy Cake",
        DishType::Dessert,
        &[("Fancy Egg", 8), ("Greengrass Soybeans", 7)],
        "A soy cake that puts you on cloud nine.",
        "🍰",
    ),
    (
        "Hustle Protein Smoothie",
        DishType::Dessert,
        &[("Greengrass Soybeans", 15), ("Soothing Cacao", 8)],
        "A protein-packed smoothie for hustling.",
        "🥤",
    ),
    (
        "Stalwart Vegetable Juice",
        DishType::Dessert,
        &[("Snoozy Tomato", 9), ("Fancy Apple", 7)],
        "A vegetable juice that makes you stalwart.",
        "🧃",
    ),
    (
        "Big Malasada",
        DishType::Dessert,
        &[("Pure Oil", 10), ("Moomoo Milk", 7), ("Honey", 6)],
        "A big, delicious malasada donut.",
        "🍩",
    ),
    (
        "Huge Power Soy Donuts",
        DishType::Dessert,
        &[("Pure Oil", 12), ("Greengrass Soybeans", 16), ("Soothing Cacao", 7)],
        "Donuts that give you huge power.",
        "🍩",
    ),
    (
        "Explosion Popcorn",
        DishType::Dessert,
        &[("Greengrass Corn", 15), ("Pure Oil", 14), ("Moomoo Milk", 7)],
        "Popcorn that explodes with flavor.",
        "🍿",
    ),
    (
        "Teatime Corn Scones",
        DishType::Dessert,
        &[("Fancy Apple", 20), ("Warming Ginger", 20), ("Greengrass Corn", 18), ("Moomoo Milk", 9)],
        "Perfect scones for teatime.",
        "🥮",
    ),
    (
        "Petal Dance Chocolate Tart",
        DishType::Dessert,
        &[("Fancy Apple", 11), ("Soothing Cacao", 11)],
        "A chocolate tart that makes you want to dance.",
        "🍫",
    ),
    (
        "Flower Gift Macarons",
        DishType::Dessert,
        &[("Soothing Cacao", 25), ("Fancy Egg", 25), ("Honey", 17), ("Moomoo Milk", 10)],
        "Delicate macarons that are like a flower gift.",
        "🧁",
    ),
    (
        "Early Bird Coffee Jelly",
        DishType::Dessert,
        &[("Rousing Coffee", 16), ("Moomoo Milk", 14), ("Honey", 12)],
        "Coffee jelly for early birds.",
        "☕",
    ),
    (
        "Zing Zap Spiced Cola",
        DishType::Dessert,
        &[("Fancy Apple", 35), ("Warming Ginger", 20), ("Large Leek", 20), ("Rousing Coffee", 12)],
        "A spiced cola with zing zap energy.",
        "🥤",
    ),
    (
        "Mold Breaker Corn Tiramisu",
        DishType::Dessert,
        &[("Rousing Coffee", 14), ("Greengrass Corn", 14), ("Moomoo Milk", 12)],
        "A tiramisu that breaks the mold with corn.",
        "🍰",
    ),
    (
        "Clodsire Eclair",
        DishType::Dessert,
        &[("Soothing Cacao", 30), ("Moomoo Milk", 26), ("Rousing Coffee", 24), ("Honey", 22)],
        "A rich eclair inspired by Clodsire.",
        "🧁",
    ),
];

/// The ingredients a user can track and the recipes they can cook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Starting ingredient set; quantities in a catalog file are ignored
    pub ingredients: Vec<Ingredient>,
    /// Recipes in catalog order
    pub recipes: Vec<Recipe>,
}

impl Catalog {
    /// The default catalog with every ingredient starting at zero.
    pub fn builtin() -> Self {
        let ingredients = BUILTIN_INGREDIENTS
            .iter()
            .map(|(name, icon)| Ingredient::new(*name, *icon))
            .collect();

        let recipes = BUILTIN_RECIPES
            .iter()
            .map(|(name, dish_type, required, description, icon)| Recipe {
                name: name.to_string(),
                dish_type: *dish_type,
                required_ingredients: required
                    .iter()
                    .map(|(ingredient, quantity)| Requirement {
                        name: ingredient.to_string(),
                        quantity: *quantity,
                    })
                    .collect(),
                description: description.to_string(),
                icon: icon.to_string(),
            })
            .collect();

        Self { ingredients, recipes }
    }

    /// Parses and validates a JSON catalog.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Catalog =
            serde_json::from_str(json).context("Failed to parse recipe catalog JSON")?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reads, parses and validates a JSON catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading recipe catalog from {}", path.display());

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read recipe catalog at {}", path.display()))?;
        let catalog = Self::from_json_str(&json)
            .with_context(|| format!("Invalid recipe catalog at {}", path.display()))?;

        tracing::info!(
            "Loaded {} recipes and {} ingredients from {}",
            catalog.recipes.len(),
            catalog.ingredients.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Checks the invariants the matcher relies on.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for ingredient in &self.ingredients {
            if !seen.insert(ingredient.name.as_str()) {
                anyhow::bail!("Duplicate ingredient '{}'", ingredient.name);
            }
        }

        let mut seen = HashSet::new();
        for recipe in &self.recipes {
            if !seen.insert(recipe.name.as_str()) {
                anyhow::bail!("Duplicate recipe '{}'", recipe.name);
            }
            if recipe.required_ingredients.is_empty() {
                anyhow::bail!("Recipe '{}' has no required ingredients", recipe.name);
            }

            let mut required = HashSet::new();
            for req in &recipe.required_ingredients {
                if req.quantity == 0 {
                    anyhow::bail!(
                        "Recipe '{}' requires zero of '{}'",
                        recipe.name,
                        req.name
                    );
                }
                if !required.insert(req.name.as_str()) {
                    anyhow::bail!("Recipe '{}' lists '{}' twice", recipe.name, req.name);
                }
            }
        }

        Ok(())
    }

    /// A fresh inventory over this catalog's ingredients, all at zero.
    pub fn inventory(&self) -> Inventory {
        self.ingredients
            .iter()
            .map(|ingredient| ingredient.clone().with_quantity(0))
            .collect()
    }

    pub fn recipe(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.name == name)
    }

    /// Recipes of one dish type, in catalog order.
    pub fn recipes_of(&self, dish_type: DishType) -> impl Iterator<Item = &Recipe> {
        self.recipes
            .iter()
            .filter(move |recipe| recipe.dish_type == dish_type)
    }

    /// Recipes needing an ingredient outside the tracked set; these never fully match.
    pub fn unreachable_recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter().filter(|recipe| {
            recipe.required_ingredients.iter().any(|req| {
                !self
                    .ingredients
                    .iter()
                    .any(|ingredient| ingredient.name == req.name)
            })
        })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
