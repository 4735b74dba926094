#![allow(dead_code)]

use mcp_recipe_helper::pantry::{DishType, Ingredient, Inventory, Recipe, Requirement};
use rmcp::model::CallToolResult;

/// Builds a recipe with the given requirements, in order.
pub fn recipe(name: &str, required: &[(&str, u32)]) -> Recipe {
    Recipe {
        name: name.to_string(),
        dish_type: DishType::Curry,
        required_ingredients: required
            .iter()
            .map(|(ingredient, quantity)| Requirement {
                name: ingredient.to_string(),
                quantity: *quantity,
            })
            .collect(),
        description: format!("Test recipe {}", name),
        icon: "🍛".to_string(),
    }
}

/// Builds an inventory holding the given quantities.
pub fn inventory(quantities: &[(&str, u32)]) -> Inventory {
    quantities
        .iter()
        .map(|(name, quantity)| Ingredient::new(*name, "").with_quantity(*quantity))
        .collect()
}

pub fn quantity(inventory: &Inventory, name: &str) -> Option<u32> {
    inventory.get(name).map(|ingredient| ingredient.quantity)
}

/// Parses the JSON text payload of a tool result.
pub fn tool_json(result: &CallToolResult) -> serde_json::Value {
    let value = serde_json::to_value(result).expect("tool result should serialize");
    let text = value["content"][0]["text"]
        .as_str()
        .expect("tool result should contain text content");
    serde_json::from_str(text).expect("tool result text should be JSON")
}

pub fn tool_is_error(result: &CallToolResult) -> bool {
    let value = serde_json::to_value(result).expect("tool result should serialize");
    value["isError"].as_bool().unwrap_or(false)
}

pub fn init_test_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}
