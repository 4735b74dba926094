mod common;

use common::{recipe, tool_is_error, tool_json};
use mcp_recipe_helper::pantry::{Catalog, DishType, Ingredient};
use mcp_recipe_helper::server::{
    AdjustQuantityParams, GetRecipeDetailsParams, ListRecipesParams, RecipeHelperMcpServer,
};
use pretty_assertions::assert_eq;
use rmcp::handler::server::tool::Parameters;
use rmcp::ServerHandler;

fn adjust(ingredient: &str, delta: i32) -> Parameters<AdjustQuantityParams> {
    Parameters(AdjustQuantityParams {
        ingredient: ingredient.to_string(),
        delta,
    })
}

fn small_catalog() -> Catalog {
    Catalog {
        ingredients: vec![Ingredient::new("Fancy Apple", "🍏"), Ingredient::new("Honey", "🍯")],
        recipes: (1..=6)
            .map(|n| recipe(&format!("Honey Dish {}", n), &[("Honey", n * 2)]))
            .collect(),
    }
}

#[test_log::test(tokio::test)]
async fn test_server_initialization() {
    let server = RecipeHelperMcpServer::default();

    let info = server.get_info();
    assert!(info.capabilities.tools.is_some(), "Server should advertise tools");
    assert!(info.instructions.is_some());

    assert_eq!(server.catalog().recipes.len(), 65);
    assert!(!server.inventory().await.has_any(), "Inventory should start empty");
}

#[test_log::test(tokio::test)]
async fn test_get_inventory_tool() {
    let server = RecipeHelperMcpServer::default();

    let result = server.get_inventory().await.expect("tool should succeed");
    let json = tool_json(&result);

    assert!(!tool_is_error(&result));
    assert_eq!(json["total_ingredients"], 11);
    assert_eq!(json["total_quantity"], 0);
    assert_eq!(json["ingredients"][0]["name"], "Fancy Apple");
    assert_eq!(json["ingredients"][0]["icon"], "🍏");
}

#[test_log::test(tokio::test)]
async fn test_adjust_quantity_tool_updates_inventory_and_matches() {
    let server = RecipeHelperMcpServer::default();

    for _ in 0..6 {
        server.adjust_quantity(adjust("Fancy Apple", 1)).await.expect("tool should succeed");
    }
    let result = server
        .adjust_quantity(adjust("Fancy Apple", 1))
        .await
        .expect("tool should succeed");
    let json = tool_json(&result);

    assert_eq!(json["known_ingredient"], true);
    assert_eq!(json["quantity"], 7);
    assert_eq!(json["matches"]["best_match"]["name"], "Fancy Apple Curry");
    assert_eq!(server.inventory().await.quantity_of("Fancy Apple"), 7);
}

#[test_log::test(tokio::test)]
async fn test_adjust_quantity_tool_clamps_at_zero() {
    let server = RecipeHelperMcpServer::default();

    let result = server
        .adjust_quantity(adjust("Honey", -1))
        .await
        .expect("tool should succeed");
    let json = tool_json(&result);

    assert_eq!(json["quantity"], 0);
    assert_eq!(server.inventory().await.quantity_of("Honey"), 0);
}

#[test_log::test(tokio::test)]
async fn test_adjust_quantity_tool_ignores_unknown_ingredient() {
    let server = RecipeHelperMcpServer::default();
    let before = server.inventory().await;

    let result = server
        .adjust_quantity(adjust("Dragon Fruit", 4))
        .await
        .expect("tool should succeed");
    let json = tool_json(&result);

    assert!(!tool_is_error(&result), "Unknown ingredient is not an error");
    assert_eq!(json["known_ingredient"], false);
    assert!(json["quantity"].is_null());
    assert_eq!(server.inventory().await, before);
}

#[test_log::test(tokio::test)]
async fn test_find_matches_tool_with_empty_inventory() {
    let server = RecipeHelperMcpServer::default();

    let result = server.find_matches().await.expect("tool should succeed");
    let json = tool_json(&result);

    assert!(json["best_match"].is_null());
    assert!(json["message"].is_null(), "No message until something is on hand");

    let almost = json["almost_makeable"].as_array().expect("almost list");
    assert_eq!(almost.len(), 5);
    assert_eq!(almost[0]["recipe"]["name"], "Fancy Apple Curry");
    assert_eq!(almost[0]["missing_details"][0]["name"], "Fancy Apple");
    assert_eq!(almost[0]["missing_details"][0]["needed"], 7);
    assert_eq!(almost[0]["missing_details"][0]["have"], 0);
    assert_eq!(almost[0]["missing_details"][0]["missing"], 7);
}

#[test_log::test(tokio::test)]
async fn test_find_matches_tool_reports_no_recipe_found() {
    let server = RecipeHelperMcpServer::default();
    server.adjust_quantity(adjust("Honey", 1)).await.expect("tool should succeed");

    let result = server.find_matches().await.expect("tool should succeed");
    let json = tool_json(&result);

    assert!(json["best_match"].is_null());
    assert_eq!(json["message"], "No recipe found with your ingredients.");
}

#[test_log::test(tokio::test)]
async fn test_find_matches_tool_is_idempotent() {
    let server = RecipeHelperMcpServer::new(small_catalog());
    server.adjust_quantity(adjust("Honey", 5)).await.expect("tool should succeed");

    let first = tool_json(&server.find_matches().await.expect("tool should succeed"));
    let second = tool_json(&server.find_matches().await.expect("tool should succeed"));

    assert_eq!(first, second);
    assert_eq!(first["best_match"]["name"], "Honey Dish 1");
    let almost: Vec<_> = first["almost_makeable"]
        .as_array()
        .expect("almost list")
        .iter()
        .map(|entry| entry["recipe"]["name"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(almost, vec!["Honey Dish 3", "Honey Dish 4", "Honey Dish 5", "Honey Dish 6"]);
}

#[test_log::test(tokio::test)]
async fn test_clones_share_inventory() {
    let server = RecipeHelperMcpServer::new(small_catalog());
    let session = server.clone();

    session.adjust_quantity(adjust("Honey", 3)).await.expect("tool should succeed");

    assert_eq!(server.inventory().await.quantity_of("Honey"), 3);
}

#[test_log::test(tokio::test)]
async fn test_list_recipes_tool() {
    let server = RecipeHelperMcpServer::default();

    let all = tool_json(
        &server
            .list_recipes(Parameters(ListRecipesParams::default()))
            .await
            .expect("tool should succeed"),
    );
    assert_eq!(all["total_count"], 65);

    let desserts = tool_json(
        &server
            .list_recipes(Parameters(ListRecipesParams {
                dish_type: Some(DishType::Dessert),
            }))
            .await
            .expect("tool should succeed"),
    );
    assert_eq!(desserts["total_count"], 24);
    assert_eq!(desserts["dish_type"], "Dessert");
    assert_eq!(desserts["recipes"][0]["name"], "Fluffy Sweet Potatoes");
}

#[test_log::test(tokio::test)]
async fn test_get_recipe_details_tool() {
    let server = RecipeHelperMcpServer::default();
    server.adjust_quantity(adjust("Snoozy Tomato", 10)).await.expect("tool should succeed");

    let result = server
        .get_recipe_details(Parameters(GetRecipeDetailsParams {
            name: "Solar Power Tomato Curry".to_string(),
        }))
        .await
        .expect("tool should succeed");
    let json = tool_json(&result);

    assert_eq!(json["can_make"], false);
    assert_eq!(json["recipe"]["dish_type"], "Curry");
    assert_eq!(json["missing_details"].as_array().map(Vec::len), Some(1));
    assert_eq!(json["missing_details"][0]["name"], "Fiery Herb");
    assert_eq!(json["missing_details"][0]["missing"], 5);
}

#[test_log::test(tokio::test)]
async fn test_get_recipe_details_tool_unknown_recipe() {
    let server = RecipeHelperMcpServer::default();

    let result = server
        .get_recipe_details(Parameters(GetRecipeDetailsParams {
            name: "Imaginary Pie".to_string(),
        }))
        .await
        .expect("tool call should complete");

    assert!(tool_is_error(&result), "Unknown recipe should be a tool error");
    assert_eq!(tool_json(&result)["error"], "Recipe not found");
}
