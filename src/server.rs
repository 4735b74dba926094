use std::sync::Arc;
use std::future::Future;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::*,
    schemars,
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use serde_json::json;
use tokio::sync::Mutex;

use crate::pantry::{
    adjust_quantity, compute_missing, find_matches, Catalog, DishType, Inventory, Matches, Recipe,
};

const NO_MATCH_MESSAGE: &str = "No recipe found with your ingredients.";

// Parameter structs for tools
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AdjustQuantityParams {
    /// Ingredient name, e.g. "Fancy Apple"
    pub ingredient: String,
    /// Amount to add; negative values remove
    pub delta: i32,
}

#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct ListRecipesParams {
    #[serde(default)]
    pub dish_type: Option<DishType>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetRecipeDetailsParams {
    pub name: String,
}

/// MCP server exposing the recipe helper as tools.
///
/// Clones share the catalog and the inventory snapshot, so every session served by
/// one process works on the same pantry.
#[derive(Clone)]
pub struct RecipeHelperMcpServer {
    catalog: Arc<Catalog>,
    inventory: Arc<Mutex<Inventory>>,
    tool_router: ToolRouter<RecipeHelperMcpServer>,
}

fn recipe_json(recipe: &Recipe) -> serde_json::Value {
    json!({
        "name": recipe.name,
        "dish_type": recipe.dish_type,
        "icon": recipe.icon,
        "description": recipe.description,
        "required_ingredients": recipe.required_ingredients
    })
}

fn matches_json(matches: &Matches<'_>, inventory: &Inventory) -> serde_json::Value {
    let almost: Vec<serde_json::Value> = matches
        .almost
        .iter()
        .map(|almost| {
            json!({
                "recipe": recipe_json(almost.recipe),
                "missing_details": almost.missing_details
            })
        })
        .collect();

    let message = match matches.best_match {
        Some(recipe) => Some(format!("You can make {} {} - {}", recipe.icon, recipe.name, recipe.dish_type)),
        None if inventory.has_any() => Some(NO_MATCH_MESSAGE.to_string()),
        None => None,
    };

    json!({
        "best_match": matches.best_match.map(recipe_json),
        "almost_makeable": almost,
        "message": message
    })
}

fn to_tool_result(value: &serde_json::Value) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Failed to serialize tool result: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[tool_router]
impl RecipeHelperMcpServer {
    pub fn new(catalog: Catalog) -> Self {
        let inventory = catalog.inventory();
        Self {
            catalog: Arc::new(catalog),
            inventory: Arc::new(Mutex::new(inventory)),
            tool_router: Self::tool_router(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// A copy of the current inventory snapshot.
    pub async fn inventory(&self) -> Inventory {
        self.inventory.lock().await.clone()
    }

    // Inventory tools
    #[tool(description = "Get the tracked ingredients and their quantities")]
    pub async fn get_inventory(&self) -> Result<CallToolResult, McpError> {
        let inventory = self.inventory.lock().await;

        let ingredients: Vec<serde_json::Value> = inventory
            .iter()
            .map(|ingredient| {
                json!({
                    "name": ingredient.name,
                    "icon": ingredient.icon,
                    "quantity": ingredient.quantity
                })
            })
            .collect();

        let result = json!({
            "ingredients": ingredients,
            "total_ingredients": inventory.len(),
            "total_quantity": inventory.total_quantity()
        });

        to_tool_result(&result)
    }

    #[tool(description = "Add to or remove from an ingredient's quantity and suggest recipes")]
    pub async fn adjust_quantity(
        &self,
        Parameters(params): Parameters<AdjustQuantityParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut inventory = self.inventory.lock().await;

        let known = inventory.contains(&params.ingredient);
        let updated = adjust_quantity(&inventory, &params.ingredient, params.delta);
        *inventory = updated;

        let quantity = inventory.get(&params.ingredient).map(|ingredient| ingredient.quantity);
        if known {
            tracing::debug!(
                "Adjusted {} by {} to {:?}",
                params.ingredient,
                params.delta,
                quantity
            );
        } else {
            tracing::warn!("Adjustment requested for unknown ingredient: {}", params.ingredient);
        }

        let matches = find_matches(&self.catalog.recipes, &inventory);
        let result = json!({
            "ingredient": params.ingredient,
            "known_ingredient": known,
            "delta": params.delta,
            "quantity": quantity,
            "matches": matches_json(&matches, &inventory)
        });

        to_tool_result(&result)
    }

    // Recipe tools
    #[tool(description = "Find the first recipe you can make and up to five almost-makeable recipes")]
    pub async fn find_matches(&self) -> Result<CallToolResult, McpError> {
        let inventory = self.inventory.lock().await;
        let matches = find_matches(&self.catalog.recipes, &inventory);

        tracing::debug!(
            "Matcher run: best={:?}, almost={}",
            matches.best_match.map(|recipe| &recipe.name),
            matches.almost.len()
        );

        to_tool_result(&matches_json(&matches, &inventory))
    }

    #[tool(description = "List catalog recipes, optionally filtered by dish type")]
    pub async fn list_recipes(
        &self,
        Parameters(params): Parameters<ListRecipesParams>,
    ) -> Result<CallToolResult, McpError> {
        let recipes: Vec<serde_json::Value> = match params.dish_type {
            Some(dish_type) => self.catalog.recipes_of(dish_type).map(recipe_json).collect(),
            None => self.catalog.recipes.iter().map(recipe_json).collect(),
        };

        let result = json!({
            "total_count": recipes.len(),
            "dish_type": params.dish_type,
            "recipes": recipes
        });

        to_tool_result(&result)
    }

    #[tool(description = "Get a recipe and what is still missing to make it")]
    pub async fn get_recipe_details(
        &self,
        Parameters(params): Parameters<GetRecipeDetailsParams>,
    ) -> Result<CallToolResult, McpError> {
        let Some(recipe) = self.catalog.recipe(&params.name) else {
            let error = json!({
                "error": "Recipe not found",
                "details": format!("No recipe named '{}' in the catalog", params.name)
            });
            return Ok(CallToolResult::error(vec![Content::text(error.to_string())]));
        };

        let inventory = self.inventory.lock().await;
        let missing_details = compute_missing(recipe, &inventory);

        let result = json!({
            "recipe": recipe_json(recipe),
            "can_make": missing_details.is_empty(),
            "missing_details": missing_details
        });

        to_tool_result(&result)
    }
}

impl Default for RecipeHelperMcpServer {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

#[tool_handler]
impl ServerHandler for RecipeHelperMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some("This server tracks ingredient quantities and suggests recipes that can be made from them. Use adjust_quantity to add or remove ingredients, find_matches to see the first makeable recipe and up to five almost-makeable ones, and list_recipes or get_recipe_details to browse the catalog.".to_string()),
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, McpError> {
        Ok(self.get_info())
    }
}
