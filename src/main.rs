use mcp_recipe_helper::{Config, RecipeHelperMcpServer};
use rmcp::transport::sse_server::{SseServer, SseServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    tracing::info!("Loading recipe catalog...");
    let catalog = match config.load_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Failed to load recipe catalog: {:#}", e);
            tracing::error!("Please verify:");
            if let Some(path) = &config.catalog_path {
                tracing::error!("  - RECIPE_CATALOG_PATH points to a readable file: {}", path.display());
            }
            tracing::error!("  - The file is valid JSON with \"ingredients\" and \"recipes\" arrays");
            tracing::error!("  - Recipe and ingredient names are unique");
            tracing::error!("  - Every recipe requires at least one ingredient, each with a positive quantity");
            std::process::exit(1);
        }
    };

    let unreachable = catalog.unreachable_recipes().count();
    if unreachable > 0 {
        tracing::warn!(
            "{} recipes need ingredients that are not tracked and can never be made",
            unreachable
        );
    }

    tracing::info!(
        "Catalog ready: {} recipes, {} ingredients",
        catalog.recipes.len(),
        catalog.ingredients.len()
    );

    // Create server configuration and start SSE server
    let sse_config = SseServerConfig {
        bind: config.socket_addr()?,
        sse_path: "/sse".to_string(),
        post_path: "/message".to_string(),
        ct: tokio_util::sync::CancellationToken::new(),
        sse_keep_alive: None,
    };

    tracing::info!("Recipe Helper MCP Server listening on {}", sse_config.bind);

    let sse_server = SseServer::serve_with_config(sse_config).await?;

    // Every session gets a clone sharing the same catalog and inventory
    let server = RecipeHelperMcpServer::new(catalog);
    let ct = sse_server.with_service(move || server.clone());

    tracing::info!("Recipe Helper MCP Server started successfully");

    // Wait for Ctrl+C
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");
    ct.cancel();

    Ok(())
}
