//! # Recipe Helper MCP Library
//!
//! This library tracks quantities of named ingredients and works out which recipes from
//! a fixed catalog can be made from them. It is exposed to AI assistants through the
//! Model Context Protocol (MCP). It consists of three components:
//!
//! ## Pantry Module
//!
//! The [`pantry`] module holds the recipe catalog, the inventory types and the pure
//! matching operations: which ingredients a recipe still lacks, the first makeable
//! recipe, the first few almost-makeable ones, and bounded quantity adjustment.
//!
//! ## Server Module
//!
//! The [`server`] module implements an MCP server that owns the current inventory
//! snapshot and exposes the pantry operations as standardized tools.
//!
//! ## Config Module
//!
//! The [`config`] module reads the bind address and an optional catalog file from the
//! environment.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mcp_recipe_helper::{Catalog, RecipeHelperMcpServer};
//!
//! // Use the matcher directly
//! let catalog = Catalog::builtin();
//! let inventory = mcp_recipe_helper::pantry::adjust_quantity(&catalog.inventory(), "Honey", 7);
//! let matches = mcp_recipe_helper::pantry::find_matches(&catalog.recipes, &inventory);
//!
//! // Or create an MCP server
//! let server = RecipeHelperMcpServer::new(Catalog::builtin());
//! ```

pub mod config;
pub mod pantry;
pub mod server;

pub use config::Config;
pub use pantry::Catalog;
pub use server::RecipeHelperMcpServer;
