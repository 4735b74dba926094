//! Runtime configuration read from environment variables.
//!
//! | Variable              | Default          | Purpose                                 |
//! |-----------------------|------------------|-----------------------------------------|
//! | `BIND_ADDR`           | `127.0.0.1:3001` | Address the SSE server listens on       |
//! | `RECIPE_CATALOG_PATH` | unset            | JSON catalog to use instead of built-in |
//!
//! Log filtering is controlled separately through `RUST_LOG`.

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::pantry::Catalog;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3001";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let catalog_path = env::var("RECIPE_CATALOG_PATH")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Self {
            bind_addr,
            catalog_path,
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_addr
            .parse()
            .with_context(|| format!("Invalid BIND_ADDR '{}'", self.bind_addr))
    }

    /// Loads the configured catalog, falling back to the built-in one.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::from_path(path),
            None => {
                tracing::info!("Using built-in recipe catalog");
                Ok(Catalog::builtin())
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            catalog_path: None,
        }
    }
}
