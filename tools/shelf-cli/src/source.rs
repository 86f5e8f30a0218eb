//! Product data sources.
//!
//! A source hands the catalogue a complete, unfiltered snapshot. Retrieval
//! failures belong to the source; the catalogue only ever sees a list.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use shelf_catalog::catalog::Product;
use tracing::{debug, warn};

/// Supplies a catalogue snapshot.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch every product.
    async fn fetch(&self) -> Result<Vec<Product>>;
}

/// Reads a JSON array of products from a file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    strict: bool,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            strict: false,
        }
    }

    /// Fail on the first invalid product instead of logging it.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

#[async_trait]
impl ProductSource for JsonFileSource {
    async fn fetch(&self) -> Result<Vec<Product>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read catalogue: {}", self.path.display()))?;

        if content.trim().is_empty() {
            debug!(path = %self.path.display(), "catalogue file is empty");
            return Ok(Vec::new());
        }

        let products: Vec<Product> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse catalogue: {}", self.path.display()))?;

        for product in &products {
            if let Err(e) = product.validate() {
                if self.strict {
                    return Err(e).with_context(|| {
                        format!("Invalid catalogue: {}", self.path.display())
                    });
                }
                warn!(error = %e, "catalogue contains an invalid product");
            }
        }

        debug!(count = products.len(), path = %self.path.display(), "loaded catalogue");
        Ok(products)
    }
}

/// An in-memory snapshot.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    products: Vec<Product>,
}

impl StaticSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl ProductSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }
}
