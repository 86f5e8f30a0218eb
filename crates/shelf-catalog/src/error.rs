//! Catalogue error types.

use thiserror::Error;

use crate::ids::ProductId;

/// Errors surfaced by the catalogue crate.
///
/// Filtering and sorting never fail; these cover parsing user-facing
/// identifiers and validating data handed over by a product source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Sort key identifier outside `popular`, `price-asc`, `price-desc`.
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    /// Price bucket identifier outside `under_50`, `50_100`, `above_100`.
    #[error("Unknown price bucket: {0}")]
    UnknownPriceBucket(String),

    /// A product violates the catalogue data model.
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: ProductId, reason: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Serialization(e.to_string())
    }
}
