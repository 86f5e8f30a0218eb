//! Product catalogue filtering and sorting for Shelf storefronts.
//!
//! This crate turns an in-memory product collection plus a user's filter and
//! sort choices into the ordered list a storefront displays:
//!
//! - **Catalog**: Products, colour variants, size availability
//! - **Search**: Filter engine, sort engine, selection translation, facets
//! - **Orchestration**: [`search::apply_user_selection`] and the stateful
//!   [`search::CatalogView`]
//!
//! Nothing in this crate performs I/O. Products are loaded by a data source
//! owned by the caller and are treated as read-only.
//!
//! # Example
//!
//! ```rust
//! use shelf_catalog::prelude::*;
//!
//! let products: Vec<Product> = serde_json::from_str(r##"[
//!     {"id": 2, "name": "Hoodie", "price": 59.99, "materialBadge": "Organic",
//!      "variants": [{"id": 20, "colorName": "Black", "colorHex": "#000",
//!                    "sizes": [{"size": "M", "inStock": true}]}]},
//!     {"id": 1, "name": "T-shirt", "price": 39.99, "materialBadge": "Vegan",
//!      "variants": [{"id": 10, "colorName": "Red", "colorHex": "#FF0000",
//!                    "sizes": [{"size": "M", "inStock": true}]}]}
//! ]"##).unwrap();
//!
//! let mut selection = RawSelection::new();
//! selection.select("preis", "under_50");
//!
//! let shown = apply_user_selection(&products, &selection, SortKey::PriceAsc);
//! assert_eq!(shown.len(), 1);
//! assert_eq!(shown[0].name, "T-shirt");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod search;

pub use error::CatalogError;
pub use ids::{ProductId, VariantId};
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::{ProductId, VariantId};
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Product, SizeAvailability, Variant};

    // Search
    pub use crate::search::{
        apply_user_selection, facets, filter_products, rank_by_color_matches, sort_products,
        CatalogView, Facet, FacetValue, FilterOption, FilterPanel, FilterSection, FilterSpec,
        PriceBucket, PriceFilter, RankedProduct, RawSelection, SortKey,
    };
}
