//! Search module.
//!
//! Contains the filter and sort engines, selection translation, facets,
//! and the orchestration that ties them together.

mod facets;
mod filter;
mod orchestrator;
mod panel;
mod selection;
mod sort;

pub use facets::{facets, Facet, FacetValue};
pub use filter::{filter_products, FilterSpec, PriceBucket, PriceFilter};
pub use orchestrator::{apply_user_selection, rank_by_color_matches, CatalogView, RankedProduct};
pub use panel::{FilterOption, FilterPanel, FilterSection};
pub use selection::{
    RawSelection, SECTION_COLOR, SECTION_MATERIAL, SECTION_PRICE, SECTION_SIZE,
};
pub use sort::{sort_products, SortKey};
