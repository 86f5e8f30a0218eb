//! Sort keys and the sort engine.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::catalog::Product;
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};

/// Sort options offered to the shopper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Catalogue order (ascending id). Stands in for a popularity metric the
    /// feed does not provide.
    #[default]
    Popular,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
}

impl SortKey {
    /// All sort keys in display order.
    pub const ALL: [SortKey; 3] = [SortKey::Popular, SortKey::PriceAsc, SortKey::PriceDesc];

    /// Identifier used by the UI and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Popular => "popular",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
        }
    }

    /// Label shown in the sort sheet.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Popular => "Beliebteste",
            SortKey::PriceAsc => "Preis aufsteigend",
            SortKey::PriceDesc => "Preis absteigend",
        }
    }

    /// Total order over products for this key.
    ///
    /// Ties on price fall back to ascending id, whatever the price direction.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let primary = match self {
            SortKey::Popular => Ordering::Equal,
            SortKey::PriceAsc => a.price.cmp(&b.price),
            SortKey::PriceDesc => b.price.cmp(&a.price),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownSortKey(s.to_string()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Return a newly ordered sequence of the given products.
///
/// The input is never reordered; callers keep their own ordering.
pub fn sort_products<'a, I>(products: I, key: SortKey) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut sorted: Vec<&'a Product> = products.into_iter().collect();
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}
