//! Filter specification and the filter engine.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::catalog::{Product, Variant};
use crate::error::CatalogError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Mutually exclusive price ranges offered by the filter sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceBucket {
    /// Strictly below 50.
    #[serde(rename = "under_50")]
    Under50,
    /// From 50 up to and including 100.
    #[serde(rename = "50_100")]
    From50To100,
    /// Strictly above 100.
    #[serde(rename = "above_100")]
    Above100,
}

impl PriceBucket {
    /// All buckets in display order.
    pub const ALL: [PriceBucket; 3] = [
        PriceBucket::Under50,
        PriceBucket::From50To100,
        PriceBucket::Above100,
    ];

    /// Option identifier used by selections.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceBucket::Under50 => "under_50",
            PriceBucket::From50To100 => "50_100",
            PriceBucket::Above100 => "above_100",
        }
    }

    /// Label for the filter sheet, with prices shown in `symbol`.
    pub fn label(&self, symbol: &str) -> String {
        match self {
            PriceBucket::Under50 => format!("Unter 50{}", symbol),
            PriceBucket::From50To100 => format!("50{s} - 100{s}", s = symbol),
            PriceBucket::Above100 => format!("Über 100{}", symbol),
        }
    }

    /// Check if a price falls into this bucket.
    pub fn contains(&self, price: Money) -> bool {
        let fifty = Money::whole(50);
        let hundred = Money::whole(100);
        match self {
            PriceBucket::Under50 => price < fifty,
            PriceBucket::From50To100 => price >= fifty && price <= hundred,
            PriceBucket::Above100 => price > hundred,
        }
    }

    /// The bucket a price falls into. Every price falls into exactly one.
    pub fn for_price(price: Money) -> Self {
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.contains(price))
            .unwrap_or(PriceBucket::Above100)
    }
}

impl FromStr for PriceBucket {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownPriceBucket(s.to_string()))
    }
}

impl fmt::Display for PriceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Price predicate of a filter specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PriceFilter {
    /// No price constraint.
    #[default]
    Any,
    /// Inclusive upper bound.
    AtMost(Money),
    /// One of the fixed price buckets.
    Bucket(PriceBucket),
}

impl PriceFilter {
    /// Check if a price satisfies this predicate.
    pub fn matches(&self, price: Money) -> bool {
        match self {
            PriceFilter::Any => true,
            PriceFilter::AtMost(max) => price <= *max,
            PriceFilter::Bucket(bucket) => bucket.contains(price),
        }
    }
}

/// Structured query derived from user selections.
///
/// An empty set never means "match nothing"; it leaves that dimension
/// unconstrained.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Colour labels; a variant matches if its colour is in the set.
    pub colors: BTreeSet<String>,
    /// Price predicate.
    pub price: PriceFilter,
    /// Size labels; a variant matches if one of them is in stock.
    pub sizes: BTreeSet<String>,
    /// Material badges; a product matches if its badge is in the set.
    pub materials: BTreeSet<String>,
}

impl FilterSpec {
    /// A specification that matches every well-formed product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add colour labels to match.
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors.extend(colors.into_iter().map(Into::into));
        self
    }

    /// Add size labels that must be in stock.
    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes.extend(sizes.into_iter().map(Into::into));
        self
    }

    /// Add material badges to match.
    pub fn with_materials<I, S>(mut self, materials: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.materials.extend(materials.into_iter().map(Into::into));
        self
    }

    /// Set an inclusive maximum price.
    pub fn with_max_price(mut self, max: Money) -> Self {
        self.price = PriceFilter::AtMost(max);
        self
    }

    /// Restrict to a price bucket.
    pub fn with_price_bucket(mut self, bucket: PriceBucket) -> Self {
        self.price = PriceFilter::Bucket(bucket);
        self
    }

    /// Check if no dimension is constrained.
    pub fn is_identity(&self) -> bool {
        self.colors.is_empty()
            && self.sizes.is_empty()
            && self.materials.is_empty()
            && self.price == PriceFilter::Any
    }

    /// Check if the colour dimension is constrained.
    pub fn has_color_filter(&self) -> bool {
        !self.colors.is_empty()
    }

    /// Check a single variant against the colour and size constraints.
    ///
    /// Colour and size are evaluated on the same variant; availability of
    /// one colour never satisfies the size constraint of another.
    pub fn matches_variant(&self, variant: &Variant) -> bool {
        let color_ok = self.colors.is_empty() || self.colors.contains(&variant.color_name);
        let size_ok = self.sizes.is_empty()
            || variant
                .sizes
                .iter()
                .any(|s| s.in_stock && self.sizes.contains(&s.size));
        color_ok && size_ok
    }

    /// Check a product against every constraint.
    ///
    /// A product without variants never matches.
    pub fn matches(&self, product: &Product) -> bool {
        self.price.matches(product.price)
            && (self.materials.is_empty() || self.materials.contains(&product.material_badge))
            && product.variants.iter().any(|v| self.matches_variant(v))
    }
}

/// Return the products matching `spec`, in input order.
///
/// The result borrows from the input; nothing is copied or reordered.
pub fn filter_products<'a, I>(products: I, spec: &FilterSpec) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products.into_iter().filter(|p| spec.matches(p)).collect()
}
