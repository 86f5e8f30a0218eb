//! Facet counts for the filter sheet.

use std::collections::BTreeMap;

use crate::catalog::Product;
use crate::search::filter::PriceBucket;
use crate::search::selection::{RawSelection, SECTION_COLOR, SECTION_MATERIAL, SECTION_PRICE};
use serde::{Deserialize, Serialize};

/// A facet: the values of one filter section with product counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    /// Section identifier (e.g., "farbe").
    pub section: String,
    /// Values ordered by descending count, then value.
    pub values: Vec<FacetValue>,
}

/// A single facet value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetValue {
    /// Option identifier.
    pub value: String,
    /// Number of products with this value.
    pub count: usize,
    /// Whether currently selected.
    pub selected: bool,
}

impl Facet {
    fn from_counts(section: &str, counts: BTreeMap<String, usize>, selection: &RawSelection) -> Self {
        let mut values: Vec<FacetValue> = counts
            .into_iter()
            .map(|(value, count)| FacetValue {
                selected: selection.is_selected(section, &value),
                value,
                count,
            })
            .collect();
        values.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
        Self {
            section: section.to_string(),
            values,
        }
    }

    /// Count for a value, zero if absent.
    pub fn count(&self, value: &str) -> usize {
        self.values
            .iter()
            .find(|v| v.value == value)
            .map(|v| v.count)
            .unwrap_or(0)
    }
}

/// Compute colour, price bucket, and material facets over `products`.
///
/// A product counts once per colour even if several variants share it.
/// Products with an empty material badge are not counted for materials.
pub fn facets<'a, I>(products: I, selection: &RawSelection) -> Vec<Facet>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut colors: BTreeMap<String, usize> = BTreeMap::new();
    let mut prices: BTreeMap<String, usize> = BTreeMap::new();
    let mut materials: BTreeMap<String, usize> = BTreeMap::new();

    for product in products {
        let mut seen: Vec<&str> = Vec::new();
        for color in product.color_names() {
            if !seen.contains(&color) {
                seen.push(color);
                *colors.entry(color.to_string()).or_insert(0) += 1;
            }
        }

        let bucket = PriceBucket::for_price(product.price);
        *prices.entry(bucket.as_str().to_string()).or_insert(0) += 1;

        if !product.material_badge.is_empty() {
            *materials.entry(product.material_badge.clone()).or_insert(0) += 1;
        }
    }

    vec![
        Facet::from_counts(SECTION_COLOR, colors, selection),
        Facet::from_counts(SECTION_PRICE, prices, selection),
        Facet::from_counts(SECTION_MATERIAL, materials, selection),
    ]
}
