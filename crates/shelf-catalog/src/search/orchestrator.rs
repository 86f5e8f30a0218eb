//! Composition of selection translation, filtering, ranking, and sorting.

use std::collections::BTreeSet;

use crate::catalog::Product;
use crate::search::filter::filter_products;
use crate::search::selection::RawSelection;
use crate::search::sort::{sort_products, SortKey};
use serde::Serialize;
use tracing::{debug, warn};

/// A product together with the number of its variants matching the
/// selected colours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedProduct<'a> {
    pub product: &'a Product,
    pub match_count: usize,
}

/// Order products by descending colour match count, then by `key`.
pub fn rank_by_color_matches<'a, I>(
    products: I,
    colors: &BTreeSet<String>,
    key: SortKey,
) -> Vec<RankedProduct<'a>>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut ranked: Vec<RankedProduct<'a>> = products
        .into_iter()
        .map(|product| RankedProduct {
            product,
            match_count: product
                .variants
                .iter()
                .filter(|v| colors.contains(&v.color_name))
                .count(),
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.match_count
            .cmp(&a.match_count)
            .then_with(|| key.compare(a.product, b.product))
    });
    ranked
}

/// Derive the displayed products from the full catalogue.
///
/// Filters `all` with the translated selection, ranks by colour match count
/// when a colour is selected, then orders by `key`. An empty result is a
/// valid outcome.
pub fn apply_user_selection<'a>(
    all: &'a [Product],
    raw: &RawSelection,
    key: SortKey,
) -> Vec<&'a Product> {
    let invalid = all.iter().filter(|p| p.variants.is_empty()).count();
    if invalid > 0 {
        warn!(invalid, "products without variants are excluded from results");
    }

    let spec = raw.to_filter_spec();
    let filtered = filter_products(all, &spec);
    debug!(total = all.len(), matched = filtered.len(), sort = %key, "filtered catalogue");

    if spec.has_color_filter() {
        rank_by_color_matches(filtered, &spec.colors, key)
            .into_iter()
            .map(|r| r.product)
            .collect()
    } else {
        sort_products(filtered, key)
    }
}

/// A browsing session over one catalogue snapshot.
///
/// Holds the authoritative full collection plus the shopper's current
/// selection and sort key. The displayed list is always re-derived from the
/// full collection.
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    products: Vec<Product>,
    selection: RawSelection,
    sort: SortKey,
}

impl CatalogView {
    /// Start a session with no filters and the popular order.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            selection: RawSelection::new(),
            sort: SortKey::Popular,
        }
    }

    /// Replace the active filter selection.
    pub fn apply_filters(&mut self, selection: RawSelection) {
        debug!(active = selection.count(), "applying filters");
        self.selection = selection;
    }

    /// Change the sort key, keeping the filters.
    pub fn select_sort(&mut self, key: SortKey) {
        self.sort = key;
    }

    /// Clear every filter and return to the popular order.
    pub fn reset(&mut self) {
        self.selection = RawSelection::new();
        self.sort = SortKey::Popular;
    }

    /// Products to display for the current selection and sort key.
    pub fn displayed(&self) -> Vec<&Product> {
        apply_user_selection(&self.products, &self.selection, self.sort)
    }

    /// Number of selected filter values, for the filter badge.
    pub fn active_filter_count(&self) -> usize {
        self.selection.count()
    }

    /// Check if any filter value is selected.
    pub fn is_filtered(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    pub fn selection(&self) -> &RawSelection {
        &self.selection
    }

    /// The full, unfiltered catalogue in source order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Variant;
    use crate::money::Money;

    fn ids(products: &[&Product]) -> Vec<u64> {
        products.iter().map(|p| p.id.get()).collect()
    }

    fn catalog() -> Vec<Product> {
        vec![
            // A: two of three variants red or blue, expensive.
            Product::new(1, "A", Money::whole(120))
                .with_variant(Variant::new(10, "Red", "#f00"))
                .with_variant(Variant::new(11, "Blue", "#00f"))
                .with_variant(Variant::new(12, "Green", "#0f0")),
            // B: one of two variants red, cheap.
            Product::new(2, "B", Money::whole(20))
                .with_variant(Variant::new(20, "Red", "#f00"))
                .with_variant(Variant::new(21, "White", "#fff")),
            Product::new(3, "C", Money::whole(60))
                .with_variant(Variant::new(30, "Grey", "#888")),
        ]
    }

    #[test]
    fn test_match_count_ranks_before_price() {
        let products = catalog();
        let selection = RawSelection::new().with("farbe", "Red").with("farbe", "Blue");
        let shown = apply_user_selection(&products, &selection, SortKey::PriceAsc);
        assert_eq!(ids(&shown), vec![1, 2]);
    }

    #[test]
    fn test_sort_applies_within_equal_match_counts() {
        let products = catalog();
        let selection = RawSelection::new().with("farbe", "Red");
        let shown = apply_user_selection(&products, &selection, SortKey::PriceDesc);
        assert_eq!(ids(&shown), vec![1, 2]);
        let shown = apply_user_selection(&products, &selection, SortKey::PriceAsc);
        assert_eq!(ids(&shown), vec![2, 1]);
    }

    #[test]
    fn test_match_counts_reported() {
        let products = catalog();
        let colors: BTreeSet<String> = ["Red".to_string(), "Blue".to_string()].into();
        let ranked = rank_by_color_matches(&products, &colors, SortKey::Popular);
        let counts: Vec<usize> = ranked.iter().map(|r| r.match_count).collect();
        assert_eq!(counts, vec![2, 1, 0]);
    }

    #[test]
    fn test_no_color_filter_uses_sort_only() {
        let products = catalog();
        let shown = apply_user_selection(&products, &RawSelection::new(), SortKey::PriceDesc);
        assert_eq!(ids(&shown), vec![1, 3, 2]);
    }

    #[test]
    fn test_price_bucket_selection() {
        let products = catalog();
        let selection = RawSelection::new().with("preis", "50_100");
        assert_eq!(ids(&apply_user_selection(&products, &selection, SortKey::Popular)), vec![3]);
    }

    #[test]
    fn test_empty_catalogue_is_not_an_error() {
        let shown = apply_user_selection(&[], &RawSelection::new().with("farbe", "Red"), SortKey::Popular);
        assert!(shown.is_empty());
    }

    #[test]
    fn test_view_refilters_from_full_collection() {
        let mut view = CatalogView::new(catalog());
        view.apply_filters(RawSelection::new().with("preis", "under_50"));
        assert_eq!(ids(&view.displayed()), vec![2]);

        // Changing the price bucket must not compound with the previous result.
        view.apply_filters(RawSelection::new().with("preis", "above_100"));
        assert_eq!(ids(&view.displayed()), vec![1]);
        assert_eq!(view.active_filter_count(), 1);
    }

    #[test]
    fn test_view_sort_keeps_filters() {
        let mut view = CatalogView::new(catalog());
        view.apply_filters(RawSelection::new().with("farbe", "Red"));
        view.select_sort(SortKey::PriceAsc);
        assert_eq!(ids(&view.displayed()), vec![2, 1]);
        assert_eq!(view.products()[0].id.get(), 1);
    }

    #[test]
    fn test_reset() {
        let mut products = catalog();
        products.reverse();
        let mut view = CatalogView::new(products);
        view.apply_filters(RawSelection::new().with("farbe", "Grey").with("preis", "50_100"));
        view.select_sort(SortKey::PriceDesc);
        assert_eq!(view.active_filter_count(), 2);

        view.reset();
        assert_eq!(view.sort_key(), SortKey::Popular);
        assert_eq!(view.active_filter_count(), 0);
        assert!(!view.is_filtered());
        assert_eq!(ids(&view.displayed()), vec![1, 2, 3]);
    }

    #[test]
    fn test_product_without_variants_is_excluded() {
        let mut products = catalog();
        products.push(Product::new(4, "Broken", Money::whole(5)));
        let shown = apply_user_selection(&products, &RawSelection::new(), SortKey::Popular);
        assert_eq!(ids(&shown), vec![1, 2, 3]);
    }
}
