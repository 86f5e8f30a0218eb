//! End-to-end browsing session over a catalogue feed snapshot.

use pretty_assertions::assert_eq;
use shelf_catalog::prelude::*;

const FEED: &str = r##"[
    {"id": 3, "name": "Parka", "price": 149.0, "materialBadge": "Recycled",
     "variants": [
        {"id": 31, "colorName": "Green", "colorHex": "#0a0",
         "sizes": [{"size": "M", "inStock": true}, {"size": "L", "inStock": false}]},
        {"id": 32, "colorName": "Blue", "colorHex": "#00a",
         "sizes": [{"size": "L", "inStock": true}]}
     ]},
    {"id": 1, "name": "T-shirt", "price": 39.99, "materialBadge": "Vegan",
     "variants": [
        {"id": 11, "colorName": "Red", "colorHex": "#FF0000",
         "sizes": [{"size": "M", "inStock": true}, {"size": "S", "inStock": false}]}
     ]},
    {"id": 2, "name": "Hoodie", "price": 59.99, "materialBadge": "Organic",
     "variants": [
        {"id": 21, "colorName": "Blue", "colorHex": "#00f",
         "sizes": [{"size": "S", "inStock": true}]},
        {"id": 22, "colorName": "Red", "colorHex": "#f00",
         "sizes": [{"size": "M", "inStock": true}]}
     ]},
    {"id": 4, "name": "Socks", "price": 9.99, "materialBadge": "",
     "variants": [
        {"id": 41, "colorName": "White", "colorHex": "#fff", "sizes": []}
     ]}
]"##;

fn names(products: &[&Product]) -> Vec<String> {
    products.iter().map(|p| p.name.clone()).collect()
}

fn load() -> Vec<Product> {
    serde_json::from_str(FEED).expect("feed parses")
}

#[test]
fn full_catalogue_in_popular_order() {
    let view = CatalogView::new(load());
    assert_eq!(names(&view.displayed()), vec!["T-shirt", "Hoodie", "Parka", "Socks"]);
    assert_eq!(view.active_filter_count(), 0);
}

#[test]
fn panel_toggles_feed_the_view() {
    let panel = FilterPanel::default();
    let mut view = CatalogView::new(load());

    let selection = panel.toggle(view.selection(), "farbe", "Blue");
    let selection = panel.toggle(&selection, "farbe", "Red");
    view.apply_filters(selection);
    view.select_sort(SortKey::PriceDesc);

    // Hoodie matches two colours; Parka and T-shirt one each, by price desc.
    assert_eq!(names(&view.displayed()), vec!["Hoodie", "Parka", "T-shirt"]);
    assert_eq!(view.active_filter_count(), 2);
    assert_eq!(panel.selected_count(view.selection()), 2);
}

#[test]
fn price_bucket_then_change_bucket() {
    let panel = FilterPanel::default();
    let mut view = CatalogView::new(load());

    view.apply_filters(panel.toggle(view.selection(), "preis", "under_50"));
    assert_eq!(names(&view.displayed()), vec!["T-shirt", "Socks"]);

    view.apply_filters(panel.toggle(view.selection(), "preis", "above_100"));
    assert_eq!(names(&view.displayed()), vec!["Parka"]);
    assert_eq!(view.active_filter_count(), 1);
}

#[test]
fn size_and_colour_must_match_on_one_variant() {
    let selection = RawSelection::new().with("farbe", "Blue").with("groesse", "M");
    let products = load();
    // Parka has M only in Green; Hoodie has M only in Red.
    assert!(apply_user_selection(&products, &selection, SortKey::Popular).is_empty());

    let selection = RawSelection::new().with("farbe", "Blue").with("groesse", "L");
    assert_eq!(
        names(&apply_user_selection(&products, &selection, SortKey::Popular)),
        vec!["Parka"]
    );
}

#[test]
fn material_selection() {
    let products = load();
    let selection = RawSelection::new().with("material", "Vegan").with("material", "Organic");
    assert_eq!(
        names(&apply_user_selection(&products, &selection, SortKey::PriceDesc)),
        vec!["Hoodie", "T-shirt"]
    );
}

#[test]
fn reset_restores_everything() {
    let mut view = CatalogView::new(load());
    view.apply_filters(RawSelection::new().with("farbe", "Nonexistent"));
    view.select_sort(SortKey::PriceAsc);
    assert!(view.displayed().is_empty());

    view.reset();
    assert_eq!(view.sort_key(), SortKey::Popular);
    assert_eq!(view.active_filter_count(), 0);
    let ids: Vec<u64> = view.displayed().iter().map(|p| p.id.get()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn facets_over_feed() {
    let products = load();
    let facets = facets(&products, &RawSelection::new().with("farbe", "Red"));
    let color = &facets[0];
    assert_eq!(color.count("Blue"), 2);
    assert_eq!(color.count("Red"), 2);
    assert!(color.values.iter().any(|v| v.value == "Red" && v.selected));
    assert_eq!(facets[1].count("under_50"), 2);
}
