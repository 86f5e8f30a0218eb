//! `shelf list` - show the products for a selection.

use anyhow::Result;
use serde::Serialize;
use shelf_catalog::catalog::Product;
use shelf_catalog::search::{CatalogView, SortKey};

use super::{load_products, ListArgs};
use crate::context::Context;
use crate::output::truncate;

const WIDTHS: [usize; 5] = [5, 24, 12, 10, 0];

/// JSON shape of a listing.
#[derive(Debug, Serialize)]
pub struct Listing<'a> {
    pub sort: SortKey,
    pub active_filters: usize,
    pub count: usize,
    pub products: Vec<&'a Product>,
}

pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let products = load_products(&args.selection, ctx).await?;

    let mut view = CatalogView::new(products);
    view.apply_filters(args.selection.to_selection());
    view.select_sort(args.sort.unwrap_or(ctx.config.display.default_sort));

    let shown = view.displayed();
    let listing = Listing {
        sort: view.sort_key(),
        active_filters: view.active_filter_count(),
        count: shown.len(),
        products: shown,
    };

    if ctx.output.is_json() {
        ctx.output.json(&listing);
        return Ok(());
    }

    render(&listing, ctx);
    Ok(())
}

fn render(listing: &Listing<'_>, ctx: &Context) {
    let out = &ctx.output;
    out.header(&format!(
        "{} products ({})",
        listing.count,
        listing.sort.display_name()
    ));
    out.kv("Filters", &listing.active_filters.to_string());

    if listing.products.is_empty() {
        out.info("No items found");
        return;
    }

    out.table_row(&["ID", "NAME", "PRICE", "MATERIAL", "COLORS"], &WIDTHS);
    for product in &listing.products {
        let id = product.id.to_string();
        let name = truncate(&product.name, WIDTHS[1]);
        let price = product.price.display(&ctx.config.display.currency_symbol);
        let colors = product.color_names().collect::<Vec<_>>().join(", ");
        out.table_row(
            &[&id, &name, &price, &product.material_badge, &colors],
            &WIDTHS,
        );
    }
}
