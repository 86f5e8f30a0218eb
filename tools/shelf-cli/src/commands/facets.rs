//! `shelf facets` - show option counts for the filter sheet.

use anyhow::Result;
use shelf_catalog::search::{facets, FilterPanel};

use super::{load_products, FacetsArgs};
use crate::context::Context;

pub async fn run(args: FacetsArgs, ctx: &Context) -> Result<()> {
    let products = load_products(&args.selection, ctx).await?;
    let selection = args.selection.to_selection();
    let facets = facets(&products, &selection);

    if ctx.output.is_json() {
        ctx.output.json(&facets);
        return Ok(());
    }

    let panel = FilterPanel::with_currency(&ctx.config.display.currency_symbol);
    for facet in &facets {
        let section = panel.section(&facet.section);
        let title = section
            .map(|s| s.title.clone())
            .unwrap_or_else(|| facet.section.to_uppercase());
        ctx.output.header(&title);

        for value in &facet.values {
            let label = section
                .and_then(|s| s.options.iter().find(|o| o.id == value.value))
                .map_or(value.value.as_str(), |o| o.label.as_str());
            let marker = if value.selected { " (selected)" } else { "" };
            ctx.output.kv(label, &format!("{}{}", value.count, marker));
        }
    }

    ctx.output.kv("Selected", &panel.selected_count(&selection).to_string());
    Ok(())
}
