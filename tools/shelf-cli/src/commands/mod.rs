//! CLI command implementations.

pub mod config;
pub mod facets;
pub mod list;

use anyhow::Result;
use clap::{Args, Subcommand};
use shelf_catalog::catalog::Product;
use shelf_catalog::search::{
    RawSelection, SortKey, SECTION_COLOR, SECTION_MATERIAL, SECTION_PRICE, SECTION_SIZE,
};

use crate::context::Context;
use crate::source::{JsonFileSource, ProductSource, StaticSource};

/// Filter selection shared by the browsing commands.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Catalogue JSON file (overrides the config).
    #[arg(long)]
    pub catalog: Option<String>,

    /// Colour to include (repeatable).
    #[arg(long = "color")]
    pub colors: Vec<String>,

    /// Price bucket: under_50, 50_100 or above_100.
    #[arg(long)]
    pub price: Option<String>,

    /// Size that must be in stock (repeatable).
    #[arg(long = "size")]
    pub sizes: Vec<String>,

    /// Material badge to include (repeatable).
    #[arg(long = "material")]
    pub materials: Vec<String>,
}

impl SelectionArgs {
    /// The selection these flags describe.
    pub fn to_selection(&self) -> RawSelection {
        let mut selection = RawSelection::new();
        selection.set_section(SECTION_COLOR, self.colors.iter().cloned());
        selection.set_section(SECTION_PRICE, self.price.iter().cloned());
        selection.set_section(SECTION_SIZE, self.sizes.iter().cloned());
        selection.set_section(SECTION_MATERIAL, self.materials.iter().cloned());
        selection
    }
}

/// Arguments for the list command.
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Sort order: popular, price-asc or price-desc.
    #[arg(short, long)]
    pub sort: Option<SortKey>,
}

/// Arguments for the facets command.
#[derive(Args, Debug)]
pub struct FacetsArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a default shelf.toml.
    Init {
        /// Catalogue path to put in the file.
        #[arg(long, default_value = "products.json")]
        catalog: String,

        /// Output file path.
        #[arg(short, long, default_value = "shelf.toml")]
        output: String,

        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
    /// Show the effective configuration.
    Show,
}

/// Load the catalogue snapshot named by the flags or the config.
///
/// With no catalogue configured the snapshot is empty.
pub async fn load_products(args: &SelectionArgs, ctx: &Context) -> Result<Vec<Product>> {
    let path = args.catalog.as_ref().or(ctx.config.catalog.path.as_ref());

    let source: Box<dyn ProductSource> = match path {
        Some(path) => {
            let path = ctx.resolve_path(path);
            ctx.output.debug(&format!("Loading catalogue from {}", path.display()));
            Box::new(JsonFileSource::new(path).strict(ctx.config.catalog.strict))
        }
        None => {
            ctx.output
                .warn("No catalogue configured; pass --catalog or set [catalog] path");
            Box::new(StaticSource::default())
        }
    };

    source.fetch().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_from_flags() {
        let args = SelectionArgs {
            colors: vec!["Red".to_string(), "Blue".to_string()],
            price: Some("under_50".to_string()),
            sizes: vec!["M".to_string()],
            ..Default::default()
        };
        let selection = args.to_selection();
        assert_eq!(selection.count(), 4);
        assert_eq!(selection.options("farbe"), ["Red", "Blue"]);
        assert_eq!(selection.options("preis"), ["under_50"]);
        assert!(selection.options("material").is_empty());
    }

    #[test]
    fn test_empty_flags_select_nothing() {
        assert!(SelectionArgs::default().to_selection().is_empty());
    }
}
