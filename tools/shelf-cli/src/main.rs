//! Shelf CLI - browse a product catalogue from the command line.
//!
//! Commands:
//! - `shelf list` - Show products for a filter selection and sort order
//! - `shelf facets` - Show option counts for the filter sheet
//! - `shelf config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;
mod source;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, FacetsArgs, ListArgs};

/// Shelf CLI - filter and sort product catalogues
#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products matching a selection
    List(ListArgs),

    /// Show filter option counts
    Facets(FacetsArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let ctx = match context::Context::load(cli.config.as_deref(), cli.verbose, cli.json) {
        Ok(ctx) => ctx,
        Err(e) => {
            output::Output::new(cli.verbose, cli.json).error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init(&ctx.config.log, cli.verbose) {
        ctx.output.warn(&format!("Logging disabled: {:#}", e));
    }

    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx).await,
        Commands::Facets(args) => commands::facets::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
