//! `shelf config` - manage configuration.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::Context;

pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Init {
            catalog,
            output,
            force,
        } => {
            let path = ctx.resolve_path(&output);
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            if path.extension().is_some_and(|ext| ext == "json") {
                let mut config = CliConfig::default();
                config.catalog.path = Some(catalog);
                config.save(&path)?;
            } else {
                std::fs::write(&path, generate_default_config(&catalog))?;
            }
            ctx.output.success(&format!("Wrote {}", path.display()));
        }
        ConfigCommand::Show => {
            if ctx.output.is_json() {
                ctx.output.json(&ctx.config);
                return Ok(());
            }
            match &ctx.config_path {
                Some(path) => ctx.output.kv("Loaded from", &path.display().to_string()),
                None => ctx.output.kv("Loaded from", "(defaults)"),
            }
            let rendered = ctx
                .config
                .render(ctx.config_path.as_deref().unwrap_or("shelf.toml".as_ref()))?;
            println!("{}", rendered);
        }
    }
    Ok(())
}
