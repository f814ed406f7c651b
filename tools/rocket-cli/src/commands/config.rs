//! Configuration management commands.

use std::fs;

use anyhow::{Context as _, Result};
use dialoguer::Confirm;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { yes } => init_config(yes, ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_file {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("[api]");
    ctx.output.kv("base_url", &ctx.config.api.base_url);
    if let Some(secs) = ctx.config.api.timeout_secs {
        ctx.output.kv("timeout_secs", &secs.to_string());
    }

    ctx.output.info("[storage]");
    ctx.output.kv(
        "dir",
        &ctx.resolve_path(&ctx.config.storage.dir).display().to_string(),
    );
    ctx.output.kv("namespace", &ctx.config.storage.namespace);

    Ok(())
}

async fn init_config(yes: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !yes {
        ctx.output
            .warn(&format!("Config file already exists: {}", config_path.display()));
        let confirmed = Confirm::new()
            .with_prompt("Overwrite it?")
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.info("Kept existing config");
            return Ok(());
        }
    }

    fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
