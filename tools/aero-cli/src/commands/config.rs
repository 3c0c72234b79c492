//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    // Storage section
    ctx.output.info("");
    ctx.output.info("[storage]");
    ctx.output.kv("dir", &ctx.storage_dir().display().to_string());

    // Catalog section
    ctx.output.info("");
    ctx.output.info("[catalog]");
    match ctx.config.catalog.menu {
        Some(ref menu) => ctx.output.kv("menu", &ctx.resolve_path(menu).display().to_string()),
        None => ctx.output.kv("menu", "(not set)"),
    }

    // Logging section
    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output
        .kv("format", &format!("{:?}", ctx.config.logging.format).to_lowercase());

    // Site section
    let site = &ctx.config.site;
    ctx.output.info("");
    ctx.output.info("[site]");
    ctx.output
        .kv("images_unoptimized", &site.images_unoptimized.to_string());
    ctx.output.kv("strict_mode", &site.strict_mode.to_string());
    ctx.output
        .kv("ignore_build_errors", &site.ignore_build_errors.to_string());
    ctx.output
        .kv("ignore_lint_errors", &site.ignore_lint_errors.to_string());

    // Pix section
    if let Some(ref pix) = ctx.config.pix {
        ctx.output.info("");
        ctx.output.info("[pix]");
        ctx.output.kv("key", &pix.key);
        ctx.output.kv("pixKey", &pix.pix_key);
        ctx.output.kv("pixType", &pix.pix_type);
        ctx.output.kv("recipient", &pix.recipient);
        ctx.output.kv("active", &pix.is_active().to_string());
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())?;
    ctx.output
        .success(&format!("Created {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    let mut problems = ctx.config.problems();

    if ctx.config.catalog.menu.is_some() {
        match ctx.load_menu() {
            Ok(menu) => ctx
                .output
                .debug(&format!("Menu has {} product(s)", menu.len())),
            Err(e) => problems.push(format!("{:#}", e)),
        }
    }

    if problems.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for problem in &problems {
        ctx.output.list_item(problem);
    }
    bail!("{} configuration problem(s) found", problems.len())
}
