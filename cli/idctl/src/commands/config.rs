//! Config commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::output::{print_info, print_single, OutputFormat};

use super::CommandContext;

/// Show or save the effective configuration.
#[derive(Debug, Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
enum ConfigSubcommand {
    /// Show the effective configuration after env and flag overrides.
    Show,

    /// Write the effective configuration to the config file.
    Save,
}

#[derive(Debug, Serialize)]
struct ConfigView {
    prefix: String,
    offset: u64,
    min_width: usize,
    log_level: String,
    source: Option<String>,
    example: String,
}

impl ConfigCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            ConfigSubcommand::Show => show(ctx),
            ConfigSubcommand::Save => save(ctx),
        }
    }
}

fn view(ctx: &CommandContext) -> ConfigView {
    ConfigView {
        prefix: ctx.codec.prefix().to_string(),
        offset: ctx.codec.offset(),
        min_width: ctx.codec.min_width(),
        log_level: ctx.config.log_level.clone(),
        source: ctx.config.source.as_ref().map(|p| p.display().to_string()),
        example: format!("1 -> {}", ctx.codec.encode(1)),
    }
}

fn show(ctx: CommandContext) -> Result<()> {
    let view = view(&ctx);

    match ctx.format {
        OutputFormat::Json => print_single(&view, ctx.format),
        OutputFormat::Table => {
            println!("prefix: {}", view.prefix);
            println!("offset: {}", view.offset);
            println!("min_width: {}", view.min_width);
            println!("log_level: {}", view.log_level);
            println!("source: {}", view.source.as_deref().unwrap_or("-"));
            println!("example: {}", view.example);
        }
    }

    Ok(())
}

fn save(ctx: CommandContext) -> Result<()> {
    let path = ctx.config.save()?;

    match ctx.format {
        OutputFormat::Json => print_single(
            &serde_json::json!({ "ok": true, "path": path.display().to_string() }),
            ctx.format,
        ),
        OutputFormat::Table => print_info(&format!("Saved configuration to {}", path.display())),
    }

    Ok(())
}
