//! CLI commands.

mod check;
mod config;
mod decode;
mod encode;
mod extract;
mod url;

use anyhow::Result;
use clap::{Parser, Subcommand};
use coursehub_id::IdCodec;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::CliError;
use crate::output::OutputFormat;

/// coursehub ID tool - encode and decode the tokens used in platform URLs.
#[derive(Debug, Parser)]
#[command(name = "crid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, env = "CRID_FORMAT", default_value = "table")]
    format: String,

    /// Token prefix (overrides CRID_PREFIX and the config file).
    #[arg(long, global = true)]
    prefix: Option<String>,

    /// Offset added before encoding (overrides CRID_OFFSET).
    #[arg(long, global = true)]
    offset: Option<u64>,

    /// Minimum number of digits after the prefix (overrides CRID_MIN_WIDTH).
    #[arg(long, global = true)]
    min_width: Option<usize>,

    /// Log level when RUST_LOG is unset (overrides CRID_LOG_LEVEL).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Encode primary keys into tokens.
    Encode(encode::EncodeCommand),

    /// Decode tokens into primary keys.
    Decode(decode::DecodeCommand),

    /// Check whether strings have the token format.
    Check(check::CheckCommand),

    /// Build resource paths for primary keys.
    Url(url::UrlCommand),

    /// Extract primary keys from paths or URLs.
    Extract(extract::ExtractCommand),

    /// Show or save the effective configuration.
    Config(config::ConfigCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// The `--log-level` flag, if given.
    pub fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }

    /// Run the CLI command.
    pub fn run(self, mut config: Config) -> Result<()> {
        let format = OutputFormat::parse(&self.format);

        // Flags take precedence over env and file
        if let Some(prefix) = self.prefix {
            config.codec.prefix = prefix;
        }
        if let Some(offset) = self.offset {
            config.codec.offset = offset;
        }
        if let Some(min_width) = self.min_width {
            config.codec.min_width = min_width;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }

        let codec = IdCodec::from_config(config.codec.clone()).map_err(CliError::Config)?;
        debug!(
            prefix = codec.prefix(),
            offset = codec.offset(),
            min_width = codec.min_width(),
            "Codec configured"
        );

        let ctx = CommandContext {
            config,
            codec,
            format,
        };

        match self.command {
            Commands::Encode(cmd) => cmd.run(ctx),
            Commands::Decode(cmd) => cmd.run(ctx),
            Commands::Check(cmd) => cmd.run(ctx),
            Commands::Url(cmd) => cmd.run(ctx),
            Commands::Extract(cmd) => cmd.run(ctx),
            Commands::Config(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("crid {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub codec: IdCodec,
    pub format: OutputFormat,
}

/// Fail the command when any row was rejected, after all rows were printed.
fn ensure_all_ok(failed: usize, total: usize) -> Result<()> {
    if failed > 0 {
        return Err(CliError::Rejected { failed, total }.into());
    }
    Ok(())
}

/// Legacy modes always use the standard scheme. Warns, and returns true,
/// when `codec` carries overrides they will ignore.
fn warn_if_legacy_ignores(codec: &IdCodec) -> bool {
    let custom = *codec != IdCodec::standard();
    if custom {
        warn!(
            prefix = codec.prefix(),
            offset = codec.offset(),
            min_width = codec.min_width(),
            "--legacy uses the standard CR/1000/3 scheme; codec overrides are ignored"
        );
    }
    custom
}

/// Table cell for an optional value.
fn display_option<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["crid", "--format", "json", "decode", "CR0RX"]).unwrap();
        assert_eq!(cli.format, "json");
        assert!(matches!(cli.command, Commands::Decode(_)));
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from(["crid", "--prefix", "lower", "version"]).unwrap();
        let err = cli.run(Config::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::Config(_))
        ));
    }

    #[test]
    fn test_oversized_width_flag_is_rejected() {
        let cli = Cli::try_parse_from([
            "crid",
            "--min-width",
            "18446744073709551615",
            "encode",
            "1",
        ])
        .unwrap();
        let err = cli.run(Config::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::Config(_))
        ));
    }

    #[test]
    fn test_legacy_override_detection() {
        assert!(!warn_if_legacy_ignores(&IdCodec::standard()));

        let custom = IdCodec::from_config(coursehub_id::CodecConfig {
            offset: 0,
            ..Default::default()
        })
        .unwrap();
        assert!(warn_if_legacy_ignores(&custom));
    }

    #[test]
    fn test_ensure_all_ok() {
        assert!(ensure_all_ok(0, 3).is_ok());
        let err = ensure_all_ok(1, 3).unwrap_err();
        assert_eq!(err.to_string(), "1 of 3 inputs could not be decoded");
    }
}
