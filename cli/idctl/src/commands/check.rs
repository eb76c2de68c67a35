//! Check command.

use anyhow::Result;
use clap::Args;
use coursehub_id::IdCodec;
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;

use super::CommandContext;

/// Check whether strings have the token format.
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Strings to check.
    #[arg(required = true)]
    tokens: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
struct CheckRow {
    #[tabled(rename = "Input")]
    input: String,

    /// Prefix followed by `[0-9A-Z]+`.
    #[tabled(rename = "Format")]
    format_ok: bool,

    /// Canonical and within range.
    #[tabled(rename = "Decodes")]
    decodes: bool,
}

impl CheckCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows = check_rows(&ctx.codec, &self.tokens);
        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn check_rows(codec: &IdCodec, tokens: &[String]) -> Vec<CheckRow> {
    tokens
        .iter()
        .map(|token| {
            let format_ok = codec.is_encoded_id(token);
            CheckRow {
                input: token.clone(),
                format_ok,
                decodes: format_ok && codec.decode(token).is_ok(),
            }
        })
        .collect()
}
