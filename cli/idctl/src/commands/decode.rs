//! Decode command.
//!
//! `--legacy` shows what the web front-end's decoder returned for each input
//! next to the strict error it maps to.

use anyhow::Result;
use clap::Args;
use coursehub_id::legacy::{self, LegacyDecoded, LegacyValue};
use coursehub_id::IdCodec;
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;

use super::{display_option, ensure_all_ok, warn_if_legacy_ignores, CommandContext};

/// Decode tokens into primary keys.
#[derive(Debug, Args)]
pub struct DecodeCommand {
    /// Tokens to decode.
    #[arg(required = true)]
    tokens: Vec<String>,

    /// Reproduce the web front-end's lenient decoder (standard codec only).
    #[arg(long)]
    legacy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub(super) struct DecodeRow {
    #[tabled(rename = "Input")]
    pub input: String,

    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "Error")]
    pub error: String,

    #[tabled(skip)]
    #[serde(skip)]
    pub ok: bool,
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct LegacyRow {
    #[tabled(rename = "Input")]
    input: String,

    #[tabled(rename = "Front-end value")]
    value: LegacyDecoded,

    #[tabled(rename = "Strict mapping")]
    strict: String,
}

impl DecodeCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        if self.legacy {
            warn_if_legacy_ignores(&ctx.codec);
            let rows = legacy_rows(&self.tokens);
            print_output(&rows, ctx.format);
            return Ok(());
        }

        let rows = decode_rows(&ctx.codec, &self.tokens);
        print_output(&rows, ctx.format);
        ensure_all_ok(rows.iter().filter(|r| !r.ok).count(), rows.len())
    }
}

pub(super) fn decode_row(input: &str, result: Result<u64, coursehub_id::IdError>) -> DecodeRow {
    let ok = result.is_ok();
    DecodeRow {
        input: input.to_string(),
        id: display_option(result.as_ref().ok()),
        error: display_option(result.err()),
        ok,
    }
}

fn decode_rows(codec: &IdCodec, tokens: &[String]) -> Vec<DecodeRow> {
    tokens
        .iter()
        .map(|token| decode_row(token, codec.decode(token)))
        .collect()
}

fn legacy_rows(tokens: &[String]) -> Vec<LegacyRow> {
    tokens
        .iter()
        .map(|token| {
            let value = legacy::decode_id(&LegacyValue::from(token.as_str()));
            let strict = match value.clone().into_result() {
                Ok(id) => id.to_string(),
                Err(e) => e.to_string(),
            };
            LegacyRow {
                input: token.clone(),
                value,
                strict,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_decode_rows() {
        let rows = decode_rows(&IdCodec::standard(), &strings(&["CR0RX", "AB123"]));
        assert_eq!(rows[0].id, "5");
        assert_eq!(rows[0].error, "-");
        assert!(rows[0].ok);
        assert_eq!(rows[1].id, "-");
        assert!(rows[1].error.contains("missing prefix"));
        assert!(!rows[1].ok);
    }

    #[test]
    fn test_legacy_rows() {
        let rows = legacy_rows(&strings(&["CR0RX", "not-a-token", ""]));
        assert_eq!(rows[0].value, LegacyDecoded::Number(5.0));
        assert_eq!(rows[0].strict, "5");
        assert!(rows[1].value.is_nan());
        assert!(rows[1].strict.contains("unparsable"));
        assert_eq!(rows[2].value, LegacyDecoded::Null);
        assert_eq!(rows[2].strict, "token is not a string");
    }
}
