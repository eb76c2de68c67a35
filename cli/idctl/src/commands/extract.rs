//! Extract command.

use anyhow::Result;
use clap::Args;
use coursehub_id::legacy::{self, LegacyDecoded};
use coursehub_id::IdCodec;
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;

use super::decode::{decode_row, DecodeRow};
use super::{display_option, ensure_all_ok, warn_if_legacy_ignores, CommandContext};

/// Extract primary keys from paths or URLs.
#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Paths or URLs, e.g. /course/CR0RX or https://host/products/CR0RX?ref=x
    #[arg(required = true)]
    urls: Vec<String>,

    /// Reproduce the web front-end's `extractIdFromUrl` (standard codec only).
    #[arg(long)]
    legacy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
struct ExtractRow {
    #[tabled(rename = "Kind")]
    kind: String,

    #[tabled(inline)]
    #[serde(flatten)]
    decoded: DecodeRow,
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct LegacyExtractRow {
    #[tabled(rename = "Input")]
    input: String,

    #[tabled(rename = "Front-end value")]
    value: LegacyDecoded,
}

impl ExtractCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        if self.legacy {
            warn_if_legacy_ignores(&ctx.codec);
            let rows: Vec<_> = self
                .urls
                .iter()
                .map(|url| LegacyExtractRow {
                    input: url.clone(),
                    value: legacy::extract_id_from_url(url),
                })
                .collect();
            print_output(&rows, ctx.format);
            return Ok(());
        }

        let rows = extract_rows(&ctx.codec, &self.urls);
        print_output(&rows, ctx.format);
        ensure_all_ok(rows.iter().filter(|r| !r.decoded.ok).count(), rows.len())
    }
}

/// The kind column is informational: a URL whose path is not a known
/// resource route still yields an ID from its last segment.
fn extract_rows(codec: &IdCodec, urls: &[String]) -> Vec<ExtractRow> {
    urls.iter()
        .map(|url| ExtractRow {
            kind: display_option(codec.resolve_path(url).ok().map(|(kind, _)| kind)),
            decoded: decode_row(url, codec.id_from_url(url)),
        })
        .collect()
}
