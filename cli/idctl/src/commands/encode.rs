//! Encode command.

use anyhow::Result;
use clap::Args;
use coursehub_id::IdCodec;
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;

use super::CommandContext;

/// Encode primary keys into tokens.
#[derive(Debug, Args)]
pub struct EncodeCommand {
    /// Primary keys to encode.
    #[arg(required = true)]
    ids: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
struct EncodeRow {
    #[tabled(rename = "ID")]
    id: u64,

    #[tabled(rename = "Token")]
    token: String,
}

impl EncodeCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows = encode_rows(&ctx.codec, &self.ids);
        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn encode_rows(codec: &IdCodec, ids: &[u64]) -> Vec<EncodeRow> {
    ids.iter()
        .map(|&id| EncodeRow {
            id,
            token: codec.encode(id),
        })
        .collect()
}
