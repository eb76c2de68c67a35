//! Url command.

use anyhow::Result;
use clap::{Args, ValueEnum};
use coursehub_id::{IdCodec, ResourceKind};
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;

use super::CommandContext;

/// Build resource paths for primary keys.
#[derive(Debug, Args)]
pub struct UrlCommand {
    /// Resource kind.
    #[arg(value_enum)]
    kind: KindArg,

    /// Primary keys.
    #[arg(required = true)]
    ids: Vec<u64>,

    /// Origin to prepend, e.g. https://learn.example.com
    #[arg(long, env = "CRID_BASE_URL")]
    base_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KindArg {
    Course,
    Product,
    Instructor,
}

impl From<KindArg> for ResourceKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Course => ResourceKind::Course,
            KindArg::Product => ResourceKind::Product,
            KindArg::Instructor => ResourceKind::Instructor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
struct UrlRow {
    #[tabled(rename = "Kind")]
    kind: ResourceKind,

    #[tabled(rename = "ID")]
    id: u64,

    #[tabled(rename = "URL")]
    url: String,
}

impl UrlCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows = url_rows(
            &ctx.codec,
            self.kind.into(),
            &self.ids,
            self.base_url.as_deref(),
        );
        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn url_rows(codec: &IdCodec, kind: ResourceKind, ids: &[u64], base_url: Option<&str>) -> Vec<UrlRow> {
    let origin = base_url.unwrap_or_default().trim_end_matches('/');
    ids.iter()
        .map(|&id| UrlRow {
            kind,
            id,
            url: format!("{origin}{}", codec.resource_path(kind, id)),
        })
        .collect()
}
