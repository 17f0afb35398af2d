use serde::Serialize;
use tinta_core::DEFAULT_COVERAGE_RATE;
use tinta_core::coverage::{CoverageEntry, coverage_table};
use tinta_core::enums::Locale;
use tinta_core::responses::CoverageResponse;

use crate::cli::GlobalFlags;
use crate::cli::OutputFormat;
use crate::context::AppContext;
use crate::output::output;

/// Coverage row with localized category names, for table output.
#[derive(Debug, Serialize)]
struct CoverageRow {
    quality: &'static str,
    surface: &'static str,
    rate: f64,
}

/// Handle `tinta coverage`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let entries = coverage_table();

    match flags.format {
        OutputFormat::Table => output(&localized_rows(&entries, ctx.locale), flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(
            &CoverageResponse {
                default_rate: DEFAULT_COVERAGE_RATE,
                entries,
            },
            flags.format,
        ),
    }
}

fn localized_rows(entries: &[CoverageEntry], locale: Locale) -> Vec<CoverageRow> {
    entries
        .iter()
        .map(|entry| CoverageRow {
            quality: entry.quality.label(locale),
            surface: entry.surface.label(locale),
            rate: entry.rate,
        })
        .collect()
}
