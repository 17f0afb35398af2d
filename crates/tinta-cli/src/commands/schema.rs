use anyhow::bail;
use schemars::schema_for;
use tinta_core::responses::{ContactResponse, CoverageResponse, EstimateResponse};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `tinta schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name.trim().to_ascii_lowercase().as_str() {
        "estimate" => schema_for!(EstimateResponse),
        "coverage" => schema_for!(CoverageResponse),
        "contact" => schema_for!(ContactResponse),
        other => bail!("unknown schema type '{other}' (expected estimate, coverage, or contact)"),
    };
    output(&schema, flags.format)
}
