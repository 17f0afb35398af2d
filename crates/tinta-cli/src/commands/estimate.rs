use anyhow::Context;
use tinta_core::display::ResultDisplay;
use tinta_core::enums::CategoryPolicy;
use tinta_core::form::FormFields;
use tinta_core::responses::EstimateResponse;
use tinta_core::{CalculationInput, estimate_with};

use crate::cli::GlobalFlags;
use crate::cli::OutputFormat;
use crate::cli::root_commands::EstimateArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tinta estimate`.
pub fn handle(args: &EstimateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = run_estimate(args, ctx)?;

    match flags.format {
        OutputFormat::Table => output(&response.display, flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(&response, flags.format),
    }
}

fn run_estimate(args: &EstimateArgs, ctx: &AppContext) -> anyhow::Result<EstimateResponse> {
    let input = form_fields(args, ctx)
        .parse()
        .context("please fill in all fields correctly")?;

    let policy = if args.strict {
        CategoryPolicy::Strict
    } else {
        ctx.config.general.category_policy
    };

    let result = estimate_with(&input, policy).context("please fill in all fields correctly")?;
    tracing::info!(
        liters = result.liters_rounded,
        tier = %result.recommendation.tier,
        "estimate ready"
    );

    Ok(response_for(input, result, ctx))
}

/// Merge command-line values with configured defaults into raw form fields.
fn form_fields(args: &EstimateArgs, ctx: &AppContext) -> FormFields {
    let defaults = &ctx.config.defaults;
    FormFields {
        width: args.width.clone(),
        height: args.height.clone(),
        walls: args
            .walls
            .clone()
            .unwrap_or_else(|| defaults.walls.to_string()),
        coats: args
            .coats
            .clone()
            .unwrap_or_else(|| defaults.coats.to_string()),
        quality: args
            .quality
            .clone()
            .unwrap_or_else(|| defaults.quality.clone()),
        surface: args
            .surface
            .clone()
            .unwrap_or_else(|| defaults.surface.clone()),
    }
}

fn response_for(
    input: CalculationInput,
    result: tinta_core::CalculationResult,
    ctx: &AppContext,
) -> EstimateResponse {
    EstimateResponse {
        recommendation_label: result.recommendation_label(ctx.locale),
        display: ResultDisplay::new(&input, &result, ctx.locale),
        input,
        result,
    }
}
