//! The paint estimate.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::coverage::resolve_coverage_rate;
use crate::enums::{CategoryPolicy, Locale, Quality, Surface};
use crate::errors::EstimateError;
use crate::input::{CalculationInput, validate};
use crate::recommendation::Recommendation;

/// Outcome of one estimate. Owned by the caller and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CalculationResult {
    /// Paintable area in m², one coat.
    pub total_area: f64,
    /// m² per liter.
    pub coverage_rate: f64,
    /// Exact liters for all coats, before rounding.
    pub liters_needed: f64,
    /// `liters_needed` rounded up to the next half liter.
    pub liters_rounded: f64,
    pub recommendation: Recommendation,
}

impl CalculationResult {
    /// Composed recommendation text in the given locale.
    #[must_use]
    pub fn recommendation_label(&self, locale: Locale) -> String {
        self.recommendation.label(locale)
    }
}

/// Estimate with the lenient category policy.
///
/// # Errors
///
/// Returns [`EstimateError::Validation`] when [`validate`] rejects the input.
pub fn estimate(input: &CalculationInput) -> Result<CalculationResult, EstimateError> {
    estimate_with(input, CategoryPolicy::Lenient)
}

/// Estimate with an explicit policy for unrecognized categories.
///
/// # Errors
///
/// Returns [`EstimateError::Validation`] when [`validate`] rejects the input or
/// the room is too large to estimate (the area overflows, or the container
/// count does not fit in a `u64`), and [`EstimateError::UnknownCategory`] for
/// an unrecognized quality or surface under [`CategoryPolicy::Strict`].
pub fn estimate_with(
    input: &CalculationInput,
    policy: CategoryPolicy,
) -> Result<CalculationResult, EstimateError> {
    if !validate(input) {
        return Err(EstimateError::Validation(String::from(
            "width, height, walls and coats must be positive numbers",
        )));
    }

    if policy == CategoryPolicy::Strict {
        input.quality.parse::<Quality>()?;
        input.surface.parse::<Surface>()?;
    }

    #[allow(clippy::cast_precision_loss)]
    let (walls, coats) = (input.wall_count as f64, input.coat_count as f64);

    let area_per_wall = input.width * input.height;
    let total_area = area_per_wall * walls;
    let area_with_coats = total_area * coats;
    if !area_with_coats.is_finite() {
        return Err(too_large());
    }

    let coverage_rate = resolve_coverage_rate(&input.quality, &input.surface);
    let liters_needed = area_with_coats / coverage_rate;
    let liters_rounded = (liters_needed * 2.0).ceil() / 2.0;
    let recommendation = Recommendation::for_liters(liters_rounded).ok_or_else(too_large)?;

    tracing::debug!(
        total_area,
        coverage_rate,
        liters_needed,
        liters_rounded,
        "paint estimate computed"
    );

    Ok(CalculationResult {
        total_area,
        coverage_rate,
        liters_needed,
        liters_rounded,
        recommendation,
    })
}

fn too_large() -> EstimateError {
    EstimateError::Validation(String::from("the room is too large to estimate"))
}
