//! Estimator input and its validation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Quality, Surface};

/// Values collected from the order form, one calculation's worth.
///
/// Category tokens are stored as given so that unrecognized values can be
/// echoed back and resolved according to the caller's [`CategoryPolicy`].
///
/// [`CategoryPolicy`]: crate::enums::CategoryPolicy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CalculationInput {
    /// Wall width in meters.
    pub width: f64,
    /// Wall height in meters.
    pub height: f64,
    pub wall_count: i64,
    pub coat_count: i64,
    pub quality: String,
    pub surface: String,
}

impl CalculationInput {
    /// Build an input from known categories.
    #[must_use]
    pub fn new(
        width: f64,
        height: f64,
        wall_count: i64,
        coat_count: i64,
        quality: Quality,
        surface: Surface,
    ) -> Self {
        Self {
            width,
            height,
            wall_count,
            coat_count,
            quality: quality.as_str().to_string(),
            surface: surface.as_str().to_string(),
        }
    }

    /// Replace the wall dimensions, keeping everything else.
    #[must_use]
    pub fn with_dimensions(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Replace the wall and coat counts, keeping everything else.
    #[must_use]
    pub fn with_counts(mut self, wall_count: i64, coat_count: i64) -> Self {
        self.wall_count = wall_count;
        self.coat_count = coat_count;
        self
    }
}

/// Check that all numeric fields are finite and strictly positive.
///
/// Category tokens are not checked here; they are resolved at lookup time.
#[must_use]
pub fn validate(input: &CalculationInput) -> bool {
    is_positive(input.width)
        && is_positive(input.height)
        && input.wall_count > 0
        && input.coat_count > 0
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
