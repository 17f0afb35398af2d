//! Coverage rates by paint quality and surface finish.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Quality, Surface};

/// Rate used when either category is unrecognized (m² per liter).
pub const DEFAULT_COVERAGE_RATE: f64 = 10.0;

/// Square meters one liter covers for a known quality and surface.
#[must_use]
pub const fn coverage_rate(quality: Quality, surface: Surface) -> f64 {
    match (quality, surface) {
        (Quality::Basic, Surface::Smooth) => 10.0,
        (Quality::Basic, Surface::Textured) => 9.0,
        (Quality::Basic, Surface::Rough) => 8.0,
        (Quality::Medium, Surface::Smooth) => 12.0,
        (Quality::Medium, Surface::Textured) => 11.0,
        (Quality::Medium, Surface::Rough) => 10.0,
        (Quality::Premium, Surface::Smooth) => 14.0,
        (Quality::Premium, Surface::Textured) => 13.0,
        (Quality::Premium, Surface::Rough) => 12.0,
    }
}

/// Look up the coverage rate for raw category tokens.
///
/// Unknown tokens degrade to [`DEFAULT_COVERAGE_RATE`] instead of failing.
#[must_use]
pub fn resolve_coverage_rate(quality: &str, surface: &str) -> f64 {
    match (Quality::from_token(quality), Surface::from_token(surface)) {
        (Some(quality), Some(surface)) => coverage_rate(quality, surface),
        _ => {
            tracing::debug!(
                quality,
                surface,
                rate = DEFAULT_COVERAGE_RATE,
                "unrecognized paint category; using default coverage rate"
            );
            DEFAULT_COVERAGE_RATE
        }
    }
}

/// One cell of the coverage table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CoverageEntry {
    pub quality: Quality,
    pub surface: Surface,
    pub rate: f64,
}

/// All nine table cells, quality-major.
#[must_use]
pub fn coverage_table() -> Vec<CoverageEntry> {
    Quality::ALL
        .iter()
        .flat_map(|&quality| {
            Surface::ALL.iter().map(move |&surface| CoverageEntry {
                quality,
                surface,
                rate: coverage_rate(quality, surface),
            })
        })
        .collect()
}
