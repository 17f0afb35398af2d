//! CLI response types returned as JSON by `tinta` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::coverage::CoverageEntry;
use crate::display::ResultDisplay;
use crate::estimate::CalculationResult;
use crate::input::CalculationInput;

/// Response from `tinta estimate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EstimateResponse {
    pub input: CalculationInput,
    pub result: CalculationResult,
    pub recommendation_label: String,
    pub display: ResultDisplay,
}

/// Response from `tinta coverage`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CoverageResponse {
    pub default_rate: f64,
    pub entries: Vec<CoverageEntry>,
}

/// Response from `tinta contact`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContactResponse {
    pub phone: Option<String>,
    pub message: String,
    pub link: String,
}
