//! # tinta-core
//!
//! Paint-quantity estimation for Tinta.
//!
//! This crate holds everything the estimator needs and nothing else:
//! - Input model and validation for wall dimensions, wall and coat counts
//! - Quality and surface categories, accepted in English and Spanish spelling
//! - The fixed coverage table (m² per liter) with its lenient default
//! - The estimate itself, rounded up to the nearest half liter
//! - Purchase recommendation tiering in gallon-equivalent containers
//! - Locale label maps and display formatting for results
//! - Form-field parsing and the WhatsApp contact link
//! - CLI response types
//!
//! All functions are pure and synchronous.

pub mod contact;
pub mod coverage;
pub mod display;
pub mod enums;
pub mod errors;
pub mod estimate;
pub mod form;
pub mod input;
pub mod recommendation;
pub mod responses;

pub use coverage::{DEFAULT_COVERAGE_RATE, resolve_coverage_rate};
pub use errors::EstimateError;
pub use estimate::{CalculationResult, estimate, estimate_with};
pub use input::{CalculationInput, validate};
pub use recommendation::{GALLON_LITERS, Recommendation};
