//! Raw form fields and their conversion into [`CalculationInput`].
//!
//! Parsing is deliberately loose, the way a browser form is: surrounding
//! whitespace is ignored, a decimal comma is accepted for dimensions, and
//! every field reads only its leading number (`"2.5m"` is 2.5 meters, `"2.7"`
//! is two coats). Unreadable dimensions become NaN and are rejected by
//! [`validate`].
//!
//! [`validate`]: crate::input::validate

use serde::{Deserialize, Serialize};

use crate::errors::EstimateError;
use crate::input::CalculationInput;

/// The six fields as submitted, before any interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub width: String,
    pub height: String,
    pub walls: String,
    pub coats: String,
    pub quality: String,
    pub surface: String,
}

impl FormFields {
    /// Interpret the fields as a calculation input.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::Validation`] when a count has no leading integer.
    pub fn parse(&self) -> Result<CalculationInput, EstimateError> {
        Ok(CalculationInput {
            width: parse_dimension(&self.width),
            height: parse_dimension(&self.height),
            wall_count: parse_count(&self.walls).ok_or_else(|| not_a_number("walls"))?,
            coat_count: parse_count(&self.coats).ok_or_else(|| not_a_number("coats"))?,
            quality: self.quality.trim().to_string(),
            surface: self.surface.trim().to_string(),
        })
    }
}

fn not_a_number(field: &str) -> EstimateError {
    EstimateError::Validation(format!("{field} must be a whole number"))
}

/// Read a length in meters from its leading number. Anything unreadable is NaN.
#[must_use]
pub fn parse_dimension(raw: &str) -> f64 {
    let normalized = raw.trim().replace(',', ".");
    float_prefix(&normalized)
        .parse::<f64>()
        .unwrap_or(f64::NAN)
}

/// Longest leading `[sign] digits [. digits] [e [sign] digits]` slice.
fn float_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut mantissa_digits = digits_from(end);
    end += mantissa_digits;

    if bytes.get(end) == Some(&b'.') {
        let fraction_digits = digits_from(end + 1);
        if fraction_digits > 0 {
            end += 1 + fraction_digits;
            mantissa_digits += fraction_digits;
        }
    }
    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = digits_from(exponent_end);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    &text[..end]
}

/// Read the leading integer of a count field, with an optional sign.
#[must_use]
pub fn parse_count(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|value| sign * value)
}
