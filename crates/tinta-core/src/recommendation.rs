//! Purchase recommendation tiering.
//!
//! Liters are bucketed into gallon-equivalent containers of [`GALLON_LITERS`].
//! Every boundary is inclusive on the lower tier, and the bulk tier rounds the
//! container count up so that a recommendation never under-provisions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Locale, Tier};

/// Size of one gallon-equivalent purchase unit.
pub const GALLON_LITERS: f64 = 3.78;

/// How much paint to buy, in structured form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Recommendation {
    /// Liters the recommendation was derived from.
    pub liters: f64,
    /// Containers to buy: one 1 L container in the single-liter tier,
    /// gallon-equivalents otherwise.
    pub container_units: u64,
    pub tier: Tier,
}

impl Recommendation {
    /// Tier a liter quantity.
    ///
    /// Returns `None` when the bulk container count does not fit in a `u64`,
    /// which includes infinite or NaN liters.
    #[must_use]
    pub fn for_liters(liters: f64) -> Option<Self> {
        let (tier, container_units) = if liters <= 1.0 {
            (Tier::SingleLiter, 1)
        } else if liters <= GALLON_LITERS {
            (Tier::OneGallon, 1)
        } else if liters <= GALLON_LITERS * 2.0 {
            (Tier::TwoGallons, 2)
        } else if liters <= GALLON_LITERS * 3.0 {
            (Tier::Bundle, 3)
        } else {
            (Tier::Bulk, gallons_needed(liters)?)
        };

        Some(Self {
            liters,
            container_units,
            tier,
        })
    }

    /// Human-readable recommendation, e.g. `2.5 liters (1 gallon-equivalent)`.
    #[must_use]
    pub fn label(&self, locale: Locale) -> String {
        let liters = self.liters;
        let quantity = format!("{liters} {}", liter_noun(liters, locale));
        let detail = match (self.tier, locale) {
            (Tier::SingleLiter, Locale::En) => String::from("1 unit container"),
            (Tier::SingleLiter, Locale::Es) => String::from("1 litro de pintura"),
            (Tier::OneGallon, Locale::En) => String::from("1 gallon-equivalent"),
            (Tier::OneGallon, Locale::Es) => String::from("1 galón de pintura"),
            (Tier::TwoGallons, Locale::En) => String::from("2 gallon-equivalents"),
            (Tier::TwoGallons, Locale::Es) => String::from("2 galones de pintura"),
            (Tier::Bundle, Locale::En) => String::from("3 gallon-equivalents — bundle tier"),
            (Tier::Bundle, Locale::Es) => String::from("3 galones de pintura - Combo Especial"),
            (Tier::Bulk, Locale::En) => format!("{} gallon-equivalents", self.container_units),
            (Tier::Bulk, Locale::Es) => format!("{} galones de pintura", self.container_units),
        };
        format!("{quantity} ({detail})")
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn gallons_needed(liters: f64) -> Option<u64> {
    let units = (liters / GALLON_LITERS).ceil();
    (units < u64::MAX as f64).then(|| units as u64)
}

pub(crate) fn liter_noun(liters: f64, locale: Locale) -> &'static str {
    let singular = (liters - 1.0).abs() < f64::EPSILON;
    match (locale, singular) {
        (Locale::En, true) => "liter",
        (Locale::En, false) => "liters",
        (Locale::Es, true) => "litro",
        (Locale::Es, false) => "litros",
    }
}
