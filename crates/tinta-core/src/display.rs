//! Locale-aware text for showing a result to a person.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Locale, Tier, translate_quality, translate_surface};
use crate::estimate::CalculationResult;
use crate::input::CalculationInput;
use crate::recommendation::liter_noun;

/// Pre-formatted result fields, ready for a display surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResultDisplay {
    pub total_area: String,
    pub coverage: String,
    pub liters: String,
    pub recommendation: String,
    pub tier: Tier,
    pub details: String,
}

impl ResultDisplay {
    #[must_use]
    pub fn new(input: &CalculationInput, result: &CalculationResult, locale: Locale) -> Self {
        let per_liter = match locale {
            Locale::En => "m²/liter",
            Locale::Es => "m²/litro",
        };
        let liters = result.liters_rounded;

        Self {
            total_area: format!("{:.2} m²", result.total_area),
            coverage: format!("{} {per_liter}", result.coverage_rate),
            liters: format!("{liters} {}", liter_noun(liters, locale)),
            recommendation: result.recommendation_label(locale),
            tier: result.recommendation.tier,
            details: details_line(input, locale),
        }
    }
}

/// One-line echo of the input, e.g. `Width: 2m | Height: 2.5m | ...`.
#[must_use]
pub fn details_line(input: &CalculationInput, locale: Locale) -> String {
    let [width, height, walls, coats, quality, surface] = match locale {
        Locale::En => ["Width", "Height", "Walls", "Coats", "Quality", "Surface"],
        Locale::Es => ["Ancho", "Alto", "Paredes", "Manos", "Calidad", "Superficie"],
    };

    format!(
        "{width}: {}m | {height}: {}m | {walls}: {} | {coats}: {} | {quality}: {} | {surface}: {}",
        input.width,
        input.height,
        input.wall_count,
        input.coat_count,
        translate_quality(&input.quality, locale),
        translate_surface(&input.surface, locale),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::enums::{Quality, Surface};
    use crate::estimate::estimate;

    #[test]
    fn english_display() {
        let input = CalculationInput::new(2.0, 2.5, 4, 1, Quality::Basic, Surface::Smooth);
        let result = estimate(&input).expect("valid input");
        let display = ResultDisplay::new(&input, &result, Locale::En);

        assert_eq!(
            display,
            ResultDisplay {
                total_area: "20.00 m²".into(),
                coverage: "10 m²/liter".into(),
                liters: "2 liters".into(),
                recommendation: "2 liters (1 gallon-equivalent)".into(),
                tier: Tier::OneGallon,
                details: "Width: 2m | Height: 2.5m | Walls: 4 | Coats: 1 | Quality: Basic | Surface: Smooth"
                    .into(),
            }
        );
    }

    #[test]
    fn spanish_details_keep_unknown_tokens() {
        let input = CalculationInput {
            surface: "estuco".into(),
            ..CalculationInput::new(3.0, 2.4, 2, 2, Quality::Medium, Surface::Smooth)
        };
        assert_eq!(
            details_line(&input, Locale::Es),
            "Ancho: 3m | Alto: 2.4m | Paredes: 2 | Manos: 2 | Calidad: Media | Superficie: estuco"
        );
    }
}
