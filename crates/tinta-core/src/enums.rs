//! Paint categories, recommendation tiers, locales and lookup policy.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Category enums also accept the Spanish tokens used by the original order form
//! through `from_token`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::EstimateError;

/// Lowercase and fold the accented vowels that appear in form tokens.
fn normalize_token(raw: &str) -> String {
    raw.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|ch| match ch {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            other => other,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Quality
// ---------------------------------------------------------------------------

/// Paint quality grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    Basic,
    Medium,
    Premium,
}

impl Quality {
    pub const ALL: [Self; 3] = [Self::Basic, Self::Medium, Self::Premium];

    /// Recognize an English or Spanish quality token. Returns `None` for anything else.
    #[must_use]
    pub fn from_token(raw: &str) -> Option<Self> {
        match normalize_token(raw).as_str() {
            "basic" | "basica" => Some(Self::Basic),
            "medium" | "media" => Some(Self::Medium),
            "premium" => Some(Self::Premium),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Medium => "medium",
            Self::Premium => "premium",
        }
    }

    /// Display name in the given locale.
    #[must_use]
    pub const fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Basic, Locale::En) => "Basic",
            (Self::Basic, Locale::Es) => "Básica",
            (Self::Medium, Locale::En) => "Medium",
            (Self::Medium, Locale::Es) => "Media",
            (Self::Premium, _) => "Premium",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quality {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| EstimateError::UnknownCategory {
            kind: "quality",
            token: s.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Surface
// ---------------------------------------------------------------------------

/// Wall surface finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    Smooth,
    Textured,
    Rough,
}

impl Surface {
    pub const ALL: [Self; 3] = [Self::Smooth, Self::Textured, Self::Rough];

    #[must_use]
    pub fn from_token(raw: &str) -> Option<Self> {
        match normalize_token(raw).as_str() {
            "smooth" | "lisa" => Some(Self::Smooth),
            "textured" | "texturizada" => Some(Self::Textured),
            "rough" | "rugosa" => Some(Self::Rough),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Smooth => "smooth",
            Self::Textured => "textured",
            Self::Rough => "rough",
        }
    }

    #[must_use]
    pub const fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Smooth, Locale::En) => "Smooth",
            (Self::Smooth, Locale::Es) => "Lisa",
            (Self::Textured, Locale::En) => "Textured",
            (Self::Textured, Locale::Es) => "Texturizada",
            (Self::Rough, Locale::En) => "Rough",
            (Self::Rough, Locale::Es) => "Rugosa",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Surface {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| EstimateError::UnknownCategory {
            kind: "surface",
            token: s.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tier
// ---------------------------------------------------------------------------

/// Purchase recommendation tier, ordered by quantity.
///
/// ```text
/// single_liter (L <= 1) → one_gallon (<= 3.78) → two_gallons (<= 7.56)
///   → bundle (<= 11.34) → bulk
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    SingleLiter,
    OneGallon,
    TwoGallons,
    Bundle,
    Bulk,
}

impl Tier {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SingleLiter => "single_liter",
            Self::OneGallon => "one_gallon",
            Self::TwoGallons => "two_gallons",
            Self::Bundle => "bundle",
            Self::Bulk => "bulk",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Locale
// ---------------------------------------------------------------------------

/// Language used for labels and result text.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CategoryPolicy
// ---------------------------------------------------------------------------

/// What to do with a quality or surface token that is not in the coverage table.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CategoryPolicy {
    /// Substitute the default coverage rate.
    #[default]
    Lenient,
    /// Fail the estimate with [`EstimateError::UnknownCategory`].
    Strict,
}

impl CategoryPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for CategoryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display name for a raw quality token, falling back to the token itself.
#[must_use]
pub fn translate_quality(raw: &str, locale: Locale) -> String {
    Quality::from_token(raw).map_or_else(|| raw.to_string(), |q| q.label(locale).to_string())
}

/// Display name for a raw surface token, falling back to the token itself.
#[must_use]
pub fn translate_surface(raw: &str, locale: Locale) -> String {
    Surface::from_token(raw).map_or_else(|| raw.to_string(), |s| s.label(locale).to_string())
}
