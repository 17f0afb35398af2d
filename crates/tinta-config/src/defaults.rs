//! Fallback values for estimate fields the caller leaves out.

use serde::{Deserialize, Serialize};
use tinta_core::enums::{Quality, Surface};

const fn default_walls() -> u32 {
    1
}

const fn default_coats() -> u32 {
    2
}

fn default_quality() -> String {
    Quality::Medium.as_str().to_string()
}

fn default_surface() -> String {
    Surface::Smooth.as_str().to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_walls")]
    pub walls: u32,

    #[serde(default = "default_coats")]
    pub coats: u32,

    /// Quality token, English or Spanish.
    #[serde(default = "default_quality")]
    pub quality: String,

    /// Surface token, English or Spanish.
    #[serde(default = "default_surface")]
    pub surface: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            walls: default_walls(),
            coats: default_coats(),
            quality: default_quality(),
            surface: default_surface(),
        }
    }
}

impl DefaultsConfig {
    /// Whether both category tokens are in the coverage table.
    #[must_use]
    pub fn has_known_categories(&self) -> bool {
        Quality::from_token(&self.quality).is_some() && Surface::from_token(&self.surface).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = DefaultsConfig::default();
        assert_eq!(config.walls, 1);
        assert_eq!(config.coats, 2);
        assert_eq!(config.quality, "medium");
        assert_eq!(config.surface, "smooth");
        assert!(config.has_known_categories());
    }

    #[test]
    fn spanish_tokens_are_known() {
        let config = DefaultsConfig {
            quality: "basica".into(),
            surface: "rugosa".into(),
            ..Default::default()
        };
        assert!(config.has_known_categories());
    }

    #[test]
    fn typo_is_unknown() {
        let config = DefaultsConfig {
            surface: "smoth".into(),
            ..Default::default()
        };
        assert!(!config.has_known_categories());
    }
}
