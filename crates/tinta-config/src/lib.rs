//! # tinta-config
//!
//! Layered configuration loading for Tinta using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TINTA_*` prefix, `__` as separator)
//! 2. Project-level `.tinta/config.toml`
//! 3. User-level `~/.config/tinta/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TINTA_GENERAL__LOCALE` -> `general.locale`, `TINTA_DEFAULTS__COATS` ->
//! `defaults.coats`, etc. The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use tinta_config::TintaConfig;
//!
//! let config = TintaConfig::load_with_dotenv().expect("config");
//! println!("locale: {}", config.general.locale);
//! ```

mod contact;
mod defaults;
mod error;
mod general;

pub use contact::ContactConfig;
pub use defaults::DefaultsConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tinta_core::enums::CategoryPolicy;

/// Project-local config location, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".tinta/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TintaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

impl TintaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support from the current directory.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = Path::new(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("TINTA_").split("__"))
    }

    /// Reject values the estimator could never use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.defaults.walls == 0 {
            return Err(invalid("defaults.walls", "must be at least 1"));
        }
        if self.defaults.coats == 0 {
            return Err(invalid("defaults.coats", "must be at least 1"));
        }
        if self.general.category_policy == CategoryPolicy::Strict
            && !self.defaults.has_known_categories()
        {
            return Err(invalid(
                "defaults",
                "quality and surface must be known categories under the strict policy",
            ));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tinta").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
