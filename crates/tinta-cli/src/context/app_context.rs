use anyhow::Context;
use tinta_config::TintaConfig;
use tinta_core::enums::Locale;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;

/// Shared application state resolved once at startup.
pub struct AppContext {
    pub config: TintaConfig,
    pub locale: Locale,
}

impl AppContext {
    /// Load configuration and apply command-line overrides.
    pub fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let config = TintaConfig::load_with_dotenv().context("failed to load tinta configuration")?;
        Self::with_config(config, flags)
    }

    pub fn with_config(config: TintaConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let locale = match flags.locale.as_deref() {
            Some(raw) => parse_enum::<Locale>(raw, "locale")?,
            None => config.general.locale,
        };

        tracing::debug!(
            %locale,
            policy = %config.general.category_policy,
            "application context ready"
        );

        Ok(Self { config, locale })
    }
}
