//! General application configuration.

use serde::{Deserialize, Serialize};
use tinta_core::enums::{CategoryPolicy, Locale};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Language for labels and result text.
    #[serde(default)]
    pub locale: Locale,

    /// Whether unknown quality/surface tokens degrade to the default rate or fail.
    #[serde(default)]
    pub category_policy: CategoryPolicy,
}
