//! WhatsApp contact configuration.

use serde::{Deserialize, Serialize};
use tinta_core::contact::DEFAULT_CONTACT_MESSAGE;

fn default_message() -> String {
    String::from(DEFAULT_CONTACT_MESSAGE)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactConfig {
    /// Business phone number in international format. Empty opens the contact picker.
    #[serde(default)]
    pub phone: String,

    /// Message pre-filled in the chat.
    #[serde(default = "default_message")]
    pub message: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone: String::new(),
            message: default_message(),
        }
    }
}

impl ContactConfig {
    /// Phone number, if one is configured.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        let phone = self.phone.trim();
        (!phone.is_empty()).then_some(phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_phone() {
        let config = ContactConfig::default();
        assert_eq!(config.phone(), None);
        assert!(config.message.starts_with("Hola Ari Color"));
    }

    #[test]
    fn blank_phone_is_none() {
        let config = ContactConfig {
            phone: "   ".into(),
            ..Default::default()
        };
        assert_eq!(config.phone(), None);
    }
}
