//! WhatsApp contact link.

/// Greeting pre-filled in the chat when no message is configured.
pub const DEFAULT_CONTACT_MESSAGE: &str =
    "Hola Ari Color, quisiera más información sobre sus productos de pintura.";

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Build a `wa.me` deep link with a pre-filled message.
///
/// Non-digit characters in `phone` are dropped. Without a phone number the link
/// opens the contact picker.
#[must_use]
pub fn whatsapp_link(phone: Option<&str>, message: &str) -> String {
    let digits: String = phone
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    format!(
        "{WHATSAPP_BASE}{digits}?text={}",
        urlencoding::encode(message)
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn link_without_phone_uses_contact_picker() {
        assert_eq!(
            whatsapp_link(None, "Hola, info"),
            "https://wa.me/?text=Hola%2C%20info"
        );
    }

    #[test]
    fn phone_is_reduced_to_digits() {
        assert_eq!(
            whatsapp_link(Some("+51 999-123-456"), "hi"),
            "https://wa.me/51999123456?text=hi"
        );
    }

    #[test]
    fn default_message_encodes_accents() {
        let link = whatsapp_link(None, DEFAULT_CONTACT_MESSAGE);
        assert!(link.starts_with("https://wa.me/?text=Hola%20Ari%20Color%2C"));
        assert!(link.contains("m%C3%A1s"));
        assert!(!link.contains(' '));
    }
}
