use tinta_core::contact::whatsapp_link;
use tinta_core::responses::ContactResponse;

use crate::cli::GlobalFlags;
use crate::cli::OutputFormat;
use crate::cli::root_commands::ContactArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tinta contact`.
pub fn handle(args: &ContactArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = build_response(args, ctx);

    if flags.format == OutputFormat::Raw {
        println!("{}", response.link);
        return Ok(());
    }
    output(&response, flags.format)
}

fn build_response(args: &ContactArgs, ctx: &AppContext) -> ContactResponse {
    let phone = args
        .phone
        .as_deref()
        .or_else(|| ctx.config.contact.phone())
        .map(str::to_string);
    let message = args
        .message
        .clone()
        .unwrap_or_else(|| ctx.config.contact.message.clone());
    let link = whatsapp_link(phone.as_deref(), &message);

    ContactResponse {
        phone,
        message,
        link,
    }
}

#[cfg(test)]
mod tests {
    use tinta_config::TintaConfig;
    use tinta_core::enums::Locale;

    use super::build_response;
    use crate::cli::root_commands::ContactArgs;
    use crate::context::AppContext;

    fn ctx(phone: &str) -> AppContext {
        let mut config = TintaConfig::default();
        config.contact.phone = phone.to_string();
        AppContext {
            config,
            locale: Locale::En,
        }
    }

    #[test]
    fn uses_configured_phone_and_message() {
        let args = ContactArgs {
            phone: None,
            message: None,
        };
        let response = build_response(&args, &ctx("+51 999 000 111"));
        assert_eq!(response.phone.as_deref(), Some("+51 999 000 111"));
        assert!(response.link.starts_with("https://wa.me/51999000111?text=Hola%20Ari"));
    }

    #[test]
    fn flags_override_config() {
        let args = ContactArgs {
            phone: Some("123".into()),
            message: Some("quote please".into()),
        };
        let response = build_response(&args, &ctx("999"));
        assert_eq!(response.link, "https://wa.me/123?text=quote%20please");
    }

    #[test]
    fn missing_phone_opens_contact_picker() {
        let args = ContactArgs {
            phone: None,
            message: Some("hi".into()),
        };
        let response = build_response(&args, &ctx(""));
        assert_eq!(response.phone, None);
        assert_eq!(response.link, "https://wa.me/?text=hi");
    }
}
