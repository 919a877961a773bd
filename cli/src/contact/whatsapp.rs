//! # WhatsApp Deep Link
//!
//! File: cli/src/contact/whatsapp.rs
//! Author: Christi Mahu
//!
//! Builds `https://wa.me/<digits>?text=<percent-encoded message>` links.
//!
use crate::core::error::{PsiGameError, Result};
use anyhow::anyhow;

const WA_ME_BASE: &str = "https://wa.me/";

/// Keeps only the ASCII digits of `phone`: `"+55 (98) 98136-8232"` becomes
/// `"5598981368232"`.
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// # WhatsApp Link (`whatsapp_link`)
///
/// ## Errors
///
/// Returns `PsiGameError::Contact` if `phone` contains no digits.
pub fn whatsapp_link(phone: &str, message: &str) -> Result<String> {
    let digits = phone_digits(phone);
    if digits.is_empty() {
        return Err(anyhow!(PsiGameError::Contact(format!(
            "phone number '{}' contains no digits",
            phone
        ))));
    }
    Ok(format!(
        "{}{}?text={}",
        WA_ME_BASE,
        digits,
        urlencoding::encode(message)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_digits() {
        assert_eq!(phone_digits("+55 (98) 98136-8232"), "5598981368232");
        assert_eq!(phone_digits("no digits"), "");
    }

    #[test]
    fn test_link_encodes_message() {
        let link = whatsapp_link("+55 (98) 98136-8232", "Nome: Ana\nEmpresa: A&B").unwrap();
        assert_eq!(
            link,
            "https://wa.me/5598981368232?text=Nome%3A%20Ana%0AEmpresa%3A%20A%26B"
        );
    }

    #[test]
    fn test_link_encodes_non_ascii() {
        let link = whatsapp_link("5598", "Olá").unwrap();
        assert_eq!(link, "https://wa.me/5598?text=Ol%C3%A1");
    }

    #[test]
    fn test_link_rejects_phone_without_digits() {
        let err = whatsapp_link("ligue já", "oi").unwrap_err();
        assert!(err.to_string().contains("contains no digits"));
    }
}
