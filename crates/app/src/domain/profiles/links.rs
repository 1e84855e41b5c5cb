//! Contact links shown on a public profile.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Country calling code assumed for numbers entered without one.
pub const DEFAULT_COUNTRY_CODE: &str = "55";

/// Local numbers (area code + subscriber) have at most this many digits.
const MAX_LOCAL_DIGITS: usize = 11;

/// Characters a browser's `encodeURIComponent` leaves alone.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Message a visitor starts the chat with.
#[must_use]
pub fn booking_greeting(display_name: &str) -> String {
    format!(
        "Olá {display_name}! Vi seu cartão no GroomerLink e gostaria de agendar um serviço."
    )
}

/// `wa.me` click-to-chat link for a phone number, prefilled with `message`
/// unless it is empty.
///
/// Numbers of at most 11 digits are taken to be Brazilian local numbers
/// (area code + subscriber) and get [`DEFAULT_COUNTRY_CODE`] prefixed. Longer
/// numbers are assumed to carry their own country code. A foreign number of
/// 11 digits or fewer entered without `+<code>` is therefore misread as
/// Brazilian. Numbers are not checked for a leading `55`, since that is also
/// a valid Brazilian area code.
///
/// Returns `None` when the number contains no digits.
#[must_use]
pub fn whatsapp_url(phone: &str, message: &str) -> Option<String> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();

    if digits.is_empty() {
        return None;
    }

    let mut url = if digits.len() <= MAX_LOCAL_DIGITS {
        format!("https://wa.me/{DEFAULT_COUNTRY_CODE}{digits}")
    } else {
        format!("https://wa.me/{digits}")
    };

    if !message.is_empty() {
        url.push_str("?text=");
        url.extend(utf8_percent_encode(message, QUERY_VALUE));
    }

    Some(url)
}

/// Instagram profile link for a handle, with or without a leading `@`.
#[must_use]
pub fn instagram_url(handle: &str) -> Option<String> {
    let handle = handle.trim().trim_start_matches('@');

    (!handle.is_empty()).then(|| format!("https://instagram.com/{handle}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_adds_country_code_to_local_numbers() {
        assert_eq!(
            whatsapp_url("(11) 98765-4321", "").as_deref(),
            Some("https://wa.me/5511987654321")
        );
    }

    #[test]
    fn whatsapp_keeps_existing_country_code() {
        assert_eq!(
            whatsapp_url("+55 11 98765-4321", "").as_deref(),
            Some("https://wa.me/5511987654321")
        );
    }

    #[test]
    fn whatsapp_prefixes_local_numbers_from_area_code_55() {
        assert_eq!(
            whatsapp_url("(55) 99876-5432", "").as_deref(),
            Some("https://wa.me/5555998765432")
        );
    }

    #[test]
    fn whatsapp_encodes_prefilled_message() {
        assert_eq!(
            whatsapp_url("(11) 98765-4321", &booking_greeting("Maria")).as_deref(),
            Some(
                "https://wa.me/5511987654321?text=Ol%C3%A1%20Maria!%20Vi%20seu%20cart%C3%A3o%20no%20GroomerLink%20e%20gostaria%20de%20agendar%20um%20servi%C3%A7o."
            )
        );
    }

    #[test]
    fn whatsapp_encodes_reserved_characters_in_message() {
        assert_eq!(
            whatsapp_url("11987654321", "a&b=c?d#e").as_deref(),
            Some("https://wa.me/5511987654321?text=a%26b%3Dc%3Fd%23e")
        );
    }

    #[test]
    fn whatsapp_without_digits_is_none() {
        assert_eq!(whatsapp_url("--", "hello"), None);
    }

    #[test]
    fn instagram_strips_at_sign() {
        assert_eq!(
            instagram_url("@maria.pet").as_deref(),
            Some("https://instagram.com/maria.pet")
        );
        assert_eq!(instagram_url(" @ "), None);
    }
}
