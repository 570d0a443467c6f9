//! Outbound contact links built from the configured phone number.

use crate::config;

pub const DEFAULT_WHATSAPP_MESSAGE: &str =
    "Hi Dodgy Garage, I'd like to inquire about your DPF cleaning service.";

/// `tel:` URI with every non-digit stripped. A leading `+` survives so
/// international numbers still dial.
pub fn tel_uri(phone: &str) -> String {
    let trimmed = phone.trim();
    let mut uri = String::from("tel:");
    if trimmed.starts_with('+') {
        uri.push('+');
    }
    uri.extend(trimmed.chars().filter(char::is_ascii_digit));
    uri
}

/// Digits for international dialing. A leading `00` is the international
/// prefix and is dropped; a single leading trunk `0` becomes the country
/// code. Numbers already carrying the code are left alone.
pub fn international_digits(phone: &str, country_code: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if let Some(international) = digits.strip_prefix("00") {
        international.to_string()
    } else if let Some(local) = digits.strip_prefix('0') {
        format!("{}{}", country_code, local)
    } else {
        digits
    }
}

pub fn whatsapp_link(phone: &str, country_code: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        international_digits(phone, country_code),
        urlencoding::encode(message)
    )
}

/// Pre-filled enquiry text, optionally naming the city the visitor came from.
pub fn whatsapp_message(location: Option<&str>) -> String {
    match location {
        Some(city) => format!(
            "Hi {}, I'd like to inquire about your DPF cleaning service in {}.",
            config::BUSINESS_NAME,
            city
        ),
        None => DEFAULT_WHATSAPP_MESSAGE.to_string(),
    }
}

pub fn business_tel_uri() -> String {
    tel_uri(config::PHONE_DISPLAY)
}

pub fn business_whatsapp_link(location: Option<&str>) -> String {
    whatsapp_link(
        config::PHONE_DISPLAY,
        config::PHONE_COUNTRY_CODE,
        &whatsapp_message(location),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tel_uri_strips_spaces_and_punctuation() {
        assert_eq!(tel_uri("07983 361554"), "tel:07983361554");
        assert_eq!(tel_uri("(07983) 361-554"), "tel:07983361554");
        assert_eq!(tel_uri(" +44 7983 361554 "), "tel:+447983361554");
    }

    #[test]
    fn international_digits_replaces_trunk_zero() {
        assert_eq!(international_digits("07983 361554", "44"), "447983361554");
        assert_eq!(international_digits("+44 7983 361554", "44"), "447983361554");
        assert_eq!(international_digits("0044 7983 361554", "44"), "447983361554");
        assert_eq!(international_digits("00353 85 123 4567", "44"), "353851234567");
    }

    #[test]
    fn whatsapp_link_is_country_prefixed_and_encoded() {
        let link = whatsapp_link("07983 361554", "44", "Hi Dodgy Garage, I'd like a quote.");
        assert_eq!(
            link,
            "https://wa.me/447983361554?text=Hi%20Dodgy%20Garage%2C%20I%27d%20like%20a%20quote."
        );
    }

    #[test]
    fn business_links_are_deterministic() {
        assert_eq!(business_tel_uri(), business_tel_uri());
        assert_eq!(business_tel_uri(), "tel:07983361554");
        assert_eq!(
            business_whatsapp_link(None),
            "https://wa.me/447983361554?text=Hi%20Dodgy%20Garage%2C%20I%27d%20like%20to%20inquire%20about%20your%20DPF%20cleaning%20service."
        );
    }

    #[test]
    fn city_message_names_the_city() {
        let message = whatsapp_message(Some("Exeter"));
        assert!(message.ends_with("service in Exeter."));
        assert!(business_whatsapp_link(Some("Exeter")).ends_with("service%20in%20Exeter."));
    }
}
