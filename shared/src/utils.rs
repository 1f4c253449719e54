//! # Shared Utility Functions
//!
//! Display helpers for the customer document.
//!
//! ## Card and Account Masking
//!
//! - [`format_card_number`] - Group card digits in blocks of four
//! - [`mask_card_number`] - Hide everything but the last four card digits
//! - [`mask_account_number`] - Keep the first and last four characters of an account number
//! - [`last_four`] - Short account label for selectors and headings
//!
//! ## Dates
//!
//! - [`parse_timestamp`] - Lenient parser for the API's date strings
//! - [`format_expiration`] - Card expiry as `MM/YY`
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{mask_account_number, format_card_number};
//!
//! assert_eq!(mask_account_number("UA213223130000026007233566001"), "UA21****6001");
//! assert_eq!(format_card_number("4441111122223333"), "4441 1111 2222 3333");
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Insert a space after every run of four digits that is followed by another digit.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_card_number;
///
/// assert_eq!(format_card_number("4441111122223333"), "4441 1111 2222 3333");
/// assert_eq!(format_card_number("123456"), "1234 56");
/// ```
pub fn format_card_number(number: &str) -> String {
    let mut formatted = String::with_capacity(number.len() + number.len() / 4);
    let mut run = 0usize;
    let mut chars = number.chars().peekable();

    while let Some(c) = chars.next() {
        formatted.push(c);
        if c.is_ascii_digit() {
            run += 1;
            let next_is_digit = chars.peek().is_some_and(|n| n.is_ascii_digit());
            if run == 4 && next_is_digit {
                formatted.push(' ');
                run = 0;
            }
        } else {
            run = 0;
        }
    }

    formatted
}

/// Mask a card number down to its last four characters.
///
/// ```rust
/// use shared::utils::mask_card_number;
///
/// assert_eq!(mask_card_number("4441111122223333"), "**** **** **** 3333");
/// ```
pub fn mask_card_number(number: &str) -> String {
    format!("**** **** **** {}", last_four(number))
}

/// Mask the middle of an account number.
///
/// Numbers of eight characters or fewer are shown as-is.
pub fn mask_account_number(number: &str) -> String {
    let chars: Vec<char> = number.chars().collect();
    if chars.len() <= 8 {
        return number.to_string();
    }

    let prefix: String = chars[..4].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{}****{}", prefix, suffix)
}

/// Trailing four characters (the whole string when shorter).
pub fn last_four(value: &str) -> String {
    let count = value.chars().count();
    value.chars().skip(count.saturating_sub(4)).collect()
}

/// Parse the API's date strings.
///
/// Accepts RFC 3339 (normalised to UTC), ISO local date-times with or
/// without fractional seconds, and plain `YYYY-MM-DD` dates (midnight).
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Card expiry as `MM/YY`; unreadable input is returned unchanged.
///
/// ```rust
/// use shared::utils::format_expiration;
///
/// assert_eq!(format_expiration("2029-08-31"), "08/29");
/// ```
pub fn format_expiration(value: &str) -> String {
    match parse_timestamp(value) {
        Some(dt) => dt.format("%m/%y").to_string(),
        None => value.to_string(),
    }
}

/// Upper-cased initials for the avatar badge.
pub fn initials(first_name: &str, last_name: &str) -> String {
    first_name
        .chars()
        .take(1)
        .chain(last_name.chars().take(1))
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_card_number() {
        assert_eq!(format_card_number("4441111122223333"), "4441 1111 2222 3333");
        assert_eq!(format_card_number("1234"), "1234");
        assert_eq!(format_card_number(""), "");
    }

    #[test]
    fn test_mask_card_number_short_input() {
        assert_eq!(mask_card_number("12"), "**** **** **** 12");
    }

    #[test]
    fn test_mask_account_number() {
        assert_eq!(mask_account_number("12345678"), "12345678");
        assert_eq!(mask_account_number("123456789"), "1234****6789");
    }

    #[test]
    fn test_last_four() {
        assert_eq!(last_four("UA213223130000026007233566001"), "6001");
        assert_eq!(last_four("abc"), "abc");
    }

    #[test]
    fn test_parse_timestamp_variants() {
        let utc = parse_timestamp("2024-05-01T10:15:30Z").unwrap();
        assert_eq!(utc.to_string(), "2024-05-01 10:15:30");

        let offset = parse_timestamp("2024-05-01T12:15:30+02:00").unwrap();
        assert_eq!(offset, utc);

        let fractional = parse_timestamp("2024-05-01T10:15:30.123456").unwrap();
        assert_eq!(fractional.format("%H:%M:%S").to_string(), "10:15:30");

        let date_only = parse_timestamp("2024-05-01").unwrap();
        assert_eq!(date_only.to_string(), "2024-05-01 00:00:00");

        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_format_expiration_unparsable() {
        assert_eq!(format_expiration("soon"), "soon");
        assert_eq!(format_expiration("2030-01-01T00:00:00"), "01/30");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("olena", "shevchenko"), "OS");
        assert_eq!(initials("", "Bondar"), "B");
    }
}
