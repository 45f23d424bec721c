// Raw-text normalization for cheque fields.
//
// Amounts and dates arrive as arbitrary text from manual edits, tabular
// import, or optical extraction. Nothing here is an error: a value that
// cannot be read becomes a zero amount or an invalid-date flag, and the
// record simply stops contributing to the aggregate.

use crate::calendar::jalali;
use shared::utils::normalize_digits;

/// A raw date string shorter than this is treated as still being typed and
/// is never flagged, only silently non-contributing ("1403/02" is 7 chars;
/// one more and the user has committed to a full date).
const MIN_PLAUSIBLE_DATE_LEN: usize = 8;

/// Validity classification of a raw date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateStatus {
    pub valid: bool,
    /// Worth warning the user about: long enough to be a deliberate entry,
    /// yet not a valid date.
    pub flag_invalid: bool,
}

/// Strips everything but digits (grouping separators included, Persian
/// digits normalized) and parses base 10. Empty or fully non-numeric input
/// is a zero amount, which is a legal placeholder. Saturates at `u64::MAX`.
pub fn parse_amount(raw: &str) -> u64 {
    normalize_digits(raw)
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u64, |acc, b| {
            acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
        })
}

pub fn classify_date(raw: &str) -> DateStatus {
    let valid = jalali::parse_date_string(raw).is_some();
    DateStatus {
        valid,
        flag_invalid: !valid && raw.chars().count() >= MIN_PLAUSIBLE_DATE_LEN,
    }
}

/// Reshapes a date entry as the user types: digits only, capped at 8
/// (`YYYYMMDD`), with `/` inserted ahead of the 5th and 7th digit so the
/// text converges toward the canonical form without typed separators.
pub fn shape_date_input(raw: &str) -> String {
    let mut shaped = String::with_capacity(10);
    for (i, c) in normalize_digits(raw)
        .chars()
        .filter(char::is_ascii_digit)
        .take(8)
        .enumerate()
    {
        if i == 4 || i == 6 {
            shaped.push('/');
        }
        shaped.push(c);
    }
    shaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_grouped_amounts() {
        assert_eq!(parse_amount("1000"), 1000);
        assert_eq!(parse_amount("1,234,567"), 1_234_567);
        assert_eq!(parse_amount("1.234.567"), 1_234_567);
        assert_eq!(parse_amount(" 2500 "), 2500);
    }

    #[test]
    fn parses_persian_digit_amounts() {
        assert_eq!(parse_amount("۱۲۵٬۰۰۰"), 125_000);
    }

    #[test]
    fn empty_or_non_numeric_amount_is_zero() {
        assert_eq!(parse_amount(""), 0);
        assert_eq!(parse_amount("abc"), 0);
        assert_eq!(parse_amount("-"), 0);
    }

    #[test]
    fn huge_amount_saturates() {
        assert_eq!(parse_amount("99999999999999999999999999"), u64::MAX);
    }

    #[test]
    fn classifies_valid_date() {
        let status = classify_date("1403/01/11");
        assert!(status.valid);
        assert!(!status.flag_invalid);
    }

    #[test]
    fn short_invalid_date_is_not_flagged() {
        // Mid-typing: invalid but below the plausible-length threshold.
        let status = classify_date("1403/0");
        assert!(!status.valid);
        assert!(!status.flag_invalid);
    }

    #[test]
    fn long_invalid_date_is_flagged() {
        let status = classify_date("1403/13/40");
        assert!(!status.valid);
        assert!(status.flag_invalid);

        // Exactly at the threshold.
        let status = classify_date("1403/13/");
        assert!(!status.valid);
        assert!(status.flag_invalid);
    }

    #[test]
    fn shapes_partial_input() {
        assert_eq!(shape_date_input("1"), "1");
        assert_eq!(shape_date_input("1403"), "1403");
        assert_eq!(shape_date_input("14030"), "1403/0");
        assert_eq!(shape_date_input("140302"), "1403/02");
        assert_eq!(shape_date_input("1403021"), "1403/02/1");
        assert_eq!(shape_date_input("14030211"), "1403/02/11");
    }

    #[test]
    fn shaping_strips_non_digits_and_caps_length() {
        assert_eq!(shape_date_input("1403/02/11"), "1403/02/11");
        assert_eq!(shape_date_input("1403ab02x11"), "1403/02/11");
        assert_eq!(shape_date_input("140302119999"), "1403/02/11");
        assert_eq!(shape_date_input("۱۴۰۳۰۲۱۱"), "1403/02/11");
        assert_eq!(shape_date_input(""), "");
    }
}
