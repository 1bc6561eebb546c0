//! Syntactic decomposition of IBAN strings.

use std::sync::LazyLock;

use regex::Regex;

use super::error::FormatError;
use super::types::Iban;

/// Grammar every IBAN string must satisfy: country code, check digits, BBAN.
pub const IBAN_GRAMMAR: &str = r"^([A-Z]{2})([0-9]{2})([A-Z0-9]+)$";

static IBAN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IBAN_GRAMMAR).expect("invalid IBAN grammar pattern"));

/// Split `raw` into country code, check digits and BBAN.
///
/// The input is matched verbatim: whitespace, lowercase letters and any
/// other deviation yield a [`FormatError`]. Strip human-friendly spacing
/// with [`compact`] first.
pub fn parse(raw: &str) -> Result<Iban, FormatError> {
    let captures = IBAN_PATTERN
        .captures(raw)
        .ok_or_else(|| FormatError::new(raw))?;

    Iban::new(&captures[1], &captures[2], &captures[3])
}

/// Remove every whitespace character, e.g. `"GB29 NWBK 6016"` → `"GB29NWBK6016"`.
pub fn compact(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_three_parts() {
        let iban = parse("NL02ABNA0123456789").unwrap();
        assert_eq!(iban.country_code(), "NL");
        assert_eq!(iban.check_digits(), "02");
        assert_eq!(iban.bban(), "ABNA0123456789");
    }

    #[test]
    fn non_digit_check_digits() {
        assert!(parse("NLXX0000001").is_err());
    }

    #[test]
    fn empty_input() {
        let err = parse("").unwrap_err();
        assert_eq!(err.input, "");
    }

    #[test]
    fn empty_bban() {
        assert!(parse("GB29").is_err());
    }

    #[test]
    fn lowercase_rejected() {
        assert!(parse("gb29NWBK60161331926819").is_err());
        assert!(parse("GB29nwbk60161331926819").is_err());
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        assert!(parse(" GB29NWBK60161331926819").is_err());
        assert!(parse("GB29 NWBK 6016 1331 9268 19").is_err());
        assert!(parse("GB29NWBK60161331926819\n").is_err());
    }

    #[test]
    fn unicode_digits_rejected() {
        assert!(parse("GB٢٩NWBK60161331926819").is_err());
    }

    #[test]
    fn single_letter_country() {
        assert!(parse("G129NWBK").is_err());
    }

    #[test]
    fn compact_strips_all_whitespace() {
        assert_eq!(
            compact(" GB29 NWBK\t6016 1331\n9268 19 "),
            "GB29NWBK60161331926819"
        );
        assert_eq!(compact(""), "");
    }
}
