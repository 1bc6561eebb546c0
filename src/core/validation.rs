use super::error::{IbanError, ValidationError};
use super::modulo::mod97;
use super::numeral::expand_numerals;
use super::parser::parse;
use super::registry::Registry;
use super::types::Iban;

impl Registry {
    /// Validate an IBAN against the rules of this registry.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    ///
    /// 1. country code present
    /// 2. BBAN present
    /// 3. country supported
    /// 4. total length
    /// 5. IBAN checksum (MOD-97-10)
    /// 6. BBAN structure
    /// 7. BBAN checksum, where the country defines one
    pub fn validate(&self, iban: &Iban) -> Result<(), ValidationError> {
        if iban.country_code().is_empty() {
            return Err(ValidationError::CountryCodeEmpty);
        }
        if iban.bban().is_empty() {
            return Err(ValidationError::BbanEmpty);
        }

        let rule = self
            .get(iban.country_code())
            .ok_or_else(|| ValidationError::UnsupportedCountry(iban.country_code().to_string()))?;

        if iban.len() != rule.length() {
            return Err(ValidationError::IncorrectLength {
                expected: rule.length(),
                actual: iban.len(),
            });
        }

        if !iban_checksum_valid(iban) {
            return Err(ValidationError::IncorrectIbanChecksum);
        }

        if !rule.matches_bban(iban.bban()) {
            return Err(ValidationError::IncorrectBbanFormat);
        }

        if !rule.bban_checksum().verify(iban.bban()) {
            return Err(ValidationError::IncorrectBbanChecksum);
        }

        Ok(())
    }

    /// Parse and validate in one step.
    pub fn check(&self, raw: &str) -> Result<Iban, IbanError> {
        let iban = parse(raw)?;
        self.validate(&iban)?;
        Ok(iban)
    }
}

/// Whether the check digits of `iban` satisfy ISO 7064 MOD-97-10.
///
/// The transposed IBAN (BBAN, country code, check digits) is expanded to
/// numerals and must leave a remainder of 1 when divided by 97.
///
/// # Panics
///
/// Never for an [`Iban`]: [`Iban::new`] only admits `0-9` and `A-Z`, all of
/// which the numeral codec converts.
pub fn iban_checksum_valid(iban: &Iban) -> bool {
    match expand_numerals(&iban.transposed()) {
        Ok(digits) => mod97(&digits) == 1,
        Err(err) => unreachable!("Iban holds only 0-9/A-Z: {err}"),
    }
}

/// Validate against the built-in registry.
pub fn validate(iban: &Iban) -> Result<(), ValidationError> {
    Registry::builtin().validate(iban)
}

/// Parse `raw` and validate it against the built-in registry.
///
/// `raw` must already be free of whitespace, see [`compact`](super::compact).
pub fn check(raw: &str) -> Result<Iban, IbanError> {
    Registry::builtin().check(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::{BbanChecksum, RuleSpec};

    fn iban(cc: &str, cd: &str, bban: &str) -> Iban {
        Iban::new(cc, cd, bban).unwrap()
    }

    #[test]
    fn checksum_handles_every_admitted_character() {
        let alphabet = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
        for c in alphabet.chars() {
            let bban = c.to_string();
            // one of 00..=99 is the right check value for each single-char BBAN
            let passing = (0..100)
                .filter(|cd| iban_checksum_valid(&iban("ZZ", &format!("{cd:02}"), &bban)))
                .count();
            assert!(passing >= 1, "{c}");
        }
        assert!(!iban_checksum_valid(&iban("", "00", "")));
        let _ = iban_checksum_valid(&iban("AZ", "99", alphabet));
    }

    #[test]
    fn valid_gb() {
        assert_eq!(validate(&iban("GB", "29", "NWBK60161331926819")), Ok(()));
    }

    #[test]
    fn reference_set_validates() {
        for raw in [
            "AL47212110090000000235698741",
            "AT611904300234573201",
            "BA391290079401028494",
            "BE68539007547034",
            "BR1800360305000010009795493C1",
            "CH9300762011623852957",
            "DE89370400440532013000",
            "FR1420041010050500013M02606",
            "GB29NWBK60161331926819",
            "NL91ABNA0417164300",
        ] {
            assert!(check(raw).is_ok(), "{raw} should validate");
        }
    }

    #[test]
    fn empty_country_code() {
        assert_eq!(
            validate(&iban("", "29", "NWBK60161331926819")),
            Err(ValidationError::CountryCodeEmpty)
        );
    }

    #[test]
    fn empty_country_code_checked_before_bban() {
        assert_eq!(
            validate(&iban("", "29", "")),
            Err(ValidationError::CountryCodeEmpty)
        );
    }

    #[test]
    fn empty_bban() {
        assert_eq!(
            validate(&iban("GB", "29", "")),
            Err(ValidationError::BbanEmpty)
        );
    }

    #[test]
    fn unsupported_country() {
        assert_eq!(
            validate(&iban("XX", "29", "NWBK60161331926819")),
            Err(ValidationError::UnsupportedCountry("XX".into()))
        );
    }

    #[test]
    fn length_checked_before_checksum() {
        // one digit short and therefore also a wrong checksum
        assert_eq!(
            validate(&iban("GB", "29", "NWBK6016133192681")),
            Err(ValidationError::IncorrectLength {
                expected: 22,
                actual: 21
            })
        );
    }

    #[test]
    fn wrong_check_digits() {
        assert_eq!(
            validate(&iban("GB", "92", "NWBK60161331926819")),
            Err(ValidationError::IncorrectIbanChecksum)
        );
    }

    #[test]
    fn checksum_checked_before_bban_format() {
        // correct length, wrong checksum, and digits where GB wants letters
        assert_eq!(
            validate(&iban("GB", "00", "123456789012345678")),
            Err(ValidationError::IncorrectIbanChecksum)
        );
    }

    #[test]
    fn bban_format() {
        // valid checksum, digits where GB expects the bank code letters
        assert_eq!(
            validate(&iban("GB", "25", "123456789012345678")),
            Err(ValidationError::IncorrectBbanFormat)
        );
        assert_eq!(
            check("AT9119043002345732AB"),
            Err(ValidationError::IncorrectBbanFormat.into())
        );
        assert_eq!(
            check("BR450036030500001000979549311"),
            Err(ValidationError::IncorrectBbanFormat.into())
        );
    }

    #[test]
    fn bban_checksum() {
        assert_eq!(
            check("BE41539007547035"),
            Err(ValidationError::IncorrectBbanChecksum.into())
        );
    }

    #[test]
    fn unimplemented_bban_checksum_passes() {
        assert!(check("BA391290079401028494").is_ok());
    }

    #[test]
    fn checksum_of_leading_zero_check_digits() {
        assert!(iban_checksum_valid(&iban("NL", "02", "ABNA0123456789")));
    }

    #[test]
    fn custom_registry() {
        let registry = Registry::from_specs(&[RuleSpec {
            country_code: "BE",
            length: 16,
            bban_pattern: "[0-9]{12}",
            bban_checksum: BbanChecksum::NotRequired,
        }])
        .unwrap();
        // BBAN checksum not required in this table
        assert!(registry.check("BE41539007547035").is_ok());
        assert_eq!(
            registry.check("GB29NWBK60161331926819"),
            Err(ValidationError::UnsupportedCountry("GB".into()).into())
        );
    }

    #[test]
    fn check_reports_format_errors() {
        assert!(matches!(check("NLXX0000001"), Err(IbanError::Format(_))));
        assert!(matches!(check(""), Err(IbanError::Format(_))));
    }
}
