use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::FormatError;

/// A syntactically decomposed IBAN.
///
/// Construction guarantees only the shape of each part: an empty or two-letter
/// uppercase country code, exactly two decimal check digits and an
/// uppercase alphanumeric BBAN. Whether the value is a *valid* IBAN is
/// decided by [`Registry::validate`](super::Registry::validate).
///
/// The check digits are kept as text so that e.g. `"02"` survives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IbanParts")]
pub struct Iban {
    country_code: String,
    check_digits: String,
    bban: String,
}

impl Iban {
    /// Assemble an IBAN from its three parts.
    ///
    /// The country code must be empty or two uppercase letters, the check
    /// digits exactly two ASCII digits and the BBAN uppercase alphanumeric.
    /// Empty country codes and BBANs are accepted here so that the
    /// validation engine can report them; every other accepted value prints
    /// back to a string that [`parse`](super::parse) accepts.
    pub fn new(
        country_code: impl Into<String>,
        check_digits: impl Into<String>,
        bban: impl Into<String>,
    ) -> Result<Self, FormatError> {
        let country_code = country_code.into();
        let check_digits = check_digits.into();
        let bban = bban.into();

        let well_formed = (country_code.is_empty() || country_code.len() == 2)
            && country_code.bytes().all(|b| b.is_ascii_uppercase())
            && check_digits.len() == 2
            && check_digits.bytes().all(|b| b.is_ascii_digit())
            && bban
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
        if !well_formed {
            return Err(FormatError::parts(format!(
                "{country_code}{check_digits}{bban}"
            )));
        }

        Ok(Self {
            country_code,
            check_digits,
            bban,
        })
    }

    /// ISO 3166-1 alpha-2 country code, e.g. `"GB"`.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// The two check digits, e.g. `"29"`.
    pub fn check_digits(&self) -> &str {
        &self.check_digits
    }

    /// Basic Bank Account Number.
    pub fn bban(&self) -> &str {
        &self.bban
    }

    /// Length of the electronic format (country code + check digits + BBAN).
    pub fn len(&self) -> usize {
        self.country_code.len() + self.check_digits.len() + self.bban.len()
    }

    /// Always false for values built by [`parse`](super::parse).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The checksum ordering: BBAN first, then country code and check digits.
    pub fn transposed(&self) -> String {
        format!("{}{}{}", self.bban, self.country_code, self.check_digits)
    }

    /// Human-readable form in blocks of four, e.g. `GB29 NWBK 6016 1331 9268 19`.
    pub fn print_format(&self) -> String {
        let electronic = self.to_string();
        let mut out = String::with_capacity(electronic.len() + electronic.len() / 4);
        for (i, c) in electronic.chars().enumerate() {
            if i > 0 && i % 4 == 0 {
                out.push(' ');
            }
            out.push(c);
        }
        out
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.country_code, self.check_digits, self.bban)
    }
}

impl FromStr for Iban {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parser::parse(s)
    }
}

/// Unchecked wire shape, only used to route deserialization through [`Iban::new`].
#[derive(Deserialize)]
struct IbanParts {
    country_code: String,
    check_digits: String,
    bban: String,
}

impl TryFrom<IbanParts> for Iban {
    type Error = FormatError;

    fn try_from(parts: IbanParts) -> Result<Self, Self::Error> {
        Iban::new(parts.country_code, parts.check_digits, parts.bban)
    }
}
