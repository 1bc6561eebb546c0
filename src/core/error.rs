use thiserror::Error;

/// Errors surfaced by the one-shot [`check`](super::check) entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IbanError {
    /// The raw string does not follow the IBAN grammar.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The string parsed, but failed one of the country or checksum rules.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// The input is not IBAN-shaped.
///
/// No attempt is made to report which part of the grammar failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("incorrect IBAN format: `{input}` {reason}")]
pub struct FormatError {
    /// The offending input, verbatim.
    pub input: String,
    /// What the input was measured against.
    pub reason: String,
}

impl FormatError {
    /// `input` does not match [`IBAN_GRAMMAR`](super::IBAN_GRAMMAR).
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            reason: format!("does not satisfy {}", super::parser::IBAN_GRAMMAR),
        }
    }

    /// Parts handed to [`Iban::new`](super::Iban::new) have the wrong shape.
    pub(crate) fn parts(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            reason: "is not an empty or two-letter country code, two check digits \
                     and an uppercase alphanumeric BBAN"
                .to_string(),
        }
    }
}

/// The single reason an IBAN was rejected by the validation engine.
///
/// Exactly one reason is reported per call: the first check that fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("country code is empty")]
    CountryCodeEmpty,

    #[error("bban is empty")]
    BbanEmpty,

    /// Syntactically fine, but no rule is registered for this country.
    #[error("country code {0} is not supported")]
    UnsupportedCountry(String),

    #[error("IBAN has the incorrect length for the specified country: expected {expected}, got {actual}")]
    IncorrectLength { expected: usize, actual: usize },

    #[error("IBAN has the incorrect checksum")]
    IncorrectIbanChecksum,

    #[error("IBAN has the incorrect BBAN format for the specified country")]
    IncorrectBbanFormat,

    #[error("IBAN has the incorrect BBAN checksum for the specified country")]
    IncorrectBbanChecksum,
}

/// A character outside `0-9`/`A-Z` was handed to the numeral codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumeralError {
    #[error("cannot convert {0:?} to a checksum numeral")]
    Unconvertible(char),
}

/// A country rule table could not be turned into a [`Registry`](super::Registry).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// A BBAN pattern failed to compile.
    #[error("invalid BBAN pattern for {country}: {source}")]
    Pattern {
        country: String,
        #[source]
        source: regex::Error,
    },

    /// Two rules were given for the same country.
    #[error("duplicate rule for country {0}")]
    DuplicateCountry(String),
}
