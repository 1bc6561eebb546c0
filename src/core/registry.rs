//! Per-country IBAN rules.
//!
//! Rules are plain data ([`RuleSpec`]); adding a country means adding a row
//! to [`BUILTIN_RULES`]. Patterns are compiled once, when the [`Registry`]
//! is built, and never mutated afterwards.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::error::RegistryError;
use super::modulo::mod97;

/// The country-local checksum requirement for a BBAN.
#[derive(Clone, Copy)]
pub enum BbanChecksum {
    /// The country defines no BBAN-local checksum.
    NotRequired,
    /// The country has a BBAN checksum that is not implemented yet.
    /// Always passes.
    Unimplemented,
    /// A verified checksum predicate over the BBAN.
    Check(fn(&str) -> bool),
}

impl BbanChecksum {
    /// Whether `bban` passes this requirement.
    pub fn verify(&self, bban: &str) -> bool {
        match self {
            Self::NotRequired | Self::Unimplemented => true,
            Self::Check(predicate) => predicate(bban),
        }
    }
}

impl fmt::Debug for BbanChecksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRequired => f.write_str("NotRequired"),
            Self::Unimplemented => f.write_str("Unimplemented"),
            Self::Check(_) => f.write_str("Check(..)"),
        }
    }
}

/// One row of a rule table, before its pattern is compiled.
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    pub country_code: &'static str,
    /// Length of the whole IBAN, country code and check digits included.
    pub length: usize,
    /// Structure of the BBAN, implicitly anchored at both ends.
    pub bban_pattern: &'static str,
    pub bban_checksum: BbanChecksum,
}

/// Built-in rule table.
///
/// BA: the Bosnian BBAN carries two check digits that supposedly follow a
/// variant of MOD-97-10, but neither the plain remainder nor the `98 - r`
/// complement reproduces them (over the full BBAN, without the check
/// digits, or over the account number alone). Left unimplemented until a
/// verified description turns up.
pub static BUILTIN_RULES: &[RuleSpec] = &[
    RuleSpec {
        country_code: "AL",
        length: 28,
        bban_pattern: "[0-9]{8}[0-9A-Z]{16}",
        bban_checksum: BbanChecksum::NotRequired,
    },
    RuleSpec {
        country_code: "AT",
        length: 20,
        bban_pattern: "[0-9]{16}",
        bban_checksum: BbanChecksum::NotRequired,
    },
    RuleSpec {
        country_code: "BA",
        length: 20,
        bban_pattern: "[0-9]{16}",
        bban_checksum: BbanChecksum::Unimplemented,
    },
    RuleSpec {
        country_code: "BE",
        length: 16,
        bban_pattern: "[0-9]{12}",
        bban_checksum: BbanChecksum::Check(belgian_bban_checksum),
    },
    RuleSpec {
        country_code: "BR",
        length: 29,
        bban_pattern: "[0-9]{23}[A-Z][A-Z0-9]",
        bban_checksum: BbanChecksum::NotRequired,
    },
    RuleSpec {
        country_code: "CH",
        length: 21,
        bban_pattern: "[0-9]{17}",
        bban_checksum: BbanChecksum::NotRequired,
    },
    RuleSpec {
        country_code: "DE",
        length: 22,
        bban_pattern: "[0-9]{18}",
        bban_checksum: BbanChecksum::NotRequired,
    },
    RuleSpec {
        country_code: "FR",
        length: 27,
        bban_pattern: "[0-9]{10}[A-Z0-9]{11}[0-9]{2}",
        bban_checksum: BbanChecksum::NotRequired,
    },
    RuleSpec {
        country_code: "GB",
        length: 22,
        bban_pattern: "[A-Z]{4}[0-9]{14}",
        bban_checksum: BbanChecksum::NotRequired,
    },
    RuleSpec {
        country_code: "NL",
        length: 18,
        bban_pattern: "[A-Z]{4}[0-9]{10}",
        bban_checksum: BbanChecksum::NotRequired,
    },
];

/// Belgian BBAN: the last two digits are the first ten digits mod 97,
/// with a remainder of 0 written as 97.
fn belgian_bban_checksum(bban: &str) -> bool {
    if bban.len() != 12 || !bban.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let (body, check) = bban.split_at(10);
    let expected = match mod97(body) {
        0 => 97,
        r => r,
    };
    check.parse::<u32>().is_ok_and(|c| c == expected)
}

/// A compiled rule for one country.
#[derive(Debug, Clone)]
pub struct CountryRule {
    country_code: String,
    length: usize,
    bban_pattern: Regex,
    bban_checksum: BbanChecksum,
}

impl CountryRule {
    fn compile(spec: &RuleSpec) -> Result<Self, RegistryError> {
        let bban_pattern = Regex::new(&format!("^(?:{})$", spec.bban_pattern)).map_err(
            |source| RegistryError::Pattern {
                country: spec.country_code.to_string(),
                source,
            },
        )?;
        Ok(Self {
            country_code: spec.country_code.to_string(),
            length: spec.length,
            bban_pattern,
            bban_checksum: spec.bban_checksum,
        })
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Expected length of the full IBAN.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Whether the whole `bban` matches the country's structure.
    pub fn matches_bban(&self, bban: &str) -> bool {
        self.bban_pattern.is_match(bban)
    }

    pub fn bban_checksum(&self) -> BbanChecksum {
        self.bban_checksum
    }
}

/// Read-only lookup from country code to [`CountryRule`].
#[derive(Debug, Clone)]
pub struct Registry {
    rules: BTreeMap<String, CountryRule>,
}

static BUILTIN: LazyLock<Registry> = LazyLock::new(|| {
    Registry::from_specs(BUILTIN_RULES).expect("built-in IBAN rule table must compile")
});

impl Registry {
    /// Compile a rule table.
    ///
    /// Fails on the first malformed pattern or repeated country code.
    pub fn from_specs(specs: &[RuleSpec]) -> Result<Self, RegistryError> {
        let mut rules = BTreeMap::new();
        for spec in specs {
            if rules.contains_key(spec.country_code) {
                return Err(RegistryError::DuplicateCountry(
                    spec.country_code.to_string(),
                ));
            }
            rules.insert(spec.country_code.to_string(), CountryRule::compile(spec)?);
        }
        Ok(Self { rules })
    }

    /// The process-wide registry built from [`BUILTIN_RULES`].
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// Look up the rule for an exact (uppercase) country code.
    pub fn get(&self, country_code: &str) -> Option<&CountryRule> {
        self.rules.get(country_code)
    }

    /// Supported country codes, sorted.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
