//! IBAN parsing and validation.
//!
//! This module provides the IBAN value type, the parser, the per-country
//! rule registry and the validation engine (ISO 13616 structure with the
//! ISO 7064 MOD-97-10 checksum).

mod error;
mod modulo;
mod numeral;
mod parser;
mod registry;
mod types;
mod validation;

pub use error::*;
pub use modulo::mod97;
pub use numeral::{expand_numerals, numeral_value};
pub use parser::{IBAN_GRAMMAR, compact, parse};
pub use registry::{BUILTIN_RULES, BbanChecksum, CountryRule, Registry, RuleSpec};
pub use types::*;
pub use validation::*;
