//! # ibancheck
//!
//! IBAN parsing and validation: the ISO 7064 MOD-97-10 checksum plus
//! per-country rules for total length, BBAN structure and, where the
//! country defines one, the BBAN-local checksum.
//!
//! Checksum arithmetic never leaves the decimal string domain, so IBANs of
//! any length are handled without big-integer types.
//!
//! ## Quick Start
//!
//! ```rust
//! use ibancheck::core::*;
//!
//! let iban = parse("GB29NWBK60161331926819").unwrap();
//! assert_eq!(iban.country_code(), "GB");
//! assert_eq!(iban.check_digits(), "29");
//! assert!(validate(&iban).is_ok());
//!
//! let wrong = parse("GB92NWBK60161331926819").unwrap();
//! assert_eq!(validate(&wrong), Err(ValidationError::IncorrectIbanChecksum));
//!
//! // human-friendly spacing is a boundary concern
//! assert!(check(&compact("GB29 NWBK 6016 1331 9268 19")).is_ok());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | IBAN type, parser, country registry, validation |
//! | `server` | HTTP service (`GET /v1/iban/{iban}/validate`) and the `ibancheck` binary |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "server")]
pub mod server;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
