use serde::Serialize;

use crate::core::Iban;

/// Body of every `/v1/iban` response.
///
/// ```json
/// {"error": null, "is_valid": true, "iban": {"country_code": "GB", "check_digits": "29", "bban": "NWBK60161331926819"}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResponse {
    pub error: Option<String>,
    pub is_valid: bool,
    pub iban: Option<Iban>,
}

impl ValidationResponse {
    pub fn valid(iban: Iban) -> Self {
        Self {
            error: None,
            is_valid: true,
            iban: Some(iban),
        }
    }

    /// The input parsed but was rejected; the parsed parts are echoed back.
    pub fn invalid(iban: Iban, error: impl ToString) -> Self {
        Self {
            error: Some(error.to_string()),
            is_valid: false,
            iban: Some(iban),
        }
    }

    /// The request could not be turned into an IBAN at all.
    pub fn failed(error: impl ToString) -> Self {
        Self {
            error: Some(error.to_string()),
            is_valid: false,
            iban: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ValidationError;

    #[test]
    fn valid_shape() {
        let iban = Iban::new("GB", "29", "NWBK60161331926819").unwrap();
        let json = serde_json::to_value(ValidationResponse::valid(iban)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "error": null,
                "is_valid": true,
                "iban": {"country_code": "GB", "check_digits": "29", "bban": "NWBK60161331926819"},
            })
        );
    }

    #[test]
    fn invalid_keeps_iban() {
        let iban = Iban::new("GB", "92", "NWBK60161331926819").unwrap();
        let resp = ValidationResponse::invalid(iban, ValidationError::IncorrectIbanChecksum);
        assert!(!resp.is_valid);
        assert_eq!(resp.error.as_deref(), Some("IBAN has the incorrect checksum"));
        assert!(resp.iban.is_some());
    }

    #[test]
    fn failed_has_no_iban() {
        let json = serde_json::to_value(ValidationResponse::failed("nope")).unwrap();
        assert_eq!(json["iban"], serde_json::Value::Null);
        assert_eq!(json["is_valid"], false);
    }
}
