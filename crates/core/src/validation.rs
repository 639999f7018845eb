//! Custom field validators referenced from `#[validate(custom(...))]`.
//!
//! The DTOs only declare constraints; nothing here runs on assignment.
//! Callers check a whole entity with [`validate_entity`].

use std::sync::LazyLock;

use regex::Regex;
use validator::{Validate, ValidationError};

use crate::error::CoreError;

static US_ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("valid regex"));

static CA_POSTAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ABCEGHJ-NPRSTVXY]\d[ABCEGHJ-NPRSTV-Z] ?\d[ABCEGHJ-NPRSTV-Z]\d$")
        .expect("valid regex")
});

static MX_POSTAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}$").expect("valid regex"));

/// Digits with optional leading `+` and common separators.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9 ().\-]{7,20}$").expect("valid regex"));

static COUNTRY_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}$").expect("valid regex"));

/// Minimum digit count for a dialable number once separators are stripped.
const MIN_PHONE_DIGITS: usize = 7;

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// A GUID in any of the hyphenated, simple, braced or URN forms.
pub fn validate_guid(value: &str) -> Result<(), ValidationError> {
    uuid::Uuid::try_parse(value)
        .map(|_| ())
        .map_err(|_| invalid("guid", "Value must be a valid GUID"))
}

/// `12345` or `12345-6789`.
pub fn validate_us_zip_code(value: &str) -> Result<(), ValidationError> {
    if US_ZIP_RE.is_match(value) {
        Ok(())
    } else {
        Err(invalid("us_zip_code", "ZIP code must be 12345 or 12345-6789"))
    }
}

/// `A1A 1A1`, with or without the space. Letters D, F, I, O, Q, U never
/// appear, and W, Z never lead.
pub fn validate_ca_postal_code(value: &str) -> Result<(), ValidationError> {
    if CA_POSTAL_RE.is_match(&value.to_ascii_uppercase()) {
        Ok(())
    } else {
        Err(invalid("ca_postal_code", "Postal code must look like A1A 1A1"))
    }
}

/// Five digits.
pub fn validate_mx_postal_code(value: &str) -> Result<(), ValidationError> {
    if MX_POSTAL_RE.is_match(value) {
        Ok(())
    } else {
        Err(invalid("mx_postal_code", "Código postal must be five digits"))
    }
}

pub fn validate_phone_number(value: &str) -> Result<(), ValidationError> {
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if PHONE_RE.is_match(value) && digits >= MIN_PHONE_DIGITS {
        Ok(())
    } else {
        Err(invalid("phone_number", "Phone number is not dialable"))
    }
}

/// Upper-case ISO 3166-1 alpha-2.
pub fn validate_country_code(value: &str) -> Result<(), ValidationError> {
    if COUNTRY_CODE_RE.is_match(value) {
        Ok(())
    } else {
        Err(invalid("country_code", "Country must be an ISO 3166-1 alpha-2 code"))
    }
}

/// Run every declared constraint on `entity`, nested collections included.
pub fn validate_entity<T: Validate + ?Sized>(entity: &T) -> Result<(), CoreError> {
    entity.validate().map_err(CoreError::from)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn guid_accepts_standard_forms() {
        assert!(validate_guid("67e55044-10b1-426f-9247-bb680e5fe0c8").is_ok());
        assert!(validate_guid("67e5504410b1426f9247bb680e5fe0c8").is_ok());
        assert!(validate_guid("{67e55044-10b1-426f-9247-bb680e5fe0c8}").is_ok());
    }

    #[test]
    fn guid_rejects_garbage() {
        let err = validate_guid("not-a-guid").unwrap_err();
        assert_eq!(err.code, "guid");
        assert!(validate_guid("").is_err());
    }

    #[test]
    fn us_zip_code_formats() {
        assert!(validate_us_zip_code("90210").is_ok());
        assert!(validate_us_zip_code("90210-1234").is_ok());
        assert!(validate_us_zip_code("9021").is_err());
        assert!(validate_us_zip_code("90210-12").is_err());
        assert!(validate_us_zip_code("ABCDE").is_err());
    }

    #[test]
    fn ca_postal_code_formats() {
        assert!(validate_ca_postal_code("K1A 0B1").is_ok());
        assert!(validate_ca_postal_code("k1a0b1").is_ok());
        // W never leads, D never appears.
        assert!(validate_ca_postal_code("W1A 0B1").is_err());
        assert!(validate_ca_postal_code("K1D 0B1").is_err());
        assert!(validate_ca_postal_code("12345").is_err());
    }

    #[test]
    fn mx_postal_code_formats() {
        assert!(validate_mx_postal_code("06600").is_ok());
        assert!(validate_mx_postal_code("0660").is_err());
        assert!(validate_mx_postal_code("066000").is_err());
    }

    #[test]
    fn phone_number_formats() {
        assert!(validate_phone_number("+1 (555) 123-4567").is_ok());
        assert!(validate_phone_number("555.123.4567").is_ok());
        assert!(validate_phone_number("12345").is_err());
        assert!(validate_phone_number("call me maybe").is_err());
        // Long enough, but mostly separators.
        assert!(validate_phone_number("(((---)))").is_err());
    }

    #[test]
    fn country_code_formats() {
        assert!(validate_country_code("US").is_ok());
        assert!(validate_country_code("us").is_err());
        assert!(validate_country_code("USA").is_err());
    }

    #[derive(Validate)]
    struct Probe {
        #[validate(range(min = 0))]
        id: i64,
    }

    #[test]
    fn validate_entity_maps_to_core_error() {
        assert!(validate_entity(&Probe { id: 3 }).is_ok());
        let err = validate_entity(&Probe { id: -1 }).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("id"));
    }
}
