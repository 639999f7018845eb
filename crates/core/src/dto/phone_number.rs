//! Phone number record.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::codes::PhoneType;
use crate::entity::{impl_domain_entity, DomainEntity};
use crate::schema::{
    format, len_between, max_len, DtoSchema, FieldSpec, CREATED_DATE_FIELD, ID_FIELD,
    MODIFIED_DATE_FIELD, NON_NEGATIVE,
};
use crate::types::{DbId, Timestamp};
use crate::validation::{validate_country_code, validate_phone_number};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct PhoneNumberDto {
    #[validate(range(min = 0))]
    pub id: DbId,
    #[validate(length(max = 20), custom(function = "validate_phone_number"))]
    pub phone: Option<String>,
    pub phone_type: Option<PhoneType>,
    #[validate(length(equal = 2), custom(function = "validate_country_code"))]
    pub country: Option<String>,
    #[validate(range(min = 0))]
    pub linked_entity_id: Option<DbId>,
    #[validate(length(max = 100))]
    pub linked_entity_type: Option<String>,
    pub created_date: Timestamp,
    pub modified_date: Option<Timestamp>,
}

impl Default for PhoneNumberDto {
    fn default() -> Self {
        Self {
            id: 0,
            phone: None,
            phone_type: None,
            country: None,
            linked_entity_id: None,
            linked_entity_type: None,
            created_date: Utc::now(),
            modified_date: None,
        }
    }
}

impl PhoneNumberDto {
    pub fn new(phone: impl Into<String>, phone_type: PhoneType) -> Self {
        Self {
            phone: Some(phone.into()),
            phone_type: Some(phone_type),
            ..Self::default()
        }
    }
}

impl DtoSchema for PhoneNumberDto {
    const ENTITY: &'static str = "PhoneNumberDTO";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            ID_FIELD,
            FieldSpec::new("phone", "phone").with(&[max_len(20), format("phone_number")]),
            FieldSpec::new("phone_type", "phoneType"),
            FieldSpec::new("country", "country")
                .with(&[len_between(2, 2), format("country_code")]),
            FieldSpec::new("linked_entity_id", "linkedEntityId").with(&[NON_NEGATIVE]),
            FieldSpec::new("linked_entity_type", "linkedEntityType").with(&[max_len(100)]),
            CREATED_DATE_FIELD,
            MODIFIED_DATE_FIELD,
        ];
        FIELDS
    }
}

impl_domain_entity!(PhoneNumberDto, "PhoneNumberDTO", json);

pub trait PhoneNumberView: DomainEntity {
    fn phone(&self) -> Option<&str>;
    fn phone_type(&self) -> Option<PhoneType>;
    fn country(&self) -> Option<&str>;
}

impl PhoneNumberView for PhoneNumberDto {
    fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    fn phone_type(&self) -> Option<PhoneType> {
        self.phone_type
    }

    fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::testing::assert_default_matches_table;

    #[test]
    fn wire_shape_matches_table() {
        assert_default_matches_table::<PhoneNumberDto>();
    }

    #[test]
    fn to_json_uses_external_names() {
        let mut phone = PhoneNumberDto::new("+1 555 123 4567", PhoneType::Mobile);
        phone.id = 12;
        phone.country = Some("US".into());

        let json: serde_json::Value = serde_json::from_str(&phone.to_json().unwrap()).unwrap();
        assert_eq!(json["id"], 12);
        assert_eq!(json["phone"], "+1 555 123 4567");
        assert_eq!(json["phoneType"], "mobile");
        assert_eq!(json["country"], "US");
        assert!(json["linkedEntityId"].is_null());
    }

    #[test]
    fn deserializes_from_external_names() {
        let phone: PhoneNumberDto = serde_json::from_str(
            r#"{"id": 3, "phone": "555-123-4567", "phoneType": "work", "linkedEntityId": 8}"#,
        )
        .unwrap();
        assert_eq!(phone.id, 3);
        assert_eq!(phone.phone_type, Some(PhoneType::Work));
        assert_eq!(phone.linked_entity_id, Some(8));
        assert!(phone.modified_date.is_none());
    }

    #[test]
    fn validation_flags_bad_number_and_country() {
        let mut phone = PhoneNumberDto::new("12", PhoneType::Home);
        phone.country = Some("usa".into());
        let errors = phone.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("phone"));
        assert!(fields.contains_key("country"));
    }

    #[test]
    fn cast_round_trips_through_json() {
        let mut phone = PhoneNumberDto::new("555-123-4567", PhoneType::Fax);
        phone.id = 5;
        let copy: PhoneNumberDto = phone.cast().unwrap();
        assert_eq!(copy, phone);
    }
}
