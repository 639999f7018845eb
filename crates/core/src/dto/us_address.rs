//! United States postal address.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::codes::{AddressType, UsState};
use crate::dto::address::AddressView;
use crate::entity::impl_domain_entity;
use crate::schema::{
    format, max_len, DtoSchema, FieldSpec, CREATED_DATE_FIELD, ID_FIELD, MODIFIED_DATE_FIELD,
    NON_NEGATIVE,
};
use crate::types::{DbId, Timestamp};
use crate::validation::validate_us_zip_code;

pub const US_COUNTRY: &str = "United States";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UsAddressDto {
    #[validate(range(min = 0))]
    pub id: DbId,
    #[validate(length(max = 100))]
    pub street1: Option<String>,
    #[validate(length(max = 100))]
    pub street2: Option<String>,
    #[validate(length(max = 100))]
    pub city: Option<String>,
    pub state: Option<UsState>,
    #[validate(custom(function = "validate_us_zip_code"))]
    pub zip_code: Option<String>,
    pub country: String,
    pub address_type: Option<AddressType>,
    pub is_primary: bool,
    #[validate(range(min = 0))]
    pub linked_entity_id: Option<DbId>,
    #[validate(length(max = 100))]
    pub linked_entity_type: Option<String>,
    pub created_date: Timestamp,
    pub modified_date: Option<Timestamp>,
}

impl Default for UsAddressDto {
    fn default() -> Self {
        Self {
            id: 0,
            street1: None,
            street2: None,
            city: None,
            state: None,
            zip_code: None,
            country: US_COUNTRY.to_string(),
            address_type: None,
            is_primary: false,
            linked_entity_id: None,
            linked_entity_type: None,
            created_date: Utc::now(),
            modified_date: None,
        }
    }
}

impl DtoSchema for UsAddressDto {
    const ENTITY: &'static str = "USAddressDTO";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            ID_FIELD,
            FieldSpec::new("street1", "street1").with(&[max_len(100)]),
            FieldSpec::new("street2", "street2").with(&[max_len(100)]),
            FieldSpec::new("city", "city").with(&[max_len(100)]),
            FieldSpec::new("state", "state"),
            FieldSpec::new("zip_code", "zipCode").with(&[format("us_zip_code")]),
            FieldSpec::new("country", "country"),
            FieldSpec::new("address_type", "addressType"),
            FieldSpec::new("is_primary", "isPrimary"),
            FieldSpec::new("linked_entity_id", "linkedEntityId").with(&[NON_NEGATIVE]),
            FieldSpec::new("linked_entity_type", "linkedEntityType").with(&[max_len(100)]),
            CREATED_DATE_FIELD,
            MODIFIED_DATE_FIELD,
        ];
        FIELDS
    }
}

impl_domain_entity!(UsAddressDto, "USAddressDTO", json);

impl AddressView for UsAddressDto {
    fn street1(&self) -> Option<&str> {
        self.street1.as_deref()
    }

    fn street2(&self) -> Option<&str> {
        self.street2.as_deref()
    }

    fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    fn region_code(&self) -> Option<&'static str> {
        self.state.map(UsState::code)
    }

    fn postal_code(&self) -> Option<&str> {
        self.zip_code.as_deref()
    }

    fn country(&self) -> &str {
        &self.country
    }

    fn address_type(&self) -> Option<AddressType> {
        self.address_type
    }

    fn is_primary(&self) -> bool {
        self.is_primary
    }
}
