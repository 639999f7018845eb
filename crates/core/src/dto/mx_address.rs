//! Mexican postal address.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::codes::{AddressType, MxState};
use crate::dto::address::AddressView;
use crate::entity::impl_domain_entity;
use crate::schema::{
    format, max_len, DtoSchema, FieldSpec, CREATED_DATE_FIELD, ID_FIELD, MODIFIED_DATE_FIELD,
    NON_NEGATIVE,
};
use crate::types::{DbId, Timestamp};
use crate::validation::validate_mx_postal_code;

pub const MX_COUNTRY: &str = "Mexico";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct MxAddressDto {
    #[validate(range(min = 0))]
    pub id: DbId,
    #[validate(length(max = 100))]
    pub street1: Option<String>,
    #[validate(length(max = 100))]
    pub street2: Option<String>,
    /// Neighborhood. Part of most Mexican delivery addresses.
    #[validate(length(max = 100))]
    pub colonia: Option<String>,
    #[validate(length(max = 100))]
    pub city: Option<String>,
    pub state: Option<MxState>,
    #[validate(custom(function = "validate_mx_postal_code"))]
    pub postal_code: Option<String>,
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

impl Default for MxAddressDto {
    fn default() -> Self {
        Self {
            id: 0,
            street1: None,
            street2: None,
            colonia: None,
            city: None,
            state: None,
            postal_code: None,
            country: MX_COUNTRY.to_string(),
            address_type: None,
            is_primary: false,
            linked_entity_id: None,
            linked_entity_type: None,
            created_date: Utc::now(),
            modified_date: None,
        }
    }
}

impl DtoSchema for MxAddressDto {
    const ENTITY: &'static str = "MXAddressDTO";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            ID_FIELD,
            FieldSpec::new("street1", "street1").with(&[max_len(100)]),
            FieldSpec::new("street2", "street2").with(&[max_len(100)]),
            FieldSpec::new("colonia", "colonia").with(&[max_len(100)]),
            FieldSpec::new("city", "city").with(&[max_len(100)]),
            FieldSpec::new("state", "state"),
            FieldSpec::new("postal_code", "postalCode").with(&[format("mx_postal_code")]),
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

impl_domain_entity!(MxAddressDto, "MXAddressDTO");

impl AddressView for MxAddressDto {
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
        self.state.map(MxState::code)
    }

    fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::DomainEntity;
    use crate::schema::testing::assert_default_matches_table;

    #[test]
    fn wire_shape_matches_table() {
        assert_default_matches_table::<MxAddressDto>();
    }

    #[test]
    fn defaults() {
        let address = MxAddressDto::default();
        assert_eq!(address.id, 0);
        assert_eq!(address.country, "Mexico");
        assert!(address.colonia.is_none());
        assert!(!address.is_primary);
    }

    #[test]
    fn postal_code_is_validated() {
        let mut address = MxAddressDto {
            colonia: Some("Juárez".into()),
            state: Some(MxState::CiudadDeMexico),
            postal_code: Some("06600".into()),
            ..MxAddressDto::default()
        };
        assert!(address.validate().is_ok());
        address.postal_code = Some("6600".into());
        assert!(address.validate().is_err());
    }

    #[test]
    fn to_json_is_not_implemented() {
        assert!(MxAddressDto::default().to_json().is_err());
    }
}
