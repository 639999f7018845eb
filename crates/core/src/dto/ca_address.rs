//! Canadian postal address.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::codes::{AddressType, CaProvince};
use crate::dto::address::AddressView;
use crate::entity::impl_domain_entity;
use crate::schema::{
    format, max_len, DtoSchema, FieldSpec, CREATED_DATE_FIELD, ID_FIELD, MODIFIED_DATE_FIELD,
    NON_NEGATIVE,
};
use crate::types::{DbId, Timestamp};
use crate::validation::validate_ca_postal_code;

pub const CA_COUNTRY: &str = "Canada";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CaAddressDto {
    #[validate(range(min = 0))]
    pub id: DbId,
    #[validate(length(max = 100))]
    pub street1: Option<String>,
    #[validate(length(max = 100))]
    pub street2: Option<String>,
    #[validate(length(max = 100))]
    pub city: Option<String>,
    pub province: Option<CaProvince>,
    #[validate(custom(function = "validate_ca_postal_code"))]
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

impl Default for CaAddressDto {
    fn default() -> Self {
        Self {
            id: 0,
            street1: None,
            street2: None,
            city: None,
            province: None,
            postal_code: None,
            country: CA_COUNTRY.to_string(),
            address_type: None,
            is_primary: false,
            linked_entity_id: None,
            linked_entity_type: None,
            created_date: Utc::now(),
            modified_date: None,
        }
    }
}

impl DtoSchema for CaAddressDto {
    const ENTITY: &'static str = "CAAddressDTO";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            ID_FIELD,
            FieldSpec::new("street1", "street1").with(&[max_len(100)]),
            FieldSpec::new("street2", "street2").with(&[max_len(100)]),
            FieldSpec::new("city", "city").with(&[max_len(100)]),
            FieldSpec::new("province", "province"),
            FieldSpec::new("postal_code", "postalCode").with(&[format("ca_postal_code")]),
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

impl_domain_entity!(CaAddressDto, "CAAddressDTO");

impl AddressView for CaAddressDto {
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
        self.province.map(CaProvince::code)
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
    use assert_matches::assert_matches;

    use super::*;
    use crate::dto::us_address::UsAddressDto;
    use crate::entity::DomainEntity;
    use crate::error::CoreError;
    use crate::schema::testing::assert_default_matches_table;

    #[test]
    fn wire_shape_matches_table() {
        assert_default_matches_table::<CaAddressDto>();
    }

    #[test]
    fn country_defaults_to_canada() {
        assert_eq!(CaAddressDto::default().country, "Canada");
    }

    #[test]
    fn postal_code_is_validated() {
        let address = CaAddressDto {
            province: Some(CaProvince::Ontario),
            postal_code: Some("K1A 0B1".into()),
            ..CaAddressDto::default()
        };
        assert!(address.validate().is_ok());

        let address = CaAddressDto {
            postal_code: Some("90210".into()),
            ..CaAddressDto::default()
        };
        assert!(address.validate().is_err());
    }

    #[test]
    fn export_and_cast_are_not_implemented() {
        let address = CaAddressDto::default();
        assert_matches!(
            address.to_json(),
            Err(CoreError::NotImplemented { entity: "CAAddressDTO", operation: "to_json" })
        );
        assert_matches!(
            address.cast::<UsAddressDto>(),
            Err(CoreError::NotImplemented { operation: "cast", .. })
        );
    }

    #[test]
    fn serde_still_uses_external_names() {
        let address = CaAddressDto {
            province: Some(CaProvince::BritishColumbia),
            postal_code: Some("V6B 1A1".into()),
            ..CaAddressDto::default()
        };
        let json = serde_json::to_value(&address).unwrap();
        assert_eq!(json["province"], "BC");
        assert_eq!(json["postalCode"], "V6B 1A1");
    }
}
