//! Contact (person) DTO.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::codes::Pronouns;
use crate::de::null_as_default;
use crate::dto::address::{address_views, validate_addresses, AddressDto, AddressView};
use crate::dto::email_address::{EmailAddressDto, EmailAddressView};
use crate::dto::phone_number::{PhoneNumberDto, PhoneNumberView};
use crate::entity::{downcast_all, impl_domain_entity, DomainEntity};
use crate::error::CoreError;
use crate::schema::{
    format, max_len, Constraint, DtoSchema, FieldSpec, CREATED_DATE_FIELD, ID_FIELD,
    MODIFIED_DATE_FIELD,
};
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactDto {
    #[validate(range(min = 0))]
    pub id: DbId,
    #[validate(length(max = 100))]
    pub first_name: Option<String>,
    #[validate(length(max = 100))]
    pub middle_name: Option<String>,
    #[validate(length(max = 100))]
    pub last_name: Option<String>,
    pub pronouns: Option<Pronouns>,
    pub birth_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deceased_date: Option<Timestamp>,
    pub join_date: Option<Timestamp>,
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deceased: Option<bool>,
    pub is_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_super_user: Option<bool>,
    #[validate(nested)]
    #[serde(deserialize_with = "null_as_default")]
    pub emails: Vec<EmailAddressDto>,
    #[validate(nested)]
    #[serde(deserialize_with = "null_as_default")]
    pub phone_numbers: Vec<PhoneNumberDto>,
    #[validate(custom(function = "validate_addresses"))]
    #[serde(deserialize_with = "null_as_default")]
    pub addresses: Vec<AddressDto>,
    pub created_date: Timestamp,
    pub modified_date: Option<Timestamp>,
}

impl Default for ContactDto {
    fn default() -> Self {
        Self {
            id: 0,
            first_name: None,
            middle_name: None,
            last_name: None,
            pronouns: None,
            birth_date: None,
            deceased_date: None,
            join_date: None,
            is_active: None,
            is_deceased: None,
            is_admin: None,
            is_super_user: None,
            emails: Vec::new(),
            phone_numbers: Vec::new(),
            addresses: Vec::new(),
            created_date: Utc::now(),
            modified_date: None,
        }
    }
}

impl ContactDto {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            ..Self::default()
        }
    }

    /// First, middle and last name joined by single spaces, skipping blanks.
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.first_name, &self.middle_name, &self.last_name]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        (!parts.is_empty()).then(|| parts.join(" "))
    }
}

impl DtoSchema for ContactDto {
    const ENTITY: &'static str = "ContactDTO";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            ID_FIELD,
            FieldSpec::new("first_name", "firstName").with(&[max_len(100)]),
            FieldSpec::new("middle_name", "middleName").with(&[max_len(100)]),
            FieldSpec::new("last_name", "lastName").with(&[max_len(100)]),
            FieldSpec::new("pronouns", "pronouns"),
            FieldSpec::new("birth_date", "birthDate"),
            FieldSpec::new("deceased_date", "deceasedDate").omit_when_none(),
            FieldSpec::new("join_date", "joinDate"),
            FieldSpec::new("is_active", "isActive"),
            FieldSpec::new("is_deceased", "isDeceased").omit_when_none(),
            FieldSpec::new("is_admin", "isAdmin"),
            FieldSpec::new("is_super_user", "isSuperUser").omit_when_none(),
            FieldSpec::new("emails", "emails").with(&[Constraint::Nested]),
            FieldSpec::new("phone_numbers", "phoneNumbers").with(&[Constraint::Nested]),
            FieldSpec::new("addresses", "addresses").with(&[format("addresses")]),
            CREATED_DATE_FIELD,
            MODIFIED_DATE_FIELD,
        ];
        FIELDS
    }
}

impl_domain_entity!(ContactDto, "ContactDTO");

pub trait ContactView: DomainEntity {
    fn full_name(&self) -> Option<String>;
    fn pronouns(&self) -> Option<Pronouns>;
    fn emails(&self) -> Vec<&dyn EmailAddressView>;
    fn set_emails(&mut self, emails: Vec<Box<dyn EmailAddressView>>) -> Result<(), CoreError>;
    fn phone_numbers(&self) -> Vec<&dyn PhoneNumberView>;
    fn set_phone_numbers(
        &mut self,
        phone_numbers: Vec<Box<dyn PhoneNumberView>>,
    ) -> Result<(), CoreError>;
    fn addresses(&self) -> Vec<&dyn AddressView>;
    fn set_addresses(&mut self, addresses: Vec<Box<dyn AddressView>>) -> Result<(), CoreError>;
}

impl ContactView for ContactDto {
    fn full_name(&self) -> Option<String> {
        ContactDto::full_name(self)
    }

    fn pronouns(&self) -> Option<Pronouns> {
        self.pronouns
    }

    fn emails(&self) -> Vec<&dyn EmailAddressView> {
        self.emails.iter().map(|e| e as &dyn EmailAddressView).collect()
    }

    fn set_emails(&mut self, emails: Vec<Box<dyn EmailAddressView>>) -> Result<(), CoreError> {
        self.emails = downcast_all(emails, EmailAddressDto::ENTITY)?;
        Ok(())
    }

    fn phone_numbers(&self) -> Vec<&dyn PhoneNumberView> {
        self.phone_numbers
            .iter()
            .map(|p| p as &dyn PhoneNumberView)
            .collect()
    }

    fn set_phone_numbers(
        &mut self,
        phone_numbers: Vec<Box<dyn PhoneNumberView>>,
    ) -> Result<(), CoreError> {
        self.phone_numbers = downcast_all(phone_numbers, PhoneNumberDto::ENTITY)?;
        Ok(())
    }

    fn addresses(&self) -> Vec<&dyn AddressView> {
        address_views(&self.addresses)
    }

    fn set_addresses(&mut self, addresses: Vec<Box<dyn AddressView>>) -> Result<(), CoreError> {
        self.addresses = AddressDto::from_views(addresses)?;
        Ok(())
    }
}
