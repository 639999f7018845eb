//! Email address record.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::codes::EmailType;
use crate::entity::{impl_domain_entity, DomainEntity};
use crate::schema::{
    Constraint, DtoSchema, FieldSpec, CREATED_DATE_FIELD, ID_FIELD, MODIFIED_DATE_FIELD,
};
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailAddressDto {
    #[validate(range(min = 0))]
    pub id: DbId,
    #[validate(email)]
    pub email_address: Option<String>,
    pub email_type: Option<EmailType>,
    pub created_date: Timestamp,
    pub modified_date: Option<Timestamp>,
}

impl Default for EmailAddressDto {
    fn default() -> Self {
        Self {
            id: 0,
            email_address: None,
            email_type: None,
            created_date: Utc::now(),
            modified_date: None,
        }
    }
}

impl EmailAddressDto {
    pub fn new(email_address: impl Into<String>, email_type: EmailType) -> Self {
        Self {
            email_address: Some(email_address.into()),
            email_type: Some(email_type),
            ..Self::default()
        }
    }
}

impl DtoSchema for EmailAddressDto {
    const ENTITY: &'static str = "EmailAddressDTO";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            ID_FIELD,
            FieldSpec::new("email_address", "emailAddress").with(&[Constraint::Email]),
            FieldSpec::new("email_type", "emailType"),
            CREATED_DATE_FIELD,
            MODIFIED_DATE_FIELD,
        ];
        FIELDS
    }
}

impl_domain_entity!(EmailAddressDto, "EmailAddressDTO");

pub trait EmailAddressView: DomainEntity {
    fn email_address(&self) -> Option<&str>;
    fn email_type(&self) -> Option<EmailType>;
}

impl EmailAddressView for EmailAddressDto {
    fn email_address(&self) -> Option<&str> {
        self.email_address.as_deref()
    }

    fn email_type(&self) -> Option<EmailType> {
        self.email_type
    }
}
