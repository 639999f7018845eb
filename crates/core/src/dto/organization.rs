//! Organization DTO.
//!
//! One of the entities whose JSON export and cast are finished.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::de::null_as_default;
use crate::dto::account::{AccountDto, AccountView};
use crate::dto::address::{address_views, validate_addresses, AddressDto, AddressView};
use crate::dto::contact::{ContactDto, ContactView};
use crate::dto::email_address::{EmailAddressDto, EmailAddressView};
use crate::dto::phone_number::{PhoneNumberDto, PhoneNumberView};
use crate::dto::project::{ProjectDto, ProjectView};
use crate::dto::user::{UserDto, UserView};
use crate::entity::{downcast_all, impl_domain_entity, DomainEntity};
use crate::error::CoreError;
use crate::schema::{
    format, len_between, Constraint, DtoSchema, FieldSpec, CREATED_DATE_FIELD, ID_FIELD,
    MODIFIED_DATE_FIELD,
};
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizationDto {
    #[validate(range(min = 0))]
    pub id: DbId,
    #[validate(length(min = 1, max = 100))]
    pub organization_name: String,
    #[validate(nested)]
    #[serde(deserialize_with = "null_as_default")]
    pub emails: Vec<EmailAddressDto>,
    #[validate(nested)]
    #[serde(deserialize_with = "null_as_default")]
    pub phone_numbers: Vec<PhoneNumberDto>,
    #[validate(custom(function = "validate_addresses"))]
    #[serde(deserialize_with = "null_as_default")]
    pub addresses: Vec<AddressDto>,
    #[validate(nested)]
    #[serde(deserialize_with = "null_as_default")]
    pub members: Vec<ContactDto>,
    #[validate(nested)]
    #[serde(deserialize_with = "null_as_default")]
    pub contacts: Vec<ContactDto>,
    #[validate(nested)]
    #[serde(deserialize_with = "null_as_default")]
    pub accounts: Vec<AccountDto>,
    #[validate(nested)]
    #[serde(deserialize_with = "null_as_default")]
    pub users: Vec<UserDto>,
    #[validate(nested)]
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<ProjectDto>,
    pub is_active: bool,
    pub created_date: Timestamp,
    pub modified_date: Option<Timestamp>,
}

impl Default for OrganizationDto {
    fn default() -> Self {
        Self {
            id: 0,
            organization_name: String::new(),
            emails: Vec::new(),
            phone_numbers: Vec::new(),
            addresses: Vec::new(),
            members: Vec::new(),
            contacts: Vec::new(),
            accounts: Vec::new(),
            users: Vec::new(),
            projects: Vec::new(),
            is_active: true,
            created_date: Utc::now(),
            modified_date: None,
        }
    }
}

impl OrganizationDto {
    pub fn new(organization_name: impl Into<String>) -> Self {
        Self {
            organization_name: organization_name.into(),
            ..Self::default()
        }
    }
}

impl DtoSchema for OrganizationDto {
    const ENTITY: &'static str = "OrganizationDTO";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            ID_FIELD,
            FieldSpec::new("organization_name", "organizationName")
                .required()
                .with(&[len_between(1, 100)]),
            FieldSpec::new("emails", "emails").with(&[Constraint::Nested]),
            FieldSpec::new("phone_numbers", "phoneNumbers").with(&[Constraint::Nested]),
            FieldSpec::new("addresses", "addresses").with(&[format("addresses")]),
            FieldSpec::new("members", "members").with(&[Constraint::Nested]),
            FieldSpec::new("contacts", "contacts").with(&[Constraint::Nested]),
            FieldSpec::new("accounts", "accounts").with(&[Constraint::Nested]),
            FieldSpec::new("users", "users").with(&[Constraint::Nested]),
            FieldSpec::new("projects", "projects").with(&[Constraint::Nested]),
            FieldSpec::new("is_active", "isActive"),
            CREATED_DATE_FIELD,
            MODIFIED_DATE_FIELD,
        ];
        FIELDS
    }
}

impl_domain_entity!(OrganizationDto, "OrganizationDTO", json);

pub trait OrganizationView: DomainEntity {
    fn organization_name(&self) -> &str;
    fn is_active(&self) -> bool;
    fn emails(&self) -> Vec<&dyn EmailAddressView>;
    fn phone_numbers(&self) -> Vec<&dyn PhoneNumberView>;
    fn addresses(&self) -> Vec<&dyn AddressView>;
    fn set_addresses(&mut self, addresses: Vec<Box<dyn AddressView>>) -> Result<(), CoreError>;
    fn members(&self) -> Vec<&dyn ContactView>;
    fn set_members(&mut self, members: Vec<Box<dyn ContactView>>) -> Result<(), CoreError>;
    fn contacts(&self) -> Vec<&dyn ContactView>;
    fn set_contacts(&mut self, contacts: Vec<Box<dyn ContactView>>) -> Result<(), CoreError>;
    fn accounts(&self) -> Vec<&dyn AccountView>;
    fn set_accounts(&mut self, accounts: Vec<Box<dyn AccountView>>) -> Result<(), CoreError>;
    fn users(&self) -> Vec<&dyn UserView>;
    fn set_users(&mut self, users: Vec<Box<dyn UserView>>) -> Result<(), CoreError>;
    fn projects(&self) -> Vec<&dyn ProjectView>;
    fn set_projects(&mut self, projects: Vec<Box<dyn ProjectView>>) -> Result<(), CoreError>;
}

impl OrganizationView for OrganizationDto {
    fn organization_name(&self) -> &str {
        &self.organization_name
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn emails(&self) -> Vec<&dyn EmailAddressView> {
        self.emails.iter().map(|e| e as &dyn EmailAddressView).collect()
    }

    fn phone_numbers(&self) -> Vec<&dyn PhoneNumberView> {
        self.phone_numbers
            .iter()
            .map(|p| p as &dyn PhoneNumberView)
            .collect()
    }

    fn addresses(&self) -> Vec<&dyn AddressView> {
        address_views(&self.addresses)
    }

    fn set_addresses(&mut self, addresses: Vec<Box<dyn AddressView>>) -> Result<(), CoreError> {
        self.addresses = AddressDto::from_views(addresses)?;
        Ok(())
    }

    fn members(&self) -> Vec<&dyn ContactView> {
        self.members.iter().map(|c| c as &dyn ContactView).collect()
    }

    fn set_members(&mut self, members: Vec<Box<dyn ContactView>>) -> Result<(), CoreError> {
        self.members = downcast_all(members, ContactDto::ENTITY)?;
        Ok(())
    }

    fn contacts(&self) -> Vec<&dyn ContactView> {
        self.contacts.iter().map(|c| c as &dyn ContactView).collect()
    }

    fn set_contacts(&mut self, contacts: Vec<Box<dyn ContactView>>) -> Result<(), CoreError> {
        self.contacts = downcast_all(contacts, ContactDto::ENTITY)?;
        Ok(())
    }

    fn accounts(&self) -> Vec<&dyn AccountView> {
        self.accounts.iter().map(|a| a as &dyn AccountView).collect()
    }

    fn set_accounts(&mut self, accounts: Vec<Box<dyn AccountView>>) -> Result<(), CoreError> {
        self.accounts = downcast_all(accounts, AccountDto::ENTITY)?;
        Ok(())
    }

    fn users(&self) -> Vec<&dyn UserView> {
        self.users.iter().map(|u| u as &dyn UserView).collect()
    }

    fn set_users(&mut self, users: Vec<Box<dyn UserView>>) -> Result<(), CoreError> {
        self.users = downcast_all(users, UserDto::ENTITY)?;
        Ok(())
    }

    fn projects(&self) -> Vec<&dyn ProjectView> {
        self.projects.iter().map(|p| p as &dyn ProjectView).collect()
    }

    fn set_projects(&mut self, projects: Vec<Box<dyn ProjectView>>) -> Result<(), CoreError> {
        self.projects = downcast_all(projects, ProjectDto::ENTITY)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::PhoneType;
    use crate::dto::us_address::UsAddressDto;
    use crate::schema::testing::assert_default_matches_table;

    fn acme() -> OrganizationDto {
        let mut org = OrganizationDto::new("Acme");
        org.id = 77;
        org.phone_numbers = vec![PhoneNumberDto::new("555-123-4567", PhoneType::Work)];
        org.addresses = vec![AddressDto::from(UsAddressDto {
            city: Some("Springfield".into()),
            ..UsAddressDto::default()
        })];
        org.members = vec![ContactDto::new("Wile", "Coyote")];
        org
    }

    #[test]
    fn defaults() {
        let before = Utc::now();
        let org = OrganizationDto::default();
        let after = Utc::now();

        assert_eq!(org.id, 0);
        assert!(org.is_active);
        assert!(org.members.is_empty());
        assert!(org.projects.is_empty());
        assert!(org.created_date >= before && org.created_date <= after);
        assert!(org.modified_date.is_none());
    }

    #[test]
    fn wire_shape_matches_table() {
        assert_default_matches_table::<OrganizationDto>();
    }

    #[test]
    fn null_lists_read_back_empty() {
        let org: OrganizationDto = serde_json::from_value(serde_json::json!({
            "organizationName": "Acme",
            "members": null,
            "contacts": null,
            "projects": null
        }))
        .unwrap();
        assert_eq!(org.organization_name, "Acme");
        assert!(org.members.is_empty());
        assert!(org.contacts.is_empty());
        assert!(org.projects.is_empty());

        let json: serde_json::Value = serde_json::from_str(&org.to_json().unwrap()).unwrap();
        assert_eq!(json["members"], serde_json::json!([]));
    }

    #[test]
    fn to_json_uses_external_names() {
        let json: serde_json::Value = serde_json::from_str(&acme().to_json().unwrap()).unwrap();
        assert_eq!(json["id"], 77);
        assert_eq!(json["organizationName"], "Acme");
        assert_eq!(json["isActive"], true);
        assert_eq!(json["phoneNumbers"][0]["phoneType"], "work");
        assert_eq!(json["addresses"][0]["kind"], "us");
        assert_eq!(json["addresses"][0]["city"], "Springfield");
        assert_eq!(json["members"][0]["firstName"], "Wile");
        // Nested contacts keep their own omission rules.
        assert!(json["members"][0].get("isSuperUser").is_none());
    }

    #[test]
    fn to_json_output_reads_back() {
        let org = acme();
        let parsed: OrganizationDto = serde_json::from_str(&org.to_json().unwrap()).unwrap();
        assert_eq!(parsed, org);
    }

    #[test]
    fn members_written_through_view_match_concrete_list() {
        let mut org = acme();
        let incoming: Vec<Box<dyn ContactView>> = vec![
            Box::new(ContactDto::new("Road", "Runner")),
            Box::new(ContactDto::new("Elmer", "Fudd")),
        ];
        org.set_members(incoming).unwrap();

        assert_eq!(org.members.len(), 2);
        let views = OrganizationView::members(&org);
        assert_eq!(views[1].full_name().as_deref(), Some("Elmer Fudd"));
        assert_eq!(org.members[1].first_name.as_deref(), Some("Elmer"));
    }

    #[test]
    fn cast_keeps_shared_external_names() {
        let org = acme();
        let account: AccountDto = org.cast().unwrap();
        assert_eq!(account.id, 77);
        // `accounts` exists on both; `organizationName` has no counterpart.
        assert_eq!(account.accounts, Some(Vec::new()));
        assert!(account.account_name.is_empty());
    }

    #[test]
    fn nested_validation_reaches_members() {
        let mut org = acme();
        assert!(org.validate().is_ok());
        org.members[0].first_name = Some("x".repeat(101));
        assert!(org.validate().is_err());
    }
}
