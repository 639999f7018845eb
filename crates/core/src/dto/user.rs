//! Application user DTO.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::de::null_as_default;
use crate::dto::project::{ProjectDto, ProjectView};
use crate::dto::sub_account::{SubAccountDto, SubAccountView};
use crate::entity::{downcast_all, impl_domain_entity, DomainEntity};
use crate::error::CoreError;
use crate::schema::{
    len_between, max_len, Constraint, DtoSchema, FieldSpec, CREATED_DATE_FIELD, ID_FIELD,
    MODIFIED_DATE_FIELD,
};
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDto {
    #[validate(range(min = 0))]
    pub id: DbId,
    #[validate(length(min = 1, max = 50))]
    pub user_name: String,
    #[validate(length(max = 100))]
    pub first_name: Option<String>,
    #[validate(length(max = 100))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email_address: Option<String>,
    pub is_active: bool,
    pub is_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_super_user: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deceased: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deceased_date: Option<Timestamp>,
    #[validate(nested)]
    #[serde(deserialize_with = "null_as_default")]
    pub accounts: Vec<SubAccountDto>,
    #[validate(nested)]
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<ProjectDto>,
    pub created_date: Timestamp,
    pub modified_date: Option<Timestamp>,
}

impl Default for UserDto {
    fn default() -> Self {
        Self {
            id: 0,
            user_name: String::new(),
            first_name: None,
            last_name: None,
            email_address: None,
            is_active: true,
            is_admin: None,
            is_super_user: None,
            is_deceased: None,
            deceased_date: None,
            accounts: Vec::new(),
            projects: Vec::new(),
            created_date: Utc::now(),
            modified_date: None,
        }
    }
}

impl UserDto {
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            ..Self::default()
        }
    }
}

impl DtoSchema for UserDto {
    const ENTITY: &'static str = "UserDTO";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            ID_FIELD,
            FieldSpec::new("user_name", "userName")
                .required()
                .with(&[len_between(1, 50)]),
            FieldSpec::new("first_name", "firstName").with(&[max_len(100)]),
            FieldSpec::new("last_name", "lastName").with(&[max_len(100)]),
            FieldSpec::new("email_address", "emailAddress").with(&[Constraint::Email]),
            FieldSpec::new("is_active", "isActive"),
            FieldSpec::new("is_admin", "isAdmin"),
            FieldSpec::new("is_super_user", "isSuperUser").omit_when_none(),
            FieldSpec::new("is_deceased", "isDeceased").omit_when_none(),
            FieldSpec::new("deceased_date", "deceasedDate").omit_when_none(),
            FieldSpec::new("accounts", "accounts").with(&[Constraint::Nested]),
            FieldSpec::new("projects", "projects").with(&[Constraint::Nested]),
            CREATED_DATE_FIELD,
            MODIFIED_DATE_FIELD,
        ];
        FIELDS
    }
}

impl_domain_entity!(UserDto, "UserDTO");

pub trait UserView: DomainEntity {
    fn user_name(&self) -> &str;
    fn is_active(&self) -> bool;
    fn accounts(&self) -> Vec<&dyn SubAccountView>;
    fn set_accounts(&mut self, accounts: Vec<Box<dyn SubAccountView>>) -> Result<(), CoreError>;
    fn projects(&self) -> Vec<&dyn ProjectView>;
    fn set_projects(&mut self, projects: Vec<Box<dyn ProjectView>>) -> Result<(), CoreError>;
}

impl UserView for UserDto {
    fn user_name(&self) -> &str {
        &self.user_name
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn accounts(&self) -> Vec<&dyn SubAccountView> {
        self.accounts.iter().map(|a| a as &dyn SubAccountView).collect()
    }

    fn set_accounts(&mut self, accounts: Vec<Box<dyn SubAccountView>>) -> Result<(), CoreError> {
        self.accounts = downcast_all(accounts, SubAccountDto::ENTITY)?;
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
    use assert_matches::assert_matches;

    use super::*;
    use crate::schema::testing::{assert_default_matches_table, json_keys};

    #[test]
    fn defaults() {
        let before = Utc::now();
        let user = UserDto::default();
        let after = Utc::now();

        assert_eq!(user.id, 0);
        assert!(user.is_active);
        assert!(user.accounts.is_empty());
        assert!(user.projects.is_empty());
        assert!(user.created_date >= before && user.created_date <= after);
        assert!(user.modified_date.is_none());
    }

    #[test]
    fn wire_shape_matches_table() {
        assert_default_matches_table::<UserDto>();
    }

    #[test]
    fn null_lists_read_back_empty() {
        let user: UserDto = serde_json::from_value(serde_json::json!({
            "userName": "ada",
            "accounts": null,
            "projects": null
        }))
        .unwrap();
        assert!(user.accounts.is_empty());
        assert!(user.projects.is_empty());
        assert!(UserView::projects(&user).is_empty());
    }

    #[test]
    fn optional_flags_omitted_when_none() {
        let mut user = UserDto::new("ada");
        let keys = json_keys(&user);
        assert!(!keys.contains("isSuperUser"));
        assert!(!keys.contains("isDeceased"));
        assert!(!keys.contains("deceasedDate"));

        user.is_super_user = Some(true);
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["isSuperUser"], true);
        assert_eq!(json["userName"], "ada");
    }

    #[test]
    fn user_name_and_email_are_validated() {
        assert!(UserDto::default().validate().is_err());

        let mut user = UserDto::new("ada");
        user.email_address = Some("ada@example.com".into());
        assert!(user.validate().is_ok());

        user.email_address = Some("ada-at-example".into());
        assert!(user.validate().is_err());
    }

    #[test]
    fn projects_round_trip_through_views() {
        let mut user = UserDto::new("ada");
        let incoming: Vec<Box<dyn ProjectView>> = vec![Box::new(ProjectDto::new("Engine"))];
        user.set_projects(incoming).unwrap();

        let views = UserView::projects(&user);
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].project_name(), "Engine");
    }

    #[test]
    fn set_accounts_replaces_list_but_export_fails() {
        let mut user = UserDto::new("ada");
        let incoming: Vec<Box<dyn SubAccountView>> = vec![Box::new(SubAccountDto::default())];
        user.set_accounts(incoming).unwrap();
        assert_eq!(user.accounts.len(), 1);
        assert_matches!(
            user.to_json(),
            Err(CoreError::NotImplemented { entity: "UserDTO", .. })
        );
    }
}
