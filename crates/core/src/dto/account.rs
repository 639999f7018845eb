//! Account DTO and its view.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::de::null_as_default;
use crate::dto::feature::{FeatureDto, FeatureView};
use crate::entity::{downcast_all, impl_domain_entity, DomainEntity};
use crate::error::CoreError;
use crate::schema::{
    len_between, max_len, Constraint, DtoSchema, FieldSpec, CREATED_DATE_FIELD, ID_FIELD,
    MODIFIED_DATE_FIELD, NON_NEGATIVE,
};
use crate::types::{DbId, Timestamp};
use crate::validation::validate_guid;

/// A user-facing account with its feature toggles and optional child
/// accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountDto {
    #[validate(range(min = 0))]
    pub id: DbId,
    #[validate(length(min = 1, max = 100))]
    pub account_name: String,
    #[validate(length(max = 50))]
    pub account_number: Option<String>,
    #[validate(custom(function = "validate_guid"))]
    pub license: Option<String>,
    #[validate(range(min = 0))]
    pub linked_entity_id: Option<DbId>,
    #[validate(length(max = 100))]
    pub linked_entity_type: Option<String>,
    #[validate(nested)]
    #[serde(deserialize_with = "null_as_default")]
    pub features: Vec<FeatureDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub accounts: Option<Vec<AccountDto>>,
    pub created_date: Timestamp,
    pub modified_date: Option<Timestamp>,
}

impl Default for AccountDto {
    fn default() -> Self {
        Self {
            id: 0,
            account_name: String::new(),
            account_number: None,
            license: None,
            linked_entity_id: None,
            linked_entity_type: None,
            features: Vec::new(),
            accounts: None,
            created_date: Utc::now(),
            modified_date: None,
        }
    }
}

impl AccountDto {
    pub fn new(account_name: impl Into<String>) -> Self {
        Self {
            account_name: account_name.into(),
            ..Self::default()
        }
    }
}

impl DtoSchema for AccountDto {
    const ENTITY: &'static str = "AccountDTO";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            ID_FIELD,
            FieldSpec::new("account_name", "accountName")
                .required()
                .with(&[len_between(1, 100)]),
            FieldSpec::new("account_number", "accountNumber").with(&[max_len(50)]),
            FieldSpec::new("license", "license").with(&[Constraint::Guid]),
            FieldSpec::new("linked_entity_id", "linkedEntityId").with(&[NON_NEGATIVE]),
            FieldSpec::new("linked_entity_type", "linkedEntityType").with(&[max_len(100)]),
            FieldSpec::new("features", "features").with(&[Constraint::Nested]),
            FieldSpec::new("accounts", "accounts")
                .omit_when_none()
                .with(&[Constraint::Nested]),
            CREATED_DATE_FIELD,
            MODIFIED_DATE_FIELD,
        ];
        FIELDS
    }
}

impl_domain_entity!(AccountDto, "AccountDTO");

/// View of an account that exposes its lists as trait objects.
pub trait AccountView: DomainEntity {
    fn account_name(&self) -> &str;
    fn set_account_name(&mut self, account_name: String);
    fn features(&self) -> Vec<&dyn FeatureView>;
    /// Replaces the feature list. Every element must be a [`FeatureDto`].
    fn set_features(&mut self, features: Vec<Box<dyn FeatureView>>) -> Result<(), CoreError>;
    fn accounts(&self) -> Option<Vec<&dyn AccountView>>;
    /// Replaces the child accounts. Unlike assigning the field directly,
    /// `None` is rejected with [`CoreError::NullArgument`].
    fn set_accounts(
        &mut self,
        accounts: Option<Vec<Box<dyn AccountView>>>,
    ) -> Result<(), CoreError>;
}

impl AccountView for AccountDto {
    fn account_name(&self) -> &str {
        &self.account_name
    }

    fn set_account_name(&mut self, account_name: String) {
        self.account_name = account_name;
    }

    fn features(&self) -> Vec<&dyn FeatureView> {
        self.features.iter().map(|f| f as &dyn FeatureView).collect()
    }

    fn set_features(&mut self, features: Vec<Box<dyn FeatureView>>) -> Result<(), CoreError> {
        self.features = downcast_all(features, FeatureDto::ENTITY)?;
        Ok(())
    }

    fn accounts(&self) -> Option<Vec<&dyn AccountView>> {
        self.accounts
            .as_ref()
            .map(|accounts| accounts.iter().map(|a| a as &dyn AccountView).collect())
    }

    fn set_accounts(
        &mut self,
        accounts: Option<Vec<Box<dyn AccountView>>>,
    ) -> Result<(), CoreError> {
        let accounts = accounts.ok_or(CoreError::NullArgument("accounts"))?;
        self.accounts = Some(downcast_all(accounts, AccountDto::ENTITY)?);
        Ok(())
    }
}
