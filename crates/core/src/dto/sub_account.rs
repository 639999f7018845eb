//! Link between an account and another entity.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::account::{AccountDto, AccountView};
use crate::entity::{downcast_one, impl_domain_entity, DomainEntity};
use crate::error::CoreError;
use crate::schema::{
    max_len, Constraint, DtoSchema, FieldSpec, CREATED_DATE_FIELD, ID_FIELD, MODIFIED_DATE_FIELD,
    NON_NEGATIVE,
};
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct SubAccountDto {
    #[validate(range(min = 0))]
    pub id: DbId,
    #[validate(range(min = 0))]
    pub account_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub account: Option<AccountDto>,
    #[validate(range(min = 0))]
    pub linked_entity_id: Option<DbId>,
    #[validate(length(max = 100))]
    pub linked_entity_type: Option<String>,
    pub created_date: Timestamp,
    pub modified_date: Option<Timestamp>,
}

impl Default for SubAccountDto {
    fn default() -> Self {
        Self {
            id: 0,
            account_id: None,
            account: None,
            linked_entity_id: None,
            linked_entity_type: None,
            created_date: Utc::now(),
            modified_date: None,
        }
    }
}

impl SubAccountDto {
    /// Populate every field directly.
    pub fn from_parts(
        id: DbId,
        account_id: Option<DbId>,
        account: Option<AccountDto>,
        linked_entity_id: Option<DbId>,
        linked_entity_type: Option<String>,
        created_date: Timestamp,
        modified_date: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            account_id,
            account,
            linked_entity_id,
            linked_entity_type,
            created_date,
            modified_date,
        }
    }
}

impl DtoSchema for SubAccountDto {
    const ENTITY: &'static str = "SubAccountDTO";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            ID_FIELD,
            FieldSpec::new("account_id", "accountId").with(&[NON_NEGATIVE]),
            FieldSpec::new("account", "account")
                .omit_when_none()
                .with(&[Constraint::Nested]),
            FieldSpec::new("linked_entity_id", "linkedEntityId").with(&[NON_NEGATIVE]),
            FieldSpec::new("linked_entity_type", "linkedEntityType").with(&[max_len(100)]),
            CREATED_DATE_FIELD,
            MODIFIED_DATE_FIELD,
        ];
        FIELDS
    }
}

impl_domain_entity!(SubAccountDto, "SubAccountDTO");

pub trait SubAccountView: DomainEntity {
    fn account_id(&self) -> Option<DbId>;
    fn account(&self) -> Option<&dyn AccountView>;
    /// Replaces the linked account; also syncs `account_id` to its id.
    fn set_account(&mut self, account: Option<Box<dyn AccountView>>) -> Result<(), CoreError>;
    fn linked_entity_id(&self) -> Option<DbId>;
    fn linked_entity_type(&self) -> Option<&str>;
}

impl SubAccountView for SubAccountDto {
    fn account_id(&self) -> Option<DbId> {
        self.account_id
    }

    fn account(&self) -> Option<&dyn AccountView> {
        self.account.as_ref().map(|a| a as &dyn AccountView)
    }

    fn set_account(&mut self, account: Option<Box<dyn AccountView>>) -> Result<(), CoreError> {
        let account = account
            .map(|a| downcast_one::<AccountDto, _>(a, AccountDto::ENTITY))
            .transpose()?;
        self.account_id = account.as_ref().map(|a| a.id);
        self.account = account;
        Ok(())
    }

    fn linked_entity_id(&self) -> Option<DbId> {
        self.linked_entity_id
    }

    fn linked_entity_type(&self) -> Option<&str> {
        self.linked_entity_type.as_deref()
    }
}
