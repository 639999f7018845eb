//! Lookup of DTO kinds by URL slug.
//!
//! Lets callers that only hold a kind name (a path segment, a config key)
//! reach a DTO's field table and decode a JSON payload into it.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::dto::{
    AccountDto, CaAddressDto, ContactDto, EmailAddressDto, FeatureDto, GroupDto, MxAddressDto,
    OrganizationDto, PhoneNumberDto, ProjectDto, ProjectTaskDto, SubAccountDto,
    TaskAssignmentDto, UsAddressDto, UserDto,
};
use crate::entity::DomainEntity;
use crate::error::CoreError;
use crate::schema::{DtoSchema, FieldSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Account,
    SubAccount,
    Contact,
    User,
    Organization,
    PhoneNumber,
    UsAddress,
    CaAddress,
    MxAddress,
    Project,
    ProjectTask,
    Feature,
    EmailAddress,
    Group,
    TaskAssignment,
}

impl EntityKind {
    pub const ALL: &'static [EntityKind] = &[
        EntityKind::Account,
        EntityKind::SubAccount,
        EntityKind::Contact,
        EntityKind::User,
        EntityKind::Organization,
        EntityKind::PhoneNumber,
        EntityKind::UsAddress,
        EntityKind::CaAddress,
        EntityKind::MxAddress,
        EntityKind::Project,
        EntityKind::ProjectTask,
        EntityKind::Feature,
        EntityKind::EmailAddress,
        EntityKind::Group,
        EntityKind::TaskAssignment,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            EntityKind::Account => "account",
            EntityKind::SubAccount => "sub-account",
            EntityKind::Contact => "contact",
            EntityKind::User => "user",
            EntityKind::Organization => "organization",
            EntityKind::PhoneNumber => "phone-number",
            EntityKind::UsAddress => "us-address",
            EntityKind::CaAddress => "ca-address",
            EntityKind::MxAddress => "mx-address",
            EntityKind::Project => "project",
            EntityKind::ProjectTask => "project-task",
            EntityKind::Feature => "feature",
            EntityKind::EmailAddress => "email-address",
            EntityKind::Group => "group",
            EntityKind::TaskAssignment => "task-assignment",
        }
    }

    /// Entity name as used in error messages, e.g. `"AccountDTO"`.
    pub fn entity_name(self) -> &'static str {
        match self {
            EntityKind::Account => AccountDto::ENTITY,
            EntityKind::SubAccount => SubAccountDto::ENTITY,
            EntityKind::Contact => ContactDto::ENTITY,
            EntityKind::User => UserDto::ENTITY,
            EntityKind::Organization => OrganizationDto::ENTITY,
            EntityKind::PhoneNumber => PhoneNumberDto::ENTITY,
            EntityKind::UsAddress => UsAddressDto::ENTITY,
            EntityKind::CaAddress => CaAddressDto::ENTITY,
            EntityKind::MxAddress => MxAddressDto::ENTITY,
            EntityKind::Project => ProjectDto::ENTITY,
            EntityKind::ProjectTask => ProjectTaskDto::ENTITY,
            EntityKind::Feature => FeatureDto::ENTITY,
            EntityKind::EmailAddress => EmailAddressDto::ENTITY,
            EntityKind::Group => GroupDto::ENTITY,
            EntityKind::TaskAssignment => TaskAssignmentDto::ENTITY,
        }
    }

    /// Whether `to_json` and `cast` are implemented for this kind.
    pub fn supports_json(self) -> bool {
        matches!(
            self,
            EntityKind::Organization | EntityKind::PhoneNumber | EntityKind::UsAddress
        )
    }

    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            EntityKind::Account => AccountDto::fields(),
            EntityKind::SubAccount => SubAccountDto::fields(),
            EntityKind::Contact => ContactDto::fields(),
            EntityKind::User => UserDto::fields(),
            EntityKind::Organization => OrganizationDto::fields(),
            EntityKind::PhoneNumber => PhoneNumberDto::fields(),
            EntityKind::UsAddress => UsAddressDto::fields(),
            EntityKind::CaAddress => CaAddressDto::fields(),
            EntityKind::MxAddress => MxAddressDto::fields(),
            EntityKind::Project => ProjectDto::fields(),
            EntityKind::ProjectTask => ProjectTaskDto::fields(),
            EntityKind::Feature => FeatureDto::fields(),
            EntityKind::EmailAddress => EmailAddressDto::fields(),
            EntityKind::Group => GroupDto::fields(),
            EntityKind::TaskAssignment => TaskAssignmentDto::fields(),
        }
    }

    /// Decode a JSON payload into this kind's DTO. Missing fields take the
    /// DTO's defaults.
    pub fn decode(self, value: serde_json::Value) -> Result<Box<dyn DomainEntity>, CoreError> {
        match self {
            EntityKind::Account => boxed::<AccountDto>(value),
            EntityKind::SubAccount => boxed::<SubAccountDto>(value),
            EntityKind::Contact => boxed::<ContactDto>(value),
            EntityKind::User => boxed::<UserDto>(value),
            EntityKind::Organization => boxed::<OrganizationDto>(value),
            EntityKind::PhoneNumber => boxed::<PhoneNumberDto>(value),
            EntityKind::UsAddress => boxed::<UsAddressDto>(value),
            EntityKind::CaAddress => boxed::<CaAddressDto>(value),
            EntityKind::MxAddress => boxed::<MxAddressDto>(value),
            EntityKind::Project => boxed::<ProjectDto>(value),
            EntityKind::ProjectTask => boxed::<ProjectTaskDto>(value),
            EntityKind::Feature => boxed::<FeatureDto>(value),
            EntityKind::EmailAddress => boxed::<EmailAddressDto>(value),
            EntityKind::Group => boxed::<GroupDto>(value),
            EntityKind::TaskAssignment => boxed::<TaskAssignmentDto>(value),
        }
    }
}

fn boxed<T>(value: serde_json::Value) -> Result<Box<dyn DomainEntity>, CoreError>
where
    T: DomainEntity + DeserializeOwned,
{
    let entity: T = serde_json::from_value(value)?;
    Ok(Box::new(entity))
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for EntityKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| CoreError::UnknownEntity(s.to_string()))
    }
}
