//! Project group.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::de::null_as_default;
use crate::entity::{impl_domain_entity, DomainEntity};
use crate::schema::{
    len_between, max_len, DtoSchema, FieldSpec, CREATED_DATE_FIELD, ID_FIELD, MODIFIED_DATE_FIELD,
};
use crate::types::{DbId, Timestamp};

/// A named set of members working on a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupDto {
    #[validate(range(min = 0))]
    pub id: DbId,
    #[validate(length(min = 1, max = 100))]
    pub group_name: String,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub member_ids: Vec<DbId>,
    pub created_date: Timestamp,
    pub modified_date: Option<Timestamp>,
}

impl Default for GroupDto {
    fn default() -> Self {
        Self {
            id: 0,
            group_name: String::new(),
            description: None,
            member_ids: Vec::new(),
            created_date: Utc::now(),
            modified_date: None,
        }
    }
}

impl GroupDto {
    pub fn new(group_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            ..Self::default()
        }
    }
}

impl DtoSchema for GroupDto {
    const ENTITY: &'static str = "GroupDTO";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            ID_FIELD,
            FieldSpec::new("group_name", "groupName")
                .required()
                .with(&[len_between(1, 100)]),
            FieldSpec::new("description", "description").with(&[max_len(1000)]),
            FieldSpec::new("member_ids", "memberIds"),
            CREATED_DATE_FIELD,
            MODIFIED_DATE_FIELD,
        ];
        FIELDS
    }
}

impl_domain_entity!(GroupDto, "GroupDTO");

pub trait GroupView: DomainEntity {
    fn group_name(&self) -> &str;
    fn member_ids(&self) -> &[DbId];
}

impl GroupView for GroupDto {
    fn group_name(&self) -> &str {
        &self.group_name
    }

    fn member_ids(&self) -> &[DbId] {
        &self.member_ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::testing::assert_default_matches_table;

    #[test]
    fn wire_shape_matches_table() {
        assert_default_matches_table::<GroupDto>();
    }

    #[test]
    fn empty_name_fails_validation() {
        assert!(GroupDto::default().validate().is_err());
        assert!(GroupDto::new("Design").validate().is_ok());
    }

    #[test]
    fn member_ids_default_to_empty() {
        let group = GroupDto::default();
        assert!(group.member_ids.is_empty());
    }
}
