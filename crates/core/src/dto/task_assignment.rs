//! Assignment of a user to a project task.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entity::{impl_domain_entity, DomainEntity};
use crate::schema::{
    max_len, DtoSchema, FieldSpec, CREATED_DATE_FIELD, ID_FIELD, MODIFIED_DATE_FIELD, NON_NEGATIVE,
};
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskAssignmentDto {
    #[validate(range(min = 0))]
    pub id: DbId,
    #[validate(range(min = 0))]
    pub user_id: DbId,
    #[validate(range(min = 0))]
    pub task_id: Option<DbId>,
    #[validate(length(max = 50))]
    pub role: Option<String>,
    pub created_date: Timestamp,
    pub modified_date: Option<Timestamp>,
}

impl Default for TaskAssignmentDto {
    fn default() -> Self {
        Self {
            id: 0,
            user_id: 0,
            task_id: None,
            role: None,
            created_date: Utc::now(),
            modified_date: None,
        }
    }
}

impl TaskAssignmentDto {
    pub fn new(user_id: DbId, task_id: Option<DbId>) -> Self {
        Self {
            user_id,
            task_id,
            ..Self::default()
        }
    }
}

impl DtoSchema for TaskAssignmentDto {
    const ENTITY: &'static str = "TaskAssignmentDTO";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            ID_FIELD,
            FieldSpec::new("user_id", "userId").with(&[NON_NEGATIVE]),
            FieldSpec::new("task_id", "taskId").with(&[NON_NEGATIVE]),
            FieldSpec::new("role", "role").with(&[max_len(50)]),
            CREATED_DATE_FIELD,
            MODIFIED_DATE_FIELD,
        ];
        FIELDS
    }
}

impl_domain_entity!(TaskAssignmentDto, "TaskAssignmentDTO");

pub trait TaskAssignmentView: DomainEntity {
    fn user_id(&self) -> DbId;
    fn task_id(&self) -> Option<DbId>;
    fn role(&self) -> Option<&str>;
}

impl TaskAssignmentView for TaskAssignmentDto {
    fn user_id(&self) -> DbId {
        self.user_id
    }

    fn task_id(&self) -> Option<DbId> {
        self.task_id
    }

    fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }
}
