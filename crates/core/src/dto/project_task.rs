//! Project task DTO.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::codes::TaskStatus;
use crate::dto::task_assignment::{TaskAssignmentDto, TaskAssignmentView};
use crate::entity::{downcast_all, impl_domain_entity, DomainEntity};
use crate::error::CoreError;
use crate::schema::{
    len_between, max_len, Constraint, DtoSchema, FieldSpec, CREATED_DATE_FIELD, ID_FIELD,
    MODIFIED_DATE_FIELD, NON_NEGATIVE,
};
use crate::types::{DbId, Timestamp};

/// A unit of work inside a project.
///
/// `assignments` defaults to `None` rather than an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectTaskDto {
    #[validate(range(min = 0))]
    pub id: DbId,
    #[validate(length(min = 1, max = 100))]
    pub task_name: String,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    #[validate(range(min = 0))]
    pub project_id: Option<DbId>,
    pub due_date: Option<Timestamp>,
    pub completed_date: Option<Timestamp>,
    #[validate(nested)]
    pub assignments: Option<Vec<TaskAssignmentDto>>,
    pub created_date: Timestamp,
    pub modified_date: Option<Timestamp>,
}

impl Default for ProjectTaskDto {
    fn default() -> Self {
        Self {
            id: 0,
            task_name: String::new(),
            description: None,
            status: None,
            project_id: None,
            due_date: None,
            completed_date: None,
            assignments: None,
            created_date: Utc::now(),
            modified_date: None,
        }
    }
}

impl ProjectTaskDto {
    pub fn new(task_name: impl Into<String>) -> Self {
        Self {
            task_name: task_name.into(),
            ..Self::default()
        }
    }

    /// Populate every field directly.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: DbId,
        task_name: String,
        description: Option<String>,
        status: Option<TaskStatus>,
        project_id: Option<DbId>,
        due_date: Option<Timestamp>,
        completed_date: Option<Timestamp>,
        assignments: Option<Vec<TaskAssignmentDto>>,
        created_date: Timestamp,
        modified_date: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            task_name,
            description,
            status,
            project_id,
            due_date,
            completed_date,
            assignments,
            created_date,
            modified_date,
        }
    }
}

impl DtoSchema for ProjectTaskDto {
    const ENTITY: &'static str = "ProjectTaskDTO";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            ID_FIELD,
            FieldSpec::new("task_name", "taskName")
                .required()
                .with(&[len_between(1, 100)]),
            FieldSpec::new("description", "description").with(&[max_len(1000)]),
            FieldSpec::new("status", "status"),
            FieldSpec::new("project_id", "projectId").with(&[NON_NEGATIVE]),
            FieldSpec::new("due_date", "dueDate"),
            FieldSpec::new("completed_date", "completedDate"),
            FieldSpec::new("assignments", "assignments").with(&[Constraint::Nested]),
            CREATED_DATE_FIELD,
            MODIFIED_DATE_FIELD,
        ];
        FIELDS
    }
}

impl_domain_entity!(ProjectTaskDto, "ProjectTaskDTO");

pub trait ProjectTaskView: DomainEntity {
    fn task_name(&self) -> &str;
    fn status(&self) -> Option<TaskStatus>;
    fn project_id(&self) -> Option<DbId>;
    fn assignments(&self) -> Option<Vec<&dyn TaskAssignmentView>>;
    /// Replaces the assignments. Unlike assigning the field directly,
    /// `None` is rejected with [`CoreError::NullArgument`].
    fn set_assignments(
        &mut self,
        assignments: Option<Vec<Box<dyn TaskAssignmentView>>>,
    ) -> Result<(), CoreError>;
}

impl ProjectTaskView for ProjectTaskDto {
    fn task_name(&self) -> &str {
        &self.task_name
    }

    fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    fn project_id(&self) -> Option<DbId> {
        self.project_id
    }

    fn assignments(&self) -> Option<Vec<&dyn TaskAssignmentView>> {
        self.assignments
            .as_ref()
            .map(|list| list.iter().map(|a| a as &dyn TaskAssignmentView).collect())
    }

    fn set_assignments(
        &mut self,
        assignments: Option<Vec<Box<dyn TaskAssignmentView>>>,
    ) -> Result<(), CoreError> {
        let assignments = assignments.ok_or(CoreError::NullArgument("assignments"))?;
        self.assignments = Some(downcast_all(assignments, TaskAssignmentDto::ENTITY)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::schema::testing::assert_default_matches_table;

    #[test]
    fn defaults() {
        let before = Utc::now();
        let task = ProjectTaskDto::default();
        let after = Utc::now();

        assert_eq!(task.id, 0);
        assert!(task.assignments.is_none());
        assert!(task.created_date >= before && task.created_date <= after);
        assert!(task.modified_date.is_none());
    }

    #[test]
    fn wire_shape_matches_table() {
        assert_default_matches_table::<ProjectTaskDto>();
    }

    #[test]
    fn concrete_assignments_accept_none() {
        let mut task = ProjectTaskDto::new("Dig");
        task.assignments = Some(vec![TaskAssignmentDto::new(1, Some(2))]);
        task.assignments = None;
        assert!(task.assignments.is_none());
    }

    #[test]
    fn view_assignments_reject_none() {
        let mut task = ProjectTaskDto::new("Dig");
        assert_matches!(
            task.set_assignments(None),
            Err(CoreError::NullArgument("assignments"))
        );
        assert!(task.assignments.is_none());
    }

    #[test]
    fn view_assignments_write_and_read_back() {
        let mut task = ProjectTaskDto::new("Dig");
        let incoming: Vec<Box<dyn TaskAssignmentView>> = vec![
            Box::new(TaskAssignmentDto::new(10, Some(1))),
            Box::new(TaskAssignmentDto::new(11, Some(1))),
        ];
        task.set_assignments(Some(incoming)).unwrap();

        let stored = task.assignments.as_ref().unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[1].user_id, 11);

        let views = ProjectTaskView::assignments(&task).unwrap();
        assert_eq!(views[0].user_id(), 10);
        assert_eq!(views[0].task_id(), Some(1));
    }

    #[test]
    fn from_parts_populates_every_field() {
        let now = Utc::now();
        let task = ProjectTaskDto::from_parts(
            3,
            "Plant".into(),
            None,
            Some(TaskStatus::InProgress),
            Some(5),
            Some(now),
            None,
            Some(Vec::new()),
            now,
            None,
        );
        assert_eq!(task.id, 3);
        assert_eq!(task.task_name, "Plant");
        assert_eq!(task.status, Some(TaskStatus::InProgress));
        assert_eq!(task.project_id, Some(5));
        assert_eq!(task.due_date, Some(now));
        assert_eq!(task.assignments, Some(Vec::new()));
    }

    #[test]
    fn to_json_is_not_implemented() {
        assert_matches!(
            ProjectTaskDto::new("Dig").to_json(),
            Err(CoreError::NotImplemented { entity: "ProjectTaskDTO", .. })
        );
    }
}
