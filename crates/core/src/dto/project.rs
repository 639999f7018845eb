//! Project DTO.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::codes::ProjectStatus;
use crate::de::null_as_default;
use crate::dto::group::{GroupDto, GroupView};
use crate::dto::project_task::{ProjectTaskDto, ProjectTaskView};
use crate::entity::{downcast_all, impl_domain_entity, DomainEntity};
use crate::error::CoreError;
use crate::schema::{
    len_between, max_len, Constraint, DtoSchema, FieldSpec, CREATED_DATE_FIELD, ID_FIELD,
    MODIFIED_DATE_FIELD,
};
use crate::types::{DbId, Timestamp};

/// A project with its tasks and, optionally, the groups working on it.
///
/// `groups` defaults to `None` rather than an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDto {
    #[validate(range(min = 0))]
    pub id: DbId,
    #[serde(rename = "ProjectName")]
    #[validate(length(min = 1, max = 100))]
    pub project_name: String,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub completed_date: Option<Timestamp>,
    #[validate(nested)]
    #[serde(deserialize_with = "null_as_default")]
    pub tasks: Vec<ProjectTaskDto>,
    #[validate(nested)]
    pub groups: Option<Vec<GroupDto>>,
    pub created_date: Timestamp,
    pub modified_date: Option<Timestamp>,
}

impl Default for ProjectDto {
    fn default() -> Self {
        Self {
            id: 0,
            project_name: String::new(),
            description: None,
            status: None,
            start_date: None,
            end_date: None,
            completed_date: None,
            tasks: Vec::new(),
            groups: None,
            created_date: Utc::now(),
            modified_date: None,
        }
    }
}

impl ProjectDto {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            ..Self::default()
        }
    }

    /// Populate every field directly.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: DbId,
        project_name: String,
        description: Option<String>,
        status: Option<ProjectStatus>,
        start_date: Option<Timestamp>,
        end_date: Option<Timestamp>,
        completed_date: Option<Timestamp>,
        tasks: Vec<ProjectTaskDto>,
        groups: Option<Vec<GroupDto>>,
        created_date: Timestamp,
        modified_date: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            project_name,
            description,
            status,
            start_date,
            end_date,
            completed_date,
            tasks,
            groups,
            created_date,
            modified_date,
        }
    }
}

impl DtoSchema for ProjectDto {
    const ENTITY: &'static str = "ProjectDTO";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            ID_FIELD,
            FieldSpec::new("project_name", "ProjectName")
                .required()
                .with(&[len_between(1, 100)]),
            FieldSpec::new("description", "description").with(&[max_len(1000)]),
            FieldSpec::new("status", "status"),
            FieldSpec::new("start_date", "startDate"),
            FieldSpec::new("end_date", "endDate"),
            FieldSpec::new("completed_date", "completedDate"),
            FieldSpec::new("tasks", "tasks").with(&[Constraint::Nested]),
            FieldSpec::new("groups", "groups").with(&[Constraint::Nested]),
            CREATED_DATE_FIELD,
            MODIFIED_DATE_FIELD,
        ];
        FIELDS
    }
}

impl_domain_entity!(ProjectDto, "ProjectDTO");

pub trait ProjectView: DomainEntity {
    fn project_name(&self) -> &str;
    fn status(&self) -> Option<ProjectStatus>;
    fn tasks(&self) -> Vec<&dyn ProjectTaskView>;
    fn set_tasks(&mut self, tasks: Vec<Box<dyn ProjectTaskView>>) -> Result<(), CoreError>;
    fn groups(&self) -> Option<Vec<&dyn GroupView>>;
    /// Replaces the groups. `None` clears them.
    fn set_groups(&mut self, groups: Option<Vec<Box<dyn GroupView>>>) -> Result<(), CoreError>;
}

impl ProjectView for ProjectDto {
    fn project_name(&self) -> &str {
        &self.project_name
    }

    fn status(&self) -> Option<ProjectStatus> {
        self.status
    }

    fn tasks(&self) -> Vec<&dyn ProjectTaskView> {
        self.tasks.iter().map(|t| t as &dyn ProjectTaskView).collect()
    }

    fn set_tasks(&mut self, tasks: Vec<Box<dyn ProjectTaskView>>) -> Result<(), CoreError> {
        self.tasks = downcast_all(tasks, ProjectTaskDto::ENTITY)?;
        Ok(())
    }

    fn groups(&self) -> Option<Vec<&dyn GroupView>> {
        self.groups
            .as_ref()
            .map(|groups| groups.iter().map(|g| g as &dyn GroupView).collect())
    }

    fn set_groups(&mut self, groups: Option<Vec<Box<dyn GroupView>>>) -> Result<(), CoreError> {
        self.groups = groups
            .map(|groups| downcast_all(groups, GroupDto::ENTITY))
            .transpose()?;
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
        let project = ProjectDto::default();
        let after = Utc::now();

        assert_eq!(project.id, 0);
        assert!(project.tasks.is_empty());
        assert!(project.groups.is_none());
        assert!(project.created_date >= before && project.created_date <= after);
        assert!(project.modified_date.is_none());
    }

    #[test]
    fn wire_shape_matches_table() {
        assert_default_matches_table::<ProjectDto>();
    }

    #[test]
    fn project_name_keeps_pascal_case_on_the_wire() {
        let project = ProjectDto::new("Garden");
        let keys = json_keys(&project);
        assert!(keys.contains("ProjectName"));
        assert!(!keys.contains("projectName"));

        let parsed: ProjectDto = serde_json::from_str(r#"{"ProjectName": "Roof"}"#).unwrap();
        assert_eq!(parsed.project_name, "Roof");
    }

    #[test]
    fn groups_serialize_as_null_by_default() {
        let json = serde_json::to_value(ProjectDto::new("Garden")).unwrap();
        assert!(json["groups"].is_null());
        assert_eq!(json["tasks"], serde_json::json!([]));
    }

    #[test]
    fn from_parts_populates_every_field() {
        let now = Utc::now();
        let project = ProjectDto::from_parts(
            5,
            "Garden".into(),
            Some("Spring planting".into()),
            Some(ProjectStatus::Active),
            Some(now),
            None,
            None,
            vec![ProjectTaskDto::new("Dig")],
            Some(vec![GroupDto::new("Volunteers")]),
            now,
            Some(now),
        );
        assert_eq!(project.id, 5);
        assert_eq!(project.status, Some(ProjectStatus::Active));
        assert_eq!(project.tasks[0].task_name, "Dig");
        assert_eq!(project.groups.as_ref().unwrap()[0].group_name, "Volunteers");
        assert_eq!(project.modified_date, Some(now));
    }

    #[test]
    fn set_groups_through_view_accepts_none() {
        let mut project = ProjectDto::new("Garden");
        project.groups = Some(vec![GroupDto::new("Volunteers")]);
        project.set_groups(None).unwrap();
        assert!(project.groups.is_none());
        assert!(ProjectView::groups(&project).is_none());
    }

    #[test]
    fn groups_written_through_view_read_back_concretely() {
        let mut project = ProjectDto::new("Garden");
        let incoming: Vec<Box<dyn GroupView>> = vec![
            Box::new(GroupDto::new("Planners")),
            Box::new(GroupDto::new("Diggers")),
        ];
        project.set_groups(Some(incoming)).unwrap();

        let names: Vec<_> = project
            .groups
            .as_ref()
            .unwrap()
            .iter()
            .map(|g| g.group_name.as_str())
            .collect();
        assert_eq!(names, ["Planners", "Diggers"]);
    }

    #[test]
    fn nested_task_validation() {
        let mut project = ProjectDto::new("Garden");
        assert!(project.validate().is_ok());
        project.tasks.push(ProjectTaskDto::default());
        assert!(project.validate().is_err());
    }

    #[test]
    fn cast_is_not_implemented() {
        assert_matches!(
            ProjectDto::new("Garden").cast::<GroupDto>(),
            Err(CoreError::NotImplemented { entity: "ProjectDTO", operation: "cast" })
        );
    }
}
