//! Static field tables describing each DTO's wire shape.
//!
//! A table lists, per field, the in-memory name, the external JSON name,
//! and the constraints declared on it. The tables mirror the `serde` and
//! `validator` attributes on the DTO structs; tests keep the two in sync.

use serde::Serialize;

/// A declared constraint on a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Constraint {
    Range { min: Option<i64>, max: Option<i64> },
    Length { min: Option<u64>, max: Option<u64> },
    Email,
    Guid,
    /// A named format validator from [`crate::validation`].
    Format { name: &'static str },
    /// Elements are validated with their own constraints.
    Nested,
}

/// Non-negative identifier.
pub const NON_NEGATIVE: Constraint = Constraint::Range {
    min: Some(0),
    max: None,
};

pub const fn max_len(max: u64) -> Constraint {
    Constraint::Length {
        min: None,
        max: Some(max),
    }
}

pub const fn len_between(min: u64, max: u64) -> Constraint {
    Constraint::Length {
        min: Some(min),
        max: Some(max),
    }
}

pub const fn format(name: &'static str) -> Constraint {
    Constraint::Format { name }
}

/// One row of a field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub name: &'static str,
    pub json_name: &'static str,
    pub required: bool,
    /// Dropped from serialized output when the value is absent.
    pub omit_when_none: bool,
    pub constraints: &'static [Constraint],
}

impl FieldSpec {
    pub const fn new(name: &'static str, json_name: &'static str) -> Self {
        Self {
            name,
            json_name,
            required: false,
            omit_when_none: false,
            constraints: &[],
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn omit_when_none(self) -> Self {
        Self {
            omit_when_none: true,
            ..self
        }
    }

    pub const fn with(self, constraints: &'static [Constraint]) -> Self {
        Self {
            constraints,
            ..self
        }
    }
}

/// `id` field shared by every DTO.
pub const ID_FIELD: FieldSpec = FieldSpec::new("id", "id")
    .required()
    .with(&[NON_NEGATIVE]);

/// `createdDate` field shared by every DTO.
pub const CREATED_DATE_FIELD: FieldSpec = FieldSpec::new("created_date", "createdDate");

/// `modifiedDate` field shared by every DTO.
pub const MODIFIED_DATE_FIELD: FieldSpec = FieldSpec::new("modified_date", "modifiedDate");

/// A DTO that publishes its field table.
pub trait DtoSchema {
    /// Entity name used in error messages and listings.
    const ENTITY: &'static str;

    fn fields() -> &'static [FieldSpec];

    fn field(name: &str) -> Option<&'static FieldSpec> {
        Self::fields().iter().find(|f| f.name == name)
    }

    fn field_by_json_name(json_name: &str) -> Option<&'static FieldSpec> {
        Self::fields().iter().find(|f| f.json_name == json_name)
    }
}
