//! Data transfer objects for the Organizer Companion contact manager.
//!
//! Every DTO implements [`entity::DomainEntity`] and publishes a field
//! table through [`schema::DtoSchema`]. DTOs that own collections also
//! implement a view trait (`AccountView`, `ContactView`, ...) exposing
//! those collections as trait-object lists.

pub mod codes;
pub mod de;
pub mod dto;
pub mod entity;
pub mod error;
pub mod registry;
pub mod schema;
pub mod types;
pub mod validation;

pub use entity::DomainEntity;
pub use error::CoreError;
pub use registry::EntityKind;
pub use schema::{Constraint, DtoSchema, FieldSpec};
