//! The capability every DTO shares, plus the down-cast helpers the view
//! traits use when a trait-object list is written back into a DTO.

use std::any::Any;
use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Shared contract of all DTOs.
///
/// `to_json` and `cast` are placeholders on most entity types: the default
/// bodies fail with [`CoreError::NotImplemented`], and only the entities
/// whose JSON export is finished override them.
pub trait DomainEntity: Validate + Any + Debug + Send + Sync {
    fn id(&self) -> DbId;

    fn set_id(&mut self, id: DbId);

    fn created_date(&self) -> Timestamp;

    fn modified_date(&self) -> Option<Timestamp>;

    /// Name used in error messages, e.g. `"AccountDTO"`.
    fn entity_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    fn to_json(&self) -> Result<String, CoreError> {
        Err(CoreError::not_implemented(self.entity_name(), "to_json"))
    }

    /// Convert into another DTO type.
    fn cast<T>(&self) -> Result<T, CoreError>
    where
        Self: Sized,
        T: DomainEntity + DeserializeOwned,
    {
        Err(CoreError::not_implemented(self.entity_name(), "cast"))
    }
}

/// Re-read `source`'s external JSON as `T`. Fields whose external names
/// match carry over; everything else takes `T`'s defaults.
pub fn cast_via_json<S, T>(source: &S) -> Result<T, CoreError>
where
    S: Serialize,
    T: DeserializeOwned,
{
    let value = serde_json::to_value(source)?;
    Ok(serde_json::from_value(value)?)
}

/// Down-cast one boxed view back to its concrete DTO.
pub fn downcast_one<T, V>(item: Box<V>, expected: &'static str) -> Result<T, CoreError>
where
    T: DomainEntity,
    V: DomainEntity + ?Sized,
{
    let found = item.entity_name();
    item.into_any()
        .downcast::<T>()
        .map(|boxed| *boxed)
        .map_err(|_| CoreError::InvalidCast { expected, found })
}

/// Down-cast every element of a boxed view list, failing on the first
/// element of another concrete type.
pub fn downcast_all<T, V>(items: Vec<Box<V>>, expected: &'static str) -> Result<Vec<T>, CoreError>
where
    T: DomainEntity,
    V: DomainEntity + ?Sized,
{
    items
        .into_iter()
        .map(|item| downcast_one(item, expected))
        .collect()
}

/// Implements the boilerplate half of [`DomainEntity`] for a DTO with
/// `id`, `created_date` and `modified_date` fields.
///
/// The `json` form also overrides `to_json` and `cast`.
macro_rules! impl_domain_entity {
    ($ty:ty, $entity:literal) => {
        impl $crate::entity::DomainEntity for $ty {
            $crate::entity::impl_domain_entity!(@common $entity);
        }
    };
    ($ty:ty, $entity:literal, json) => {
        impl $crate::entity::DomainEntity for $ty {
            $crate::entity::impl_domain_entity!(@common $entity);

            fn to_json(&self) -> Result<String, $crate::error::CoreError> {
                Ok(serde_json::to_string(self)?)
            }

            fn cast<T>(&self) -> Result<T, $crate::error::CoreError>
            where
                Self: Sized,
                T: $crate::entity::DomainEntity + serde::de::DeserializeOwned,
            {
                $crate::entity::cast_via_json(self)
            }
        }
    };
    (@common $entity:literal) => {
        fn id(&self) -> $crate::types::DbId {
            self.id
        }

        fn set_id(&mut self, id: $crate::types::DbId) {
            self.id = id;
        }

        fn created_date(&self) -> $crate::types::Timestamp {
            self.created_date
        }

        fn modified_date(&self) -> Option<$crate::types::Timestamp> {
            self.modified_date
        }

        fn entity_name(&self) -> &'static str {
            $entity
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn into_any(self: Box<Self>) -> Box<dyn std::any::Any> {
            self
        }
    };
}

pub(crate) use impl_domain_entity;
