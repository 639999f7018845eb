//! Deserialization helpers shared by the DTOs.

use serde::{Deserialize, Deserializer};

/// Reads an explicit JSON `null` as the field's default, so list fields
/// that default to empty accept `null` the same way they accept a missing
/// key.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
