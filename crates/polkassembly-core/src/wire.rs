//! Serde helpers shared by the DTO modules.

use serde::{Deserialize, Deserializer};

/// Decode `null` as the type's default value.
///
/// The API sends `null` for empty lists, absent nested records and unset
/// scalars or timestamps; the container-level `#[serde(default)]` only covers
/// missing keys. Every non-`Option` DTO field goes through this.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
