//! Serde helpers for lenient model output.

use serde::{Deserialize, Deserializer};

/// Read an explicit `null` as the type's default value.
///
/// Models asked to "use null for missing information" emit `null` for fields
/// that carry a default, which plain `#[serde(default)]` rejects.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `numberOfPeople` default.
pub(crate) fn one() -> u32 {
    1
}

/// Like [`null_as_default`] but for `numberOfPeople`, whose default is 1.
pub(crate) fn null_as_one<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_else(one))
}

/// Read a blank or whitespace-only string as `None`.
///
/// Models emit `""` for "not mentioned" as often as they emit `null`.
pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.trim().is_empty()))
}

/// Default for catalog status flags.
pub(crate) fn yes() -> bool {
    true
}

pub(crate) fn is_true(value: &bool) -> bool {
    *value
}
