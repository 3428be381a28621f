//! Serde helpers for lenient request decoding.

use serde::{Deserialize, Deserializer};

/// Deserialize a value that treats `null` as its zero value.
///
/// # Errors
///
/// Returns the deserializer's error when the value is neither `null` nor a
/// valid `T`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
