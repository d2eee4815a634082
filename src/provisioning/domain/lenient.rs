//! Deserializers tolerant of the `null` values ADCM sends for unset text fields.

use serde::{Deserialize, Deserializer};

/// Reads a string field, mapping `null` to an empty string
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
