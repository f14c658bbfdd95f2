//! The "Not Available" sentinel.
//!
//! Cleaned scalars are `Option<String>` inside the pipeline. The sentinel text
//! only exists at the serialization boundary (JSON artifacts, table rows, API).
//! Use with `#[serde(default, with = "crate::domain::sentinel")]`.

use serde::{Deserialize, Deserializer, Serializer};

pub const NOT_AVAILABLE: &str = "Not Available";

/// Render an optional scalar the way it is stored and served.
pub fn render(value: &Option<String>) -> String {
    value.as_deref().unwrap_or(NOT_AVAILABLE).to_string()
}

/// Inverse of [`render`]: null, empty and the sentinel itself are absent.
pub fn parse(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty() && s != NOT_AVAILABLE)
}

/// True when a served value counts as missing.
pub fn is_missing(value: Option<&str>) -> bool {
    matches!(value, None | Some("") | Some(NOT_AVAILABLE))
}

pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or(NOT_AVAILABLE))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(parse(value))
}
