//! Deserialization helpers for the backend's loosely typed JSON.
//!
//! The backend stores metadata columns as whatever the upstream catalog
//! returned, so the same field can arrive as a bare string, a `{name}` record,
//! a number encoded as text, or occasionally garbage. Everything here
//! normalizes at the ingestion boundary so the rest of the crate only sees
//! plain Rust types.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Truthy flag: `true`, non-zero numbers, and `"1"`/`"true"`/`"yes"` are set.
/// `false`, `0`, null and missing fields are not.
pub fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().is_some_and(is_truthy))
}

pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes"
        ),
        _ => false,
    }
}

/// Optional field that degrades to `None` when the value has the wrong shape
/// instead of failing the whole record.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Optional number that also accepts numeric strings (`"12.5"`).
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

/// Optional non-negative integer that also accepts numeric strings and
/// whole-valued floats.
pub fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(number_from_value)
        .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u32::MAX as f64)
        .map(|f| f as u32))
}

/// Like [`lenient_u32`] for counters that can exceed `u32`.
pub fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(number_from_value)
        .filter(|f| *f >= 0.0 && f.fract() == 0.0)
        .map(|f| f as u64))
}

/// Optional signed integer (unix timestamps).
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(number_from_value)
        .filter(|f| f.fract() == 0.0)
        .map(|f| f as i64))
}

/// Optional text; empty strings and non-string values become `None`.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    })
}

fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|f| f.is_finite())
}

// ── Name lists ──────────────────────────────────────────────────────────────

/// One entry of a genre/tag/platform/company list as the backend sends it.
#[derive(Deserialize)]
#[serde(untagged)]
enum NameEntry {
    Bare(String),
    Named { name: String },
    Platform { platform: PlatformRef },
    Other(#[allow(dead_code)] Value),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PlatformRef {
    Bare(String),
    Named { name: String },
    Other(#[allow(dead_code)] Value),
}

impl NameEntry {
    fn into_name(self) -> Option<String> {
        let name = match self {
            NameEntry::Bare(s) | NameEntry::Named { name: s } => s,
            NameEntry::Platform {
                platform: PlatformRef::Bare(s) | PlatformRef::Named { name: s },
            } => s,
            _ => return None,
        };
        if name.is_empty() { None } else { Some(name) }
    }
}

/// Normalize a list whose entries may be bare strings or `{name}` records
/// into plain names, dropping empty and unrecognized entries. A missing or
/// non-array value yields an empty list.
pub fn names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => names_from_values(items),
        _ => Vec::new(),
    })
}

pub(crate) fn names_from_values(items: Vec<Value>) -> Vec<String> {
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<NameEntry>(item).ok())
        .filter_map(NameEntry::into_name)
        .collect()
}

// ── Media links ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(untagged)]
enum MediaEntry {
    Bare(String),
    Image { image: String },
    Url { url: String },
    Preview { preview: String },
    Other(#[allow(dead_code)] Value),
}

/// Normalize screenshot/trailer lists into URLs.
pub fn media_urls<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(items)) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<MediaEntry>(item).ok())
        .filter_map(|entry| match entry {
            MediaEntry::Bare(url)
            | MediaEntry::Image { image: url }
            | MediaEntry::Url { url }
            | MediaEntry::Preview { preview: url } => Some(url),
            MediaEntry::Other(_) => None,
        })
        .filter(|url| !url.is_empty())
        .collect())
}

/// A list of records where individual malformed entries are dropped.
pub fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(items)) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

#[cfg(test)]
#[path = "tests/de_tests.rs"]
mod tests;
