//! Serde helpers for reading scansion JSON leniently
//!
//! The scansion files are produced by external tooling and their field
//! shapes drift: booleans arrive as `0`/`1` or `"yes"`, numbers arrive as
//! strings, lists are sometimes `null`. Every helper here reads the raw
//! value first and degrades to a conservative default instead of failing.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeSet;

/// Serialize Option<T> as null when None (don't skip the field)
pub fn serialize_option_as_null<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(v) => serializer.serialize_some(v),
        None => serializer.serialize_none(),
    }
}

/// Truthiness of a raw JSON value.
///
/// `true`, any non-zero number, and the strings "true", "1", "yes", "y"
/// (case-insensitive) are true. Everything else is false.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "yes" | "y"
        ),
        _ => false,
    }
}

/// Integer view of a raw JSON value: integers, truncated floats and
/// numeric strings. Anything else is `None`.
pub fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Text view of a raw JSON value. Numbers and booleans are stringified.
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(truthy(&value))
}

pub fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(as_integer(&value))
}

pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(as_text(&value))
}

/// Read a list, skipping elements that don't fit `T`.
///
/// A value that isn't a list at all reads as empty.
pub fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };

    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<T>(item) {
            Ok(parsed) => out.push(parsed),
            Err(e) => log::warn!("Skipping unreadable list entry {}: {}", i, e),
        }
    }
    Ok(out)
}

/// Read a struct, falling back to its default when the value doesn't fit.
pub fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(value).unwrap_or_else(|e| {
        log::warn!("Unreadable nested object, using default: {}", e);
        T::default()
    }))
}

/// Read a set of 1-based syllable positions.
///
/// Non-numeric entries and positions below 1 are dropped.
pub fn lenient_index_set<'de, D>(deserializer: D) -> Result<BTreeSet<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(index_set(&value))
}

/// Index-set view of a raw JSON value (see [`lenient_index_set`]).
pub fn index_set(value: &Value) -> BTreeSet<u32> {
    let Value::Array(items) = value else {
        return BTreeSet::new();
    };
    items
        .iter()
        .filter(|item| item.is_number())
        .filter_map(as_integer)
        .filter_map(|n| u32::try_from(n).ok())
        .filter(|&n| n >= 1)
        .collect()
}
