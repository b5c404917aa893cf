//! Field readers for stored horses.
//!
//! A record that passed validation is trusted. Fields beyond the validated
//! ones read with a neutral value when their stored shape is off, so an old
//! or hand-edited record is kept and back-filled rather than dropped.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::status::StatusFlags;
use super::HorseId;

/// `None` when the stored value does not decode as `T`.
pub(crate) fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Strings as stored, anything else as empty text.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

fn round_non_negative(value: &Value) -> Option<f64> {
    value.as_f64().filter(|v| v.is_finite()).map(|v| v.max(0.0).round())
}

/// Any JSON number, clamped at zero and rounded. Anything else is 0.
pub(crate) fn whole<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(round_non_negative(&value).map_or(0, |v| v as u32))
}

/// Total purse: any JSON number, clamped at zero and rounded to whole
/// dollars. Anything else reads as missing.
pub(crate) fn purse<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(round_non_negative(&value).map(|v| v as u64))
}

/// Array elements that decode as `T`; the rest are skipped.
pub(crate) fn items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(values) => Ok(values
            .into_iter()
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// String flags only, then the usual dedup and cap.
pub(crate) fn flags<'de, D>(deserializer: D) -> Result<StatusFlags, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Vec<String> = items(deserializer)?;
    Ok(StatusFlags::from(values))
}

/// A non-string id reads as empty and is back-filled.
pub(crate) fn id<'de, D>(deserializer: D) -> Result<HorseId, D::Error>
where
    D: Deserializer<'de>,
{
    text(deserializer).map(|s| HorseId::from(s.as_str()))
}
