//! Structural validation of stored records.
//!
//! Stored JSON is untrusted. A record is accepted when its identity has four
//! string fields and its stats carry an array body map and a string
//! temperament. Other fields read leniently and are back-filled later.
//! Everything else is a [`Rejection`] naming what was wrong.

use serde_json::Value;
use thiserror::Error;

use crate::horse::Horse;
use crate::naming::Identity;

/// Why a stored record was refused.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("record is not an object")]
    NotAnObject,

    #[error("identity is missing or not an object")]
    MissingIdentity,

    #[error("identity field `{0}` is missing or not a string")]
    IdentityField(&'static str),

    #[error("stats are missing or not an object")]
    MissingStats,

    #[error("body map is not an array")]
    BodyMapNotArray,

    #[error("temperament is not a string")]
    TemperamentNotString,

    #[error("malformed record: {0}")]
    Malformed(String),
}

const IDENTITY_FIELDS: [&str; 4] = ["first", "middle", "last", "label"];

/// Validate a stored identity.
pub fn validate_identity(value: &Value) -> Result<Identity, Rejection> {
    let object = value.as_object().ok_or(Rejection::MissingIdentity)?;
    for field in IDENTITY_FIELDS {
        if !object.get(field).is_some_and(Value::is_string) {
            return Err(Rejection::IdentityField(field));
        }
    }
    serde_json::from_value(value.clone()).map_err(|e| Rejection::Malformed(e.to_string()))
}

/// Validate a stored horse.
pub fn validate_horse(value: &Value) -> Result<Horse, Rejection> {
    let object = value.as_object().ok_or(Rejection::NotAnObject)?;

    validate_identity(object.get("identity").unwrap_or(&Value::Null))?;

    let stats = object
        .get("stats")
        .and_then(Value::as_object)
        .ok_or(Rejection::MissingStats)?;
    if !stats.get("bodyMap").is_some_and(Value::is_array) {
        return Err(Rejection::BodyMapNotArray);
    }
    if !stats.get("temperament").is_some_and(Value::is_string) {
        return Err(Rejection::TemperamentNotString);
    }

    serde_json::from_value(value.clone()).map_err(|e| Rejection::Malformed(e.to_string()))
}
