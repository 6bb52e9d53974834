//! Envelope decoder for Akerun API responses.
//!
//! The API wraps a single resource one level deep under its singular name
//! (`{"user": {...}}`) and a collection under its plural name
//! (`{"users": [...]}`). Each entity implements [`Resource`] to declare the
//! two keys; [`decode_one`] and [`decode_many`] strip exactly that layer.

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::AkerunError;

/// An entity the API returns inside a named envelope.
pub trait Resource: DeserializeOwned {
    /// Wrapper key for a single resource, e.g. `user`.
    const KEY: &'static str;

    /// Wrapper key for a collection, e.g. `users`.
    const COLLECTION_KEY: &'static str;
}

/// Field deserializer that reads an explicit `null` as the type's default.
///
/// `#[serde(default)]` only covers a missing key; the API also sends `null`
/// for empty strings and lists. Use with
/// `#[serde(deserialize_with = "null_as_default")]`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn envelope(body: &str) -> Result<Map<String, Value>, AkerunError> {
    Ok(serde_json::from_str::<Map<String, Value>>(body)?)
}

/// Decodes `{"<T::KEY>": {...}}` into `T`.
///
/// # Errors
///
/// Returns `AkerunError::Decode` if the body is not a JSON object, the key
/// is missing, or the inner value does not match `T`.
pub fn decode_one<T: Resource>(body: &str) -> Result<T, AkerunError> {
    let mut wrapper = envelope(body)?;
    let inner = wrapper
        .remove(T::KEY)
        .ok_or_else(|| AkerunError::Decode(de::Error::missing_field(T::KEY)))?;
    Ok(serde_json::from_value(inner)?)
}

/// Decodes `{"<T::COLLECTION_KEY>": [...]}` into a list, preserving order.
///
/// A missing or `null` collection key decodes to an empty list.
///
/// # Errors
///
/// Returns `AkerunError::Decode` if the body is not a JSON object or any
/// element does not match `T`.
pub fn decode_many<T: Resource>(body: &str) -> Result<Vec<T>, AkerunError> {
    let mut wrapper = envelope(body)?;
    match wrapper.remove(T::COLLECTION_KEY) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(items) => Ok(serde_json::from_value(items)?),
    }
}
