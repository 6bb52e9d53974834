//! Request encoder: parameter structs to wire key/value pairs.
//!
//! Parameter structs derive `Serialize` and mark optional fields with
//! `#[serde(skip_serializing_if = "is_zero")]`. [`to_values`] flattens the
//! serialized struct into [`Values`], which `reqwest` accepts for both the
//! query string and a form body.
//!
//! ```ignore
//! #[derive(Serialize, Default)]
//! struct UsersParameter {
//!     #[serde(skip_serializing_if = "is_zero")]
//!     limit: u32,
//!     #[serde(skip_serializing_if = "is_zero")]
//!     user_mail: String,
//! }
//!
//! let values = to_values(&UsersParameter { limit: 10, ..Default::default() })?;
//! assert_eq!(values.encode(), "limit=10");
//! ```

use serde::Serialize;
use serde_json::Value;
use url::form_urlencoded;

use crate::error::AkerunError;

/// Returns true if `value` equals its type's zero value.
///
/// Used as the omit-if-empty tag on parameter fields. It cannot tell
/// "never set" apart from "explicitly zero", so tagged fields cannot send
/// `0`, `false` or `""` to the API.
pub fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Ordered multimap of encoded parameters.
///
/// Serializes as a sequence of `(key, value)` pairs, preserving insertion
/// order and repeated keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Values(Vec<(String, String)>);

impl Values {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pair; existing pairs with the same key are kept.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// Returns the first value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Returns every value stored under `key`, in insertion order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.iter()
            .filter(|(k, _)| *k == key)
            .map(|(_, v)| v)
            .collect()
    }

    /// Returns true if no pairs are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders the pairs as `application/x-www-form-urlencoded`.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

/// Encodes a flat parameter struct.
///
/// Scalars become one pair under the field name; sequences become one
/// `name[]` pair per element, in order; `None` fields are dropped.
///
/// # Errors
///
/// Returns `AkerunError::Encoding` if `params` does not serialize to a flat
/// object of strings, numbers, booleans and sequences of those.
pub fn to_values<P: Serialize + ?Sized>(params: &P) -> Result<Values, AkerunError> {
    let value = serde_json::to_value(params)
        .map_err(|e| AkerunError::encoding(format!("failed to serialize parameters: {}", e)))?;

    let Value::Object(fields) = value else {
        return Err(AkerunError::encoding(
            "parameters must serialize to a struct or map",
        ));
    };

    let mut values = Values::new();
    for (key, field) in fields {
        match field {
            Value::Null => {}
            Value::Array(items) => {
                let wire_key = format!("{}[]", key);
                for item in items {
                    let item = scalar(&key, item)?;
                    values.add(wire_key.clone(), item);
                }
            }
            other => {
                let other = scalar(&key, other)?;
                values.add(key, other);
            }
        }
    }

    Ok(values)
}

fn scalar(key: &str, value: Value) -> Result<String, AkerunError> {
    match value {
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(AkerunError::encoding(format!(
            "unsupported value for field `{}`",
            key
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[derive(Serialize, Default)]
    struct Sample {
        #[serde(skip_serializing_if = "is_zero")]
        limit: u32,
        #[serde(skip_serializing_if = "is_zero")]
        id_after: String,
        #[serde(skip_serializing_if = "is_zero")]
        include_date_time: bool,
        #[serde(skip_serializing_if = "is_zero")]
        days_of_week: Vec<u32>,
        name: String,
    }

    #[test]
    fn test_zero_fields_are_omitted() {
        let values = to_values(&Sample::default()).unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values.get("name"), Some(""));
        assert_eq!(values.get("limit"), None);
        assert_eq!(values.get("id_after"), None);
        assert_eq!(values.get("include_date_time"), None);
        assert!(values.get_all("days_of_week[]").is_empty());
    }

    #[test]
    fn test_non_zero_fields_use_wire_keys() {
        let values = to_values(&Sample {
            limit: 10,
            id_after: "user9".to_string(),
            include_date_time: true,
            name: "Front door".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(values.get("limit"), Some("10"));
        assert_eq!(values.get("id_after"), Some("user9"));
        assert_eq!(values.get("include_date_time"), Some("true"));
        assert_eq!(values.get("name"), Some("Front door"));
    }

    #[test]
    fn test_sequences_repeat_bracketed_key_in_order() {
        let values = to_values(&Sample {
            days_of_week: vec![5, 1, 3],
            ..Default::default()
        })
        .unwrap();
        assert_eq!(values.get_all("days_of_week[]"), vec!["5", "1", "3"]);
        assert!(values.get("days_of_week").is_none());
        assert!(values
            .encode()
            .contains("days_of_week%5B%5D=5&days_of_week%5B%5D=1&days_of_week%5B%5D=3"));
    }

    #[test]
    fn test_none_fields_are_omitted() {
        #[derive(Serialize)]
        struct WithOption {
            user_code: Option<String>,
        }
        let values = to_values(&WithOption { user_code: None }).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_maps_are_accepted() {
        let mut map = HashMap::new();
        map.insert("user_name", "Test User");
        let values = to_values(&map).unwrap();
        assert_eq!(values.get("user_name"), Some("Test User"));
    }

    #[test]
    fn test_nested_struct_is_rejected() {
        #[derive(Serialize)]
        struct Inner {
            start_time: String,
        }
        #[derive(Serialize)]
        struct Outer {
            schedule: Inner,
        }
        let err = to_values(&Outer {
            schedule: Inner {
                start_time: "09:00".to_string(),
            },
        })
        .unwrap_err();
        assert!(matches!(err, AkerunError::Encoding(_)));
        assert!(err.to_string().contains("schedule"));
    }

    #[test]
    fn test_nested_sequence_is_rejected() {
        #[derive(Serialize)]
        struct Grid {
            rows: Vec<Vec<u32>>,
        }
        let err = to_values(&Grid {
            rows: vec![vec![1]],
        })
        .unwrap_err();
        assert!(matches!(err, AkerunError::Encoding(_)));
    }

    #[test]
    fn test_non_object_is_rejected() {
        let err = to_values(&42u32).unwrap_err();
        assert!(matches!(err, AkerunError::Encoding(_)));
    }

    #[test]
    fn test_values_add_keeps_repeats() {
        let mut values = Values::new();
        values.add("akerun_ids[]", "dev1");
        values.add("akerun_ids[]", "dev2");
        assert_eq!(values.get("akerun_ids[]"), Some("dev1"));
        assert_eq!(values.get_all("akerun_ids[]"), vec!["dev1", "dev2"]);
        assert_eq!(
            values.encode(),
            "akerun_ids%5B%5D=dev1&akerun_ids%5B%5D=dev2"
        );
    }
}
