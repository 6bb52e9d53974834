//! Key models for the Akerun API.
//!
//! A key grants one user access to one Akerun device, either permanently,
//! for a fixed window (`temporary_schedule`) or on repeating days
//! (`recurring_schedule`). Which schedule applies is named by
//! `schedule_type`; the other schedule is usually `null`.

use serde::{Deserialize, Serialize};

use crate::encode::is_zero;
use crate::envelope::{null_as_default, Resource};

/// An access key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Key {
    /// Key ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// Role of the key holder on the device.
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,

    /// `permanent`, `temporary` or `recurring`.
    #[serde(deserialize_with = "null_as_default")]
    pub schedule_type: String,

    /// Validity window for temporary keys.
    pub temporary_schedule: Option<TemporarySchedule>,

    /// Weekly schedule for recurring keys.
    pub recurring_schedule: Option<RecurringSchedule>,

    /// Shareable key URL.
    pub keys: Option<KeyAccess>,

    /// Device the key opens.
    pub akerun: Option<KeyAkerun>,

    /// User holding the key.
    pub user: Option<KeyUser>,
}

impl Resource for Key {
    const KEY: &'static str = "key";
    const COLLECTION_KEY: &'static str = "keys";
}

/// Fixed validity window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemporarySchedule {
    /// Start of validity (ISO 8601).
    #[serde(rename = "start_datetime", deserialize_with = "null_as_default")]
    pub start_date_time: String,

    /// End of validity (ISO 8601).
    #[serde(rename = "end_datetime", deserialize_with = "null_as_default")]
    pub end_date_time: String,
}

/// Weekly repeating schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecurringSchedule {
    /// Days of the week, 0 = Sunday.
    #[serde(deserialize_with = "null_as_default")]
    pub days_of_week: Vec<u32>,

    /// Daily start time (`HH:MM`).
    #[serde(deserialize_with = "null_as_default")]
    pub start_time: String,

    /// Daily end time (`HH:MM`).
    #[serde(deserialize_with = "null_as_default")]
    pub end_time: String,
}

/// Shareable key link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyAccess {
    /// URL the holder opens to use the key.
    #[serde(deserialize_with = "null_as_default")]
    pub key_url: String,

    /// Whether the URL requires a password.
    #[serde(deserialize_with = "null_as_default")]
    pub password_protected: bool,
}

/// Device reference embedded in a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyAkerun {
    /// Device ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Device name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// User reference embedded in a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyUser {
    /// User ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// User name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// Query parameters for listing keys.
#[derive(Debug, Clone, Default, Serialize)]
pub struct KeysParameter {
    /// Maximum number of keys to return.
    #[serde(skip_serializing_if = "is_zero")]
    pub limit: u32,

    /// Return keys after this ID.
    #[serde(skip_serializing_if = "is_zero")]
    pub id_after: String,

    /// Return keys before this ID.
    #[serde(skip_serializing_if = "is_zero")]
    pub id_before: String,

    /// Only keys for this device.
    #[serde(skip_serializing_if = "is_zero")]
    pub akerun_id: String,

    /// Only keys held by this user.
    #[serde(skip_serializing_if = "is_zero")]
    pub user_id: String,
}

/// Fields for issuing a key.
///
/// `user_id` and `akerun_id` are always sent. Schedule fields apply
/// according to `schedule_type`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateKeyParameter {
    /// User receiving the key.
    pub user_id: String,

    /// Device the key opens.
    pub akerun_id: String,

    /// `permanent`, `temporary` or `recurring`.
    #[serde(skip_serializing_if = "is_zero")]
    pub schedule_type: String,

    /// Start of validity for temporary keys.
    #[serde(rename = "start_datetime", skip_serializing_if = "is_zero")]
    pub start_date_time: String,

    /// End of validity for temporary keys.
    #[serde(rename = "end_datetime", skip_serializing_if = "is_zero")]
    pub end_date_time: String,

    /// Days of the week for recurring keys, sent as `days_of_week[]`.
    #[serde(skip_serializing_if = "is_zero")]
    pub days_of_week: Vec<u32>,

    /// Daily start time for recurring keys.
    #[serde(skip_serializing_if = "is_zero")]
    pub start_time: String,

    /// Daily end time for recurring keys.
    #[serde(skip_serializing_if = "is_zero")]
    pub end_time: String,
}

/// Schedule changes for an existing key. Zero-valued fields are left as-is.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateKeyParameter {
    /// New schedule type.
    #[serde(skip_serializing_if = "is_zero")]
    pub schedule_type: String,

    /// New start of validity.
    #[serde(rename = "start_datetime", skip_serializing_if = "is_zero")]
    pub start_date_time: String,

    /// New end of validity.
    #[serde(rename = "end_datetime", skip_serializing_if = "is_zero")]
    pub end_date_time: String,

    /// New days of the week, sent as `days_of_week[]`.
    #[serde(skip_serializing_if = "is_zero")]
    pub days_of_week: Vec<u32>,

    /// New daily start time.
    #[serde(skip_serializing_if = "is_zero")]
    pub start_time: String,

    /// New daily end time.
    #[serde(skip_serializing_if = "is_zero")]
    pub end_time: String,
}
