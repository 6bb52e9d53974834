//! Akerun group models.
//!
//! An Akerun group is a named set of devices within an organization.

use serde::{Deserialize, Serialize};

use crate::envelope::{null_as_default, Resource};

/// A device group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AkerunGroup {
    /// Group ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// Group name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Free-form note.
    pub memo: Option<String>,
}

impl Resource for AkerunGroup {
    const KEY: &'static str = "akerun_group";
    const COLLECTION_KEY: &'static str = "akerun_groups";
}

/// A device group together with its member devices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AkerunGroupDetailed {
    /// Group ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// Group name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Free-form note.
    pub memo: Option<String>,

    /// Member devices.
    #[serde(deserialize_with = "null_as_default")]
    pub akeruns: Vec<GroupAkerun>,
}

impl Resource for AkerunGroupDetailed {
    const KEY: &'static str = "akerun_group";
    const COLLECTION_KEY: &'static str = "akerun_groups";
}

/// A member device of a group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupAkerun {
    /// Device ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// Device name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Device image URL.
    pub image_url: Option<String>,
}

/// Fields for creating a group. Both are always sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AkerunGroupCreateParameter {
    /// Group name.
    pub name: String,

    /// Free-form note.
    pub memo: String,
}

/// Fields for updating a group. Both are always sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AkerunGroupUpdateParameter {
    /// Group name.
    pub name: String,

    /// Free-form note.
    pub memo: String,
}

/// Device IDs to add to or remove from a group, sent as `akerun_ids[]`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AkerunIdsParameter {
    /// Device IDs, in the order they are sent.
    pub akerun_ids: Vec<String>,
}

impl AkerunIdsParameter {
    /// Builds the parameter from any list of IDs.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AkerunIdsParameter {
            akerun_ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}
