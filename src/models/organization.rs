//! Organization models for the Akerun API.

use serde::{Deserialize, Serialize};

use crate::encode::is_zero;
use crate::envelope::{null_as_default, Resource};

/// An organization as listed by `GET /organizations`.
///
/// The list endpoint only returns IDs; use
/// [`get_organization`](crate::akerun_client::AkerunClient::get_organization)
/// for the name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationSummary {
    /// Organization ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
}

impl Resource for OrganizationSummary {
    const KEY: &'static str = "organization";
    const COLLECTION_KEY: &'static str = "organizations";
}

/// Detailed organization information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    /// Organization ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// Organization name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

impl Resource for Organization {
    const KEY: &'static str = "organization";
    const COLLECTION_KEY: &'static str = "organizations";
}

/// Query parameters for listing organizations.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrganizationsParameter {
    /// Maximum number of organizations to return.
    #[serde(skip_serializing_if = "is_zero")]
    pub limit: u32,

    /// Return organizations after this ID.
    #[serde(skip_serializing_if = "is_zero")]
    pub id_after: String,

    /// Return organizations before this ID.
    #[serde(skip_serializing_if = "is_zero")]
    pub id_before: String,
}
