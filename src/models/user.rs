//! User models for the Akerun API.
//!
//! Users belong to an organization. The parameter structs map one-to-one to
//! the list, register, invite and update endpoints; the user name and ID that
//! those endpoints require are passed as method arguments instead.

use serde::{Deserialize, Serialize};

use crate::encode::is_zero;
use crate::envelope::{null_as_default, Resource};

/// A member of an organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// User ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// Display name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Email address.
    pub mail: Option<String>,

    /// Profile image URL.
    pub image_url: Option<String>,

    /// Authority within the organization (e.g. `owner`, `manager`, `general`).
    #[serde(deserialize_with = "null_as_default")]
    pub authority: String,

    /// Organization-specific user code.
    pub code: Option<String>,

    /// Creation timestamp, present when requested with `include_date_time`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Last update timestamp, present when requested with `include_date_time`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// NFC cards registered to the user.
    #[serde(deserialize_with = "null_as_default")]
    pub nfcs: Vec<Nfc>,
}

impl Resource for User {
    const KEY: &'static str = "user";
    const COLLECTION_KEY: &'static str = "users";
}

/// An NFC card registered to a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nfc {
    /// Card ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// Card label.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// Query parameters for listing users.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UsersParameter {
    /// Maximum number of users to return.
    #[serde(skip_serializing_if = "is_zero")]
    pub limit: u32,

    /// Return users after this ID.
    #[serde(skip_serializing_if = "is_zero")]
    pub id_after: String,

    /// Return users before this ID.
    #[serde(skip_serializing_if = "is_zero")]
    pub id_before: String,

    /// Filter by user code.
    #[serde(skip_serializing_if = "is_zero")]
    pub user_code: String,

    /// Filter by email address.
    #[serde(skip_serializing_if = "is_zero")]
    pub user_mail: String,

    /// Include `created_at` / `updated_at` in the response.
    #[serde(skip_serializing_if = "is_zero")]
    pub include_date_time: bool,
}

/// Optional fields for registering a user.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegisterUserParameter {
    /// Email address.
    #[serde(skip_serializing_if = "is_zero")]
    pub user_mail: String,

    /// Profile image URL.
    #[serde(skip_serializing_if = "is_zero")]
    pub user_image: String,

    /// Authority to grant.
    #[serde(skip_serializing_if = "is_zero")]
    pub user_authority: String,

    /// Organization-specific user code.
    #[serde(skip_serializing_if = "is_zero")]
    pub user_code: String,
}

/// Optional fields for inviting an existing Akerun user.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InviteUserParameter {
    /// Profile image URL.
    #[serde(skip_serializing_if = "is_zero")]
    pub user_image: String,

    /// Authority to grant.
    #[serde(skip_serializing_if = "is_zero")]
    pub user_authority: String,

    /// Organization-specific user code.
    #[serde(skip_serializing_if = "is_zero")]
    pub user_code: String,
}

/// Fields to change on an existing user. Zero-valued fields are left as-is.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateUserParameter {
    /// New display name.
    #[serde(skip_serializing_if = "is_zero")]
    pub user_name: String,

    /// New email address.
    #[serde(skip_serializing_if = "is_zero")]
    pub user_mail: String,

    /// New profile image URL.
    #[serde(skip_serializing_if = "is_zero")]
    pub user_image: String,

    /// New authority.
    #[serde(skip_serializing_if = "is_zero")]
    pub user_authority: String,

    /// New user code.
    #[serde(skip_serializing_if = "is_zero")]
    pub user_code: String,
}
