//! Resource methods for the Akerun API.
//!
//! Each submodule adds one endpoint family to
//! [`AkerunClient`](crate::akerun_client::AkerunClient). Every method builds
//! its path from fixed collection names and caller-supplied IDs, encodes its
//! parameters (query string for `GET`, form body otherwise), and goes
//! through the shared dispatcher.

mod akerun_group;
mod key;
mod organization;
mod user;

pub(crate) const ORGANIZATIONS: &str = "organizations";
pub(crate) const USERS: &str = "users";
pub(crate) const KEYS: &str = "keys";
pub(crate) const AKERUN_GROUPS: &str = "akerun_groups";
pub(crate) const AKERUNS: &str = "akeruns";
