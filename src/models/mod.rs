//! Data models for the Akerun API.
//!
//! This module contains the entities returned by the API, the parameter
//! structs each operation encodes, and the caller-supplied [`Token`].

mod akerun_group;
mod key;
mod organization;
mod token;
mod user;

pub use akerun_group::*;
pub use key::*;
pub use organization::*;
pub use token::*;
pub use user::*;
