//! # Akerun
//!
//! A typed async client for the Akerun access-control API.
//!
//! Every operation is one authenticated request/response round trip against
//! the versioned REST endpoint (`/v3`): organizations, users, keys and
//! device groups ("Akerun groups").
//!
//! ## Architecture
//!
//! - [`config`] - Explicit configuration, loadable from a string-keyed source
//! - [`error`] - The `AkerunError` type
//! - [`context`] - Per-call cancellation and deadlines
//! - [`encode`] - Parameter structs to query/form pairs
//! - [`envelope`] - Unwrapping `{"user": {...}}` / `{"users": [...]}`
//! - [`akerun_client`] - The client and its request dispatcher
//! - [`models`] - Entities, parameter structs and the bearer [`Token`](models::Token)
//!
//! Resource methods live on [`AkerunClient`](akerun_client::AkerunClient).
//!
//! ## Authentication
//!
//! The client does not acquire or refresh tokens. Obtain an OAuth2 access
//! token with the authorization-code flow of your choice and pass it to
//! every call. An expired token surfaces as an API error with status 401.
//!
//! ## Example
//!
//! ```ignore
//! use akerun::akerun_client::AkerunClient;
//! use akerun::config::Config;
//! use akerun::context::CallContext;
//! use akerun::models::{Token, UsersParameter};
//!
//! async fn example(access_token: &str) -> Result<(), akerun::error::AkerunError> {
//!     let client = AkerunClient::new(&Config::default())?;
//!     let token = Token::bearer(access_token);
//!     let ctx = CallContext::new().with_timeout(std::time::Duration::from_secs(10));
//!
//!     let params = UsersParameter { limit: 10, ..Default::default() };
//!     for user in client.list_users(&ctx, &token, "O-123", params).await? {
//!         println!("{}: {}", user.id, user.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod akerun_client;
mod api;
pub mod config;
pub mod context;
pub mod encode;
pub mod envelope;
pub mod error;
pub mod models;

pub use akerun_client::AkerunClient;
pub use context::CallContext;
pub use error::AkerunError;
