//! OAuth2 bearer token supplied by the caller.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An OAuth2 access token.
///
/// Tokens are obtained and refreshed outside this crate and passed to every
/// call. The client only reads `access_token`. Deserializes directly from a
/// standard token endpoint response.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Bearer credential sent in the `Authorization` header.
    pub access_token: String,

    /// Token type reported by the authorization server.
    #[serde(default = "default_token_type")]
    pub token_type: String,

    /// Refresh token, if one was issued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// Lifetime in seconds at issue time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

impl Token {
    /// Wraps a bare access token.
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Token {
            access_token: access_token.into(),
            token_type: default_token_type(),
            refresh_token: None,
            expires_in: None,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "[REDACTED]"))
            .field("expires_in", &self.expires_in)
            .finish()
    }
}
