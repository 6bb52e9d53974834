//! Error types for the Akerun client.
//!
//! This module defines `AkerunError`, the single error type returned by
//! every client operation. Each variant maps to one failure boundary:
//! configuration, parameter encoding, transport, cancellation, the API
//! itself, and response decoding.
//!
//! # Security
//!
//! Bearer tokens and client secrets never appear in error messages. The
//! dispatcher does not put them anywhere an error could capture them.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Unified error type for all Akerun client operations.
///
/// Nothing in the client retries or logs these; they propagate to the
/// immediate caller, which owns the policy.
#[derive(Error, Debug)]
pub enum AkerunError {
    /// Configuration error - missing or invalid values.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// A parameter struct or path segment could not be encoded.
    ///
    /// Parameter shapes are static, so this always points at a programming
    /// error rather than bad runtime data.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// HTTP request failed during transmission.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// The call context was cancelled before the response completed.
    #[error("request cancelled")]
    Cancelled,

    /// The call context's deadline passed before the response completed.
    #[error("request deadline exceeded")]
    DeadlineExceeded,

    /// The Akerun API returned a non-success status code.
    #[error("Akerun API error {status}: {}", display_detail(.detail, .body))]
    Api {
        /// The HTTP status code returned.
        status: StatusCode,
        /// The raw response body (may be empty).
        body: String,
        /// The structured error body, when the response carried one.
        detail: Option<ApiErrorBody>,
    },

    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Error payload returned by the Akerun API alongside non-2xx responses.
///
/// Resource endpoints report a `message`; the OAuth layer in front of them
/// reports `error` and `error_description` (e.g. for an expired token).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiErrorBody {
    /// Human-readable error message.
    pub message: Option<String>,
    /// OAuth error code, such as `invalid_token`.
    pub error: Option<String>,
    /// OAuth error description.
    pub error_description: Option<String>,
}

impl ApiErrorBody {
    /// Returns the most descriptive message available.
    pub fn summary(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or(self.error_description.as_deref())
            .or(self.error.as_deref())
    }
}

fn display_detail(detail: &Option<ApiErrorBody>, body: &str) -> String {
    match detail.as_ref().and_then(ApiErrorBody::summary) {
        Some(summary) => summary.to_string(),
        None if body.is_empty() => "<empty body>".to_string(),
        None => body.to_string(),
    }
}

impl AkerunError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        AkerunError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        AkerunError::Config(message.into())
    }

    /// Creates an encoding error.
    pub fn encoding(message: impl Into<String>) -> Self {
        AkerunError::Encoding(message.into())
    }

    /// Creates an API error from a status and raw body.
    ///
    /// The body is decoded into [`ApiErrorBody`] when it is a JSON object;
    /// otherwise `detail` is `None` and only the raw text is kept.
    pub fn api(status: StatusCode, body: String) -> Self {
        let detail = if body.trim().is_empty() {
            None
        } else {
            serde_json::from_str::<ApiErrorBody>(&body).ok()
        };
        AkerunError::Api {
            status,
            body,
            detail,
        }
    }

    /// Returns the HTTP status for API errors.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AkerunError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the API reported the resource as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Returns true if the API rejected the bearer token.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// Returns true if the call ended because its context was cancelled or
    /// its deadline passed.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            AkerunError::Cancelled | AkerunError::DeadlineExceeded
        )
    }
}
