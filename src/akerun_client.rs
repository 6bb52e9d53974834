//! HTTP client for the Akerun API.
//!
//! This module provides the `AkerunClient` struct and the dispatcher every
//! resource method goes through. A call builds the URL from the base URL,
//! the version segment and the resource path, attaches parameters and the
//! caller's bearer token, sends the request under the caller's
//! [`CallContext`], and returns the body of a 2xx response.
//!
//! There is no retry, backoff or internal timeout. Deadlines come from the
//! `CallContext`.
//!
//! # Security
//!
//! Bearer tokens are never logged.

use reqwest::{Client, Method};
use url::Url;

use crate::config::Config;
use crate::context::CallContext;
use crate::encode::Values;
use crate::envelope::{self, Resource};
use crate::error::AkerunError;
use crate::models::Token;

/// User-Agent sent with every request.
const USER_AGENT: &str = concat!("akerun-rs/", env!("CARGO_PKG_VERSION"));

/// Where a call's encoded parameters go.
///
/// Resource methods choose: query string for reads, form body for writes.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Params<'a> {
    /// No parameters.
    None,
    /// Appended to the URL query string.
    Query(&'a Values),
    /// Sent as an `application/x-www-form-urlencoded` body.
    Form(&'a Values),
}

/// HTTP client for the Akerun API.
///
/// Holds no mutable state. Clones share the underlying connection pool, so
/// one client can serve any number of concurrent tasks.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// let client = AkerunClient::new(&config)?;
/// let token = Token::bearer(access_token);
///
/// let users = client
///     .list_users(&CallContext::new(), &token, "O-123", UsersParameter::default())
///     .await?;
/// ```
#[derive(Clone, Debug)]
pub struct AkerunClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// API host, e.g. `https://api.akerun.com`.
    base_url: Url,

    /// Version segment placed before every resource path.
    api_version: String,
}

impl AkerunClient {
    /// Creates a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `AkerunError::Config` if the API URL is unusable and
    /// `AkerunError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(config: &Config) -> Result<Self, AkerunError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(AkerunError::HttpClient)?;

        Self::with_http_client(config, http)
    }

    /// Creates a client over a caller-provided `reqwest::Client`.
    ///
    /// Use this to share a connection pool or to customise TLS and proxies.
    ///
    /// # Errors
    ///
    /// Returns `AkerunError::Config` if the API URL is unusable.
    pub fn with_http_client(config: &Config, http: Client) -> Result<Self, AkerunError> {
        let base_url = Url::parse(&config.api_url)
            .map_err(|e| AkerunError::invalid_config(format!("invalid API URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(AkerunError::invalid_config(
                "API URL cannot be used as a base URL",
            ));
        }

        Ok(Self {
            http,
            base_url,
            api_version: config.api_version.clone(),
        })
    }

    /// Returns the API host this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds the full URL for a resource path.
    ///
    /// The version is split on `/`. Each path segment is pushed whole and
    /// percent-encoded, so a `/` or `?` inside an ID stays inside that
    /// segment. Empty and `.` segments are dropped; `..` is rejected.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, AkerunError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                AkerunError::invalid_config("API URL cannot be used as a base URL")
            })?;
            path.pop_if_empty();

            let parts = self
                .api_version
                .split('/')
                .chain(segments.iter().copied());
            for part in parts {
                match part {
                    "" | "." => continue,
                    ".." => {
                        return Err(AkerunError::encoding(
                            "path segment `..` is not allowed",
                        ))
                    }
                    part => {
                        path.push(part);
                    }
                }
            }
        }
        Ok(url)
    }

    /// Sends one versioned API call and returns the 2xx response body.
    ///
    /// Non-2xx responses become `AkerunError::Api`. The whole exchange,
    /// including reading the body, runs under `ctx`.
    pub(crate) async fn call_version(
        &self,
        ctx: &CallContext,
        method: Method,
        segments: &[&str],
        token: &Token,
        params: Params<'_>,
    ) -> Result<String, AkerunError> {
        let url = self.endpoint(segments)?;

        tracing::debug!(
            method = %method,
            path = %url.path(),
            "Making Akerun API request"
        );

        let mut req = self
            .http
            .request(method, url)
            .bearer_auth(&token.access_token);

        match params {
            Params::None => {}
            Params::Query(values) if values.is_empty() => {}
            Params::Query(values) => req = req.query(values),
            Params::Form(values) if values.is_empty() => {}
            Params::Form(values) => req = req.form(values),
        }

        ctx.run(async move {
            let response = req.send().await.map_err(AkerunError::Http)?;
            let status = response.status();

            tracing::debug!(status = %status, "Akerun API response");

            let body = response.text().await.map_err(AkerunError::Http)?;

            if !status.is_success() {
                return Err(AkerunError::api(status, body));
            }

            tracing::trace!(body = %body, "Akerun API response body");

            Ok(body)
        })
        .await
    }

    /// Calls an endpoint that returns one enveloped resource.
    pub(crate) async fn call_one<T: Resource>(
        &self,
        ctx: &CallContext,
        method: Method,
        segments: &[&str],
        token: &Token,
        params: Params<'_>,
    ) -> Result<T, AkerunError> {
        let body = self
            .call_version(ctx, method, segments, token, params)
            .await?;
        envelope::decode_one(&body)
    }

    /// Calls an endpoint that returns an enveloped collection.
    pub(crate) async fn call_many<T: Resource>(
        &self,
        ctx: &CallContext,
        method: Method,
        segments: &[&str],
        token: &Token,
        params: Params<'_>,
    ) -> Result<Vec<T>, AkerunError> {
        let body = self
            .call_version(ctx, method, segments, token, params)
            .await?;
        envelope::decode_many(&body)
    }

    /// Calls an endpoint that may or may not return an enveloped resource.
    ///
    /// A blank 2xx body yields `None`; anything else must decode as `T`.
    pub(crate) async fn call_optional<T: Resource>(
        &self,
        ctx: &CallContext,
        method: Method,
        segments: &[&str],
        token: &Token,
        params: Params<'_>,
    ) -> Result<Option<T>, AkerunError> {
        let body = self
            .call_version(ctx, method, segments, token, params)
            .await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        envelope::decode_one(&body).map(Some)
    }

    /// Calls an endpoint whose response body is not needed.
    ///
    /// The body is discarded without decoding, so an empty 2xx succeeds.
    pub(crate) async fn call_empty(
        &self,
        ctx: &CallContext,
        method: Method,
        segments: &[&str],
        token: &Token,
        params: Params<'_>,
    ) -> Result<(), AkerunError> {
        self.call_version(ctx, method, segments, token, params)
            .await
            .map(|_| ())
    }
}
