//! Configuration for the Akerun client.
//!
//! The library never reads the environment on its own. Applications build a
//! [`Config`] once at startup, either directly with [`Config::new`] or from a
//! string-keyed source with [`Config::from_source`] / [`Config::from_env`],
//! and hand it to [`AkerunClient::new`](crate::akerun_client::AkerunClient::new).

use std::env;
use std::fmt;

use url::Url;

use crate::error::AkerunError;

/// Production API host.
pub const DEFAULT_API_URL: &str = "https://api.akerun.com";

/// Version segment prefixed to every API path.
pub const DEFAULT_API_VERSION: &str = "v3";

/// Overrides the API host (used for staging and mock servers).
pub const ENV_API_URL: &str = "AKERUN_API_URL";
/// OAuth client ID.
pub const ENV_CLIENT_ID: &str = "AKERUN_CLIENT_ID";
/// OAuth client secret.
pub const ENV_CLIENT_SECRET: &str = "AKERUN_CLIENT_SECRET";
/// OAuth redirect (callback) URL.
pub const ENV_REDIRECT_URL: &str = "AKERUN_REDIRECT_URL";

/// Configuration for connecting to the Akerun API.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the API host, without a trailing slash.
    pub api_url: String,

    /// Version path segment, `v3` unless overridden.
    pub api_version: String,

    /// OAuth application credentials, if the application registered one.
    pub oauth: Option<OAuthCredentials>,
}

/// OAuth application credentials used for the authorization-code flow.
///
/// The client secret is never printed; `Debug` redacts it.
#[derive(Clone)]
pub struct OAuthCredentials {
    /// Application client ID.
    pub client_id: String,

    /// Application client secret.
    /// This value must never be logged or included in error messages.
    pub client_secret: String,

    /// Redirect URL registered for the application.
    pub redirect_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            oauth: None,
        }
    }
}

impl Config {
    /// Creates a configuration for the given API host.
    ///
    /// # Errors
    ///
    /// Returns `AkerunError::Config` if the URL does not use http(s).
    pub fn new(api_url: impl Into<String>) -> Result<Self, AkerunError> {
        Ok(Config {
            api_url: Self::validate_api_url(api_url.into())?,
            ..Config::default()
        })
    }

    /// Overrides the version segment.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Attaches OAuth application credentials.
    pub fn with_oauth(mut self, oauth: OAuthCredentials) -> Self {
        self.oauth = Some(oauth);
        self
    }

    /// Loads configuration from the process environment.
    ///
    /// Call this once at the application boundary, after
    /// `dotenvy::dotenv()` if a `.env` file should be honoured.
    ///
    /// # Errors
    ///
    /// See [`Config::from_source`].
    pub fn from_env() -> Result<Self, AkerunError> {
        Self::from_source(|name| env::var(name).ok())
    }

    /// Loads configuration from a string-keyed source.
    ///
    /// # Recognised keys
    ///
    /// - `AKERUN_API_URL`: optional, defaults to [`DEFAULT_API_URL`]
    /// - `AKERUN_CLIENT_ID`, `AKERUN_CLIENT_SECRET`, `AKERUN_REDIRECT_URL`:
    ///   optional as a group; if any one is set, all three are required
    ///
    /// Blank values count as missing.
    ///
    /// # Errors
    ///
    /// Returns `AkerunError::Config` if the URL is invalid or the OAuth
    /// credentials are only partially present.
    pub fn from_source<F>(lookup: F) -> Result<Self, AkerunError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mut config = match get(ENV_API_URL) {
            Some(url) => Config::new(url)?,
            None => Config::default(),
        };

        let client_id = get(ENV_CLIENT_ID);
        let client_secret = get(ENV_CLIENT_SECRET);
        let redirect_url = get(ENV_REDIRECT_URL);

        if client_id.is_some() || client_secret.is_some() || redirect_url.is_some() {
            let client_id = client_id.ok_or_else(|| AkerunError::missing_env(ENV_CLIENT_ID))?;
            let client_secret =
                client_secret.ok_or_else(|| AkerunError::missing_env(ENV_CLIENT_SECRET))?;
            let redirect_url =
                redirect_url.ok_or_else(|| AkerunError::missing_env(ENV_REDIRECT_URL))?;
            config.oauth = Some(OAuthCredentials {
                client_id,
                client_secret,
                redirect_url,
            });
        }

        Ok(config)
    }

    /// Validates and normalizes the API URL.
    fn validate_api_url(url: String) -> Result<String, AkerunError> {
        let url = url.trim().trim_end_matches('/').to_string();

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AkerunError::invalid_config(
                "AKERUN_API_URL must start with http:// or https://",
            ));
        }

        Url::parse(&url)
            .map_err(|e| AkerunError::invalid_config(format!("invalid AKERUN_API_URL: {}", e)))?;

        Ok(url)
    }
}

impl OAuthCredentials {
    /// Creates a credential set.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_url: impl Into<String>,
    ) -> Self {
        OAuthCredentials {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_url: redirect_url.into(),
        }
    }

    /// Builds the URL the resource owner visits to grant access.
    ///
    /// Exchanging the returned code for a token is left to the
    /// application's OAuth library.
    ///
    /// # Errors
    ///
    /// Returns `AkerunError::Config` if `api_url` cannot be parsed.
    pub fn authorize_url(&self, api_url: &str, state: &str) -> Result<Url, AkerunError> {
        let mut url = Url::parse(api_url.trim_end_matches('/'))
            .map_err(|e| AkerunError::invalid_config(format!("invalid API URL: {}", e)))?;
        url.set_path("/oauth/authorize");
        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.redirect_url)
            .append_pair("state", state);
        Ok(url)
    }
}

impl fmt::Debug for OAuthCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("redirect_url", &self.redirect_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_validate_api_url_removes_trailing_slash() {
        let result = Config::validate_api_url("https://api.example.com/".to_string()).unwrap();
        assert_eq!(result, "https://api.example.com");
    }

    #[test]
    fn test_validate_api_url_requires_scheme() {
        let result = Config::validate_api_url("api.example.com".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_from_source_defaults() {
        let config = Config::from_source(source(&[])).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.api_version, DEFAULT_API_VERSION);
        assert!(config.oauth.is_none());
    }

    #[test]
    fn test_from_source_overrides_url() {
        let config =
            Config::from_source(source(&[(ENV_API_URL, "http://127.0.0.1:8080/")])).unwrap();
        assert_eq!(config.api_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_from_source_blank_url_uses_default() {
        let config = Config::from_source(source(&[(ENV_API_URL, "  ")])).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_from_source_reads_oauth_credentials() {
        let config = Config::from_source(source(&[
            (ENV_CLIENT_ID, "testId"),
            (ENV_CLIENT_SECRET, "testPass"),
            (ENV_REDIRECT_URL, "http://localhost:8080/callback"),
        ]))
        .unwrap();
        let oauth = config.oauth.unwrap();
        assert_eq!(oauth.client_id, "testId");
        assert_eq!(oauth.redirect_url, "http://localhost:8080/callback");
    }

    #[test]
    fn test_from_source_rejects_partial_oauth_credentials() {
        let err = Config::from_source(source(&[(ENV_CLIENT_ID, "testId")])).unwrap_err();
        assert!(err.to_string().contains(ENV_CLIENT_SECRET));
    }

    #[test]
    fn test_debug_redacts_client_secret() {
        let oauth = OAuthCredentials::new("id", "very-secret", "http://localhost/cb");
        let debug = format!("{:?}", oauth);
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_authorize_url() {
        let oauth = OAuthCredentials::new("testId", "testPass", "http://localhost:8080/callback");
        let url = oauth
            .authorize_url("https://api.akerun.com/", "xyz")
            .unwrap();
        assert_eq!(url.path(), "/oauth/authorize");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("response_type".to_string(), "code".to_string()),
                ("client_id".to_string(), "testId".to_string()),
                (
                    "redirect_uri".to_string(),
                    "http://localhost:8080/callback".to_string()
                ),
                ("state".to_string(), "xyz".to_string()),
            ]
        );
        assert!(!url.as_str().contains("testPass"));
    }
}
