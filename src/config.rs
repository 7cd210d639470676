//! Client configuration.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::rest::endpoints::MEFRP_BASE_URL;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable holding the bearer token.
pub const TOKEN_ENV: &str = "MEFRP_TOKEN";
/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "MEFRP_BASE_URL";
/// Environment variable overriding the user agent.
pub const USER_AGENT_ENV: &str = "MEFRP_USER_AGENT";
/// Environment variable overriding the timeout, in whole seconds.
pub const TIMEOUT_ENV: &str = "MEFRP_TIMEOUT_SECS";

/// Connection settings owned by a [`MeFrpClient`](crate::rest::MeFrpClient).
///
/// Every field can be changed after the client is built; the token is also
/// replaced by login and magic-link verification.
#[derive(Clone)]
pub struct ClientConfig {
    /// Root URL every endpoint path is appended to.
    pub base_url: String,
    /// Bearer token sent in the `Authorization` header.
    pub token: SecretString,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration with the given token and default settings.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
            ..Self::default()
        }
    }

    /// Build a configuration from the `MEFRP_*` environment variables.
    ///
    /// Unset or unparsable variables fall back to the defaults; a missing
    /// token yields an anonymous configuration.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(token) = std::env::var(TOKEN_ENV) {
            config.token = SecretString::from(token);
        }
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            config.base_url = normalize_base_url(&url);
        }
        if let Ok(agent) = std::env::var(USER_AGENT_ENV) {
            config.user_agent = agent;
        }
        if let Some(secs) = std::env::var(TIMEOUT_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }

    /// Like [`ClientConfig::from_env`], but returns `None` when `MEFRP_TOKEN` is not set.
    pub fn try_from_env() -> Option<Self> {
        std::env::var(TOKEN_ENV).ok()?;
        Some(Self::from_env())
    }

    /// Expose the bearer token.
    pub fn expose_token(&self) -> &str {
        self.token.expose_secret()
    }

    /// Whether a non-empty token is configured.
    pub fn has_token(&self) -> bool {
        !self.token.expose_secret().is_empty()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: MEFRP_BASE_URL.to_string(),
            token: SecretString::from(String::new()),
            user_agent: default_user_agent(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// `mefrp-api-client/<version>`
pub fn default_user_agent() -> String {
    format!("mefrp-api-client/{}", env!("CARGO_PKG_VERSION"))
}

/// Strip trailing slashes so endpoint paths can be appended verbatim.
pub(crate) fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
