//! ME Frp REST API client implementation.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::{ClientConfig, normalize_base_url};
use crate::error::MeFrpError;
use crate::types::Envelope;

/// The ME Frp REST API client.
///
/// Every operation issues exactly one HTTP request, decodes the
/// `{code, data, message}` envelope and returns the payload or an error.
/// Nothing is retried.
///
/// # Example
///
/// ```rust,no_run
/// use mefrp_api_client::rest::MeFrpClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = MeFrpClient::new("my-token");
///     let info = client.get_user_info().await?;
///     println!("{} has {} proxies", info.username, info.used_proxies);
///     Ok(())
/// }
/// ```
///
/// Logging in replaces the token in place:
///
/// ```rust,no_run
/// use mefrp_api_client::rest::MeFrpClient;
/// use mefrp_api_client::rest::auth::LoginRequest;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut client = MeFrpClient::builder().build();
///     client
///         .login(&LoginRequest::new("alice", "hunter2", "captcha-token"))
///         .await?;
///     let proxies = client.get_proxy_list().await?;
///     println!("{} proxies", proxies.proxies.len());
///     Ok(())
/// }
/// ```
///
/// Configuration changes take `&mut self`. A client shared between tasks must
/// be wrapped in the caller's own lock before its token can be rotated.
#[derive(Clone)]
pub struct MeFrpClient {
    http_client: ClientWithMiddleware,
    config: ClientConfig,
}

impl MeFrpClient {
    /// Create a client using the given bearer token and default settings.
    pub fn new(token: impl Into<String>) -> Self {
        Self::builder().token(token).build()
    }

    /// Create a client from the `MEFRP_*` environment variables.
    pub fn from_env() -> Self {
        Self::builder().config(ClientConfig::from_env()).build()
    }

    /// Create a new client builder.
    pub fn builder() -> MeFrpClientBuilder {
        MeFrpClientBuilder::new()
    }

    /// Current configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Base URL every endpoint path is appended to.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// User agent sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.config.user_agent
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Expose the bearer token currently in use.
    pub fn expose_token(&self) -> &str {
        self.config.expose_token()
    }

    /// Whether a non-empty token is configured.
    pub fn has_token(&self) -> bool {
        self.config.has_token()
    }

    /// Replace the bearer token used by subsequent requests.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.config.token = SecretString::from(token.into());
    }

    /// Replace the base URL used by subsequent requests.
    pub fn set_base_url(&mut self, url: impl AsRef<str>) {
        self.config.base_url = normalize_base_url(url.as_ref());
    }

    /// Replace the user agent used by subsequent requests.
    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) {
        self.config.user_agent = user_agent.into();
    }

    /// Replace the per-request timeout.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.config.timeout = timeout;
    }

    /// Issue one request and decode the response envelope.
    ///
    /// `path` is appended verbatim to the base URL and may already contain a
    /// query string. When `body` is present it is sent as JSON.
    ///
    /// An HTTP 401 short-circuits to [`MeFrpError::Unauthorized`] without
    /// reading the body. Any other status is decoded as an envelope; a non-200
    /// envelope `code` is *not* an error at this level, so callers decide via
    /// [`Envelope::into_data`] or [`Envelope::into_unit`].
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use mefrp_api_client::rest::MeFrpClient;
    /// use reqwest::Method;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = MeFrpClient::new("my-token");
    ///     let notice: String = client
    ///         .invoke::<String, ()>(Method::GET, "/auth/notice", None)
    ///         .await?
    ///         .into_data()?;
    ///     println!("{notice}");
    ///     Ok(())
    /// }
    /// ```
    pub async fn invoke<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Envelope<T>, MeFrpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let payload = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(MeFrpError::Encoding)?;

        let url = Url::parse(&format!("{}{}", self.config.base_url, path))?;

        let mut request = self
            .http_client
            .request(method.clone(), url)
            .bearer_auth(self.config.token.expose_secret())
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, self.config.user_agent.as_str())
            .timeout(self.config.timeout);
        if let Some(payload) = payload {
            request = request.body(payload);
        }

        tracing::debug!(%method, path, "sending ME Frp request");
        let response = request.send().await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(MeFrpError::Unauthorized);
        }

        let body = response.text().await?;
        let envelope = Envelope::from_body(&body)?;
        tracing::trace!(code = envelope.code, path, "decoded ME Frp envelope");
        Ok(envelope)
    }

    /// GET without a body.
    pub(crate) async fn get<T>(&self, path: &str) -> Result<Envelope<T>, MeFrpError>
    where
        T: DeserializeOwned,
    {
        self.invoke::<T, ()>(Method::GET, path, None).await
    }

    /// GET with query parameters encoded from `params`.
    pub(crate) async fn get_with_query<T, Q>(
        &self,
        path: &str,
        params: &Q,
    ) -> Result<Envelope<T>, MeFrpError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let path = path_with_query(path, params)?;
        self.get(&path).await
    }

    /// POST with a JSON body.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<Envelope<T>, MeFrpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.invoke(Method::POST, path, Some(body)).await
    }
}

/// Append `params` to `path` as a percent-encoded query string.
///
/// Fields skipped by their `skip_serializing_if` predicate do not appear at
/// all, and an empty parameter set leaves the path untouched.
pub(crate) fn path_with_query<Q>(path: &str, params: &Q) -> Result<String, MeFrpError>
where
    Q: Serialize + ?Sized,
{
    let query = serde_urlencoded::to_string(params)?;
    if query.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, query))
    }
}

impl Default for MeFrpClient {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl std::fmt::Debug for MeFrpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeFrpClient")
            .field("base_url", &self.config.base_url)
            .field("user_agent", &self.config.user_agent)
            .field("timeout", &self.config.timeout)
            .field("has_token", &self.config.has_token())
            .finish()
    }
}

/// Builder for [`MeFrpClient`].
pub struct MeFrpClientBuilder {
    config: ClientConfig,
    bypass_system_proxy: bool,
}

impl MeFrpClientBuilder {
    /// Create a new builder with default settings and no token.
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            bypass_system_proxy: false,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the bearer token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config.token = SecretString::from(token.into());
        self
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl AsRef<str>) -> Self {
        self.config.base_url = normalize_base_url(url.as_ref());
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Ignore `HTTP_PROXY`/`HTTPS_PROXY` and connect directly.
    pub fn bypass_system_proxy(mut self, bypass: bool) -> Self {
        self.bypass_system_proxy = bypass;
        self
    }

    /// Build the client.
    pub fn build(self) -> MeFrpClient {
        let mut builder = reqwest::Client::builder();
        if self.bypass_system_proxy {
            builder = builder.no_proxy();
        }
        let reqwest_client = builder.build().unwrap_or_else(|_| reqwest::Client::new());

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        MeFrpClient {
            http_client: client,
            config: self.config,
        }
    }
}

impl Default for MeFrpClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Filter {
        #[serde(skip_serializing_if = "String::is_empty")]
        placement: String,
        #[serde(skip_serializing_if = "crate::types::serde_helpers::is_zero")]
        slot_id: i64,
    }

    #[test]
    fn test_path_with_query_omits_unset_filters() {
        let filter = Filter {
            placement: String::new(),
            slot_id: 0,
        };
        assert_eq!(path_with_query("/auth/ads/query", &filter).unwrap(), "/auth/ads/query");
    }

    #[test]
    fn test_path_with_query_percent_encodes() {
        let filter = Filter {
            placement: "home top&side".to_string(),
            slot_id: 42,
        };
        assert_eq!(
            path_with_query("/auth/ads/query", &filter).unwrap(),
            "/auth/ads/query?placement=home+top%26side&slotId=42"
        );
    }

    #[test]
    fn test_setters_update_config() {
        let mut client = MeFrpClient::builder()
            .base_url("http://localhost:9000/api/")
            .timeout(Duration::from_secs(3))
            .build();
        assert_eq!(client.base_url(), "http://localhost:9000/api");
        assert!(!client.has_token());

        client.set_token("fresh");
        client.set_base_url("http://127.0.0.1:1");
        client.set_user_agent("tests/1.0");
        client.set_timeout(Duration::from_millis(250));

        assert_eq!(client.expose_token(), "fresh");
        assert_eq!(client.base_url(), "http://127.0.0.1:1");
        assert_eq!(client.user_agent(), "tests/1.0");
        assert_eq!(client.timeout(), Duration::from_millis(250));
    }

    #[test]
    fn test_debug_hides_token() {
        let client = MeFrpClient::new("very-secret");
        let debug_str = format!("{:?}", client);
        assert!(!debug_str.contains("very-secret"));
        assert!(debug_str.contains("has_token: true"));
    }
}
