//! Error types for the ME Frp client library.

use thiserror::Error;

/// The main error type for all ME Frp client operations.
#[derive(Error, Debug)]
pub enum MeFrpError {
    /// Network-level failure (DNS, connect, TLS, timeout, broken body stream).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest_middleware::Error),

    /// The request body could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    /// Query parameters could not be encoded.
    #[error("failed to encode query string: {0}")]
    QueryEncoding(#[from] serde_urlencoded::ser::Error),

    /// The configured base URL plus the endpoint path is not a valid URL.
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// The response body did not match the expected envelope or payload shape.
    #[error("failed to decode response: {source}. Body: {body}")]
    Decoding {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
        /// Raw response body.
        body: String,
    },

    /// The server answered with HTTP 401; the token is missing, stale or invalid.
    #[error("unauthorized: invalid token")]
    Unauthorized,

    /// The envelope decoded but carried a non-200 code.
    #[error("ME Frp API error: {0}")]
    Api(ApiError),
}

impl From<reqwest::Error> for MeFrpError {
    fn from(err: reqwest::Error) -> Self {
        MeFrpError::Transport(reqwest_middleware::Error::Reqwest(err))
    }
}

impl MeFrpError {
    /// Whether the failure happened below the API layer and may succeed on a later attempt.
    ///
    /// The client itself never retries.
    pub fn is_transient(&self) -> bool {
        matches!(self, MeFrpError::Transport(_))
    }

    /// Whether the request hit the configured timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            MeFrpError::Transport(reqwest_middleware::Error::Reqwest(e)) => e.is_timeout(),
            _ => false,
        }
    }

    /// The business-level error, if the vendor rejected the call.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            MeFrpError::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// A rejection reported inside the response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The envelope `code` (anything other than 200).
    pub code: i64,
    /// The envelope `message`.
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)
    }
}

impl ApiError {
    /// Create a new API error from code and message.
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The server rejected the token at the envelope level.
    pub fn is_unauthenticated(&self) -> bool {
        self.code == error_codes::UNAUTHORIZED
    }

    /// The caller lacks permission for the operation.
    pub fn is_forbidden(&self) -> bool {
        self.code == error_codes::FORBIDDEN
    }

    /// The referenced resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.code == error_codes::NOT_FOUND
    }

    /// Too many requests from this account or address.
    pub fn is_rate_limit(&self) -> bool {
        self.code == error_codes::TOO_MANY_REQUESTS
    }

    /// The vendor failed internally.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.code)
    }
}

/// Envelope codes used by the ME Frp API.
pub mod error_codes {
    /// Success.
    pub const SUCCESS: i64 = 200;
    /// Malformed or invalid parameters.
    pub const BAD_REQUEST: i64 = 400;
    /// Missing or invalid token.
    pub const UNAUTHORIZED: i64 = 401;
    /// Insufficient permission.
    pub const FORBIDDEN: i64 = 403;
    /// Unknown resource.
    pub const NOT_FOUND: i64 = 404;
    /// Rate limited.
    pub const TOO_MANY_REQUESTS: i64 = 429;
    /// Internal server error.
    pub const INTERNAL_ERROR: i64 = 500;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = ApiError::new(400, "proxy name already exists");
        assert_eq!(error.to_string(), "proxy name already exists (code: 400)");
    }

    #[test]
    fn test_api_error_classification() {
        assert!(ApiError::new(401, "login required").is_unauthenticated());
        assert!(ApiError::new(403, "no").is_forbidden());
        assert!(ApiError::new(429, "slow down").is_rate_limit());
        assert!(ApiError::new(503, "maintenance").is_server_error());
        assert!(!ApiError::new(400, "bad").is_server_error());
    }

    #[test]
    fn test_error_display_wraps_api_error() {
        let err = MeFrpError::Api(ApiError::new(404, "not found"));
        assert_eq!(err.to_string(), "ME Frp API error: not found (code: 404)");
        assert!(err.api_error().is_some_and(ApiError::is_not_found));
        assert!(!err.is_transient());
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_unauthorized_is_not_transient() {
        let err = MeFrpError::Unauthorized;
        assert!(!err.is_transient());
        assert!(err.api_error().is_none());
    }
}
