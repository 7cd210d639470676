//! The `{code, data, message}` wrapper around every ME Frp response.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, MeFrpError, error_codes};

/// A decoded response envelope.
///
/// `data` is only populated when `code` is 200 and the payload was neither
/// absent nor `null`. Failed envelopes never attempt to decode `data`, since
/// its shape on failure is unspecified.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    /// Status code; 200 means success.
    pub code: i64,
    /// Operation-specific payload.
    pub data: Option<T>,
    /// Human-readable detail, usually empty on success.
    pub message: String,
}

/// Shape used for the first decoding pass, before the payload type is applied.
#[derive(Debug, Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    data: serde_json::Value,
    #[serde(default)]
    message: String,
}

impl<T> Envelope<T> {
    /// Whether the envelope signals success.
    pub fn is_success(&self) -> bool {
        self.code == error_codes::SUCCESS
    }

    /// Convert into the payload, or an [`ApiError`] when `code != 200`.
    pub fn into_result(self) -> Result<Option<T>, MeFrpError> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(MeFrpError::Api(ApiError::new(self.code, self.message)))
        }
    }

    /// Convert into the payload, substituting the type's zero value when the
    /// server sent no data.
    pub fn into_data(self) -> Result<T, MeFrpError>
    where
        T: Default,
    {
        self.into_result().map(Option::unwrap_or_default)
    }

    /// Check the code and discard the payload.
    pub fn into_unit(self) -> Result<(), MeFrpError> {
        self.into_result().map(drop)
    }
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Decode a response body.
    ///
    /// The body must be a JSON object; a missing `code` decodes as 0 and is
    /// therefore reported as a failure by [`Envelope::into_result`].
    pub fn from_body(body: &str) -> Result<Self, MeFrpError> {
        let raw: RawEnvelope = serde_json::from_str(body).map_err(|source| MeFrpError::Decoding {
            source,
            body: body.to_string(),
        })?;

        let data = if raw.code != error_codes::SUCCESS || raw.data.is_null() {
            None
        } else {
            let decoded = serde_json::from_value(raw.data).map_err(|source| MeFrpError::Decoding {
                source,
                body: body.to_string(),
            })?;
            Some(decoded)
        };

        Ok(Envelope {
            code: raw.code,
            data,
            message: raw.message,
        })
    }
}

/// `{ "token": "..." }` payload shared by login and the frp token endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct TokenData {
    #[serde(default)]
    pub token: String,
}
