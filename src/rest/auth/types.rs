//! Types for registration, login and password endpoints.

use serde::{Deserialize, Serialize};

/// Request for a registration email code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailCodeRequest {
    /// Address the code is sent to.
    pub email: String,
    /// Human-verification token.
    pub captcha_token: String,
}

impl EmailCodeRequest {
    /// Create a new email code request.
    pub fn new(email: impl Into<String>, captcha_token: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            captcha_token: captcha_token.into(),
        }
    }
}

/// Account registration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Code received by email.
    pub email_code: String,
    /// Password.
    pub password: String,
}

/// Password login.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Username or email.
    pub username: String,
    /// Password.
    pub password: String,
    /// Human-verification token.
    pub captcha_token: String,
}

impl LoginRequest {
    /// Create a new login request.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        captcha_token: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            captcha_token: captcha_token.into(),
        }
    }
}

/// Request to email a magic login link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMagicLinkRequest {
    /// Username or email.
    pub user: String,
    /// URL the link redirects to.
    pub callback: String,
    /// Human-verification token.
    pub captcha_token: String,
}

/// Result of a magic link verification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VerifyMagicLinkResponse {
    /// Fresh bearer token.
    pub token: String,
    /// Username of the account.
    pub username: String,
    /// User group name.
    pub group: String,
}

/// Password recovery with an email code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IForgotRequest {
    /// Account email.
    pub email: String,
    /// New password.
    pub password: String,
    /// Code received by email.
    pub email_code: String,
}

/// Password change for the logged-in user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    /// Current password.
    pub old_password: String,
    /// New password.
    pub new_password: String,
}

/// Query parameters for magic link verification.
#[derive(Debug, Serialize)]
pub(crate) struct MagicLinkQuery<'a> {
    pub mid: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_wire_shape() {
        let req = LoginRequest::new("alice", "pw", "cap");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"username": "alice", "password": "pw", "captchaToken": "cap"})
        );
        let back: LoginRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, req);
    }

    #[test]
    fn test_register_request_uses_camel_case() {
        let req = RegisterRequest {
            username: "bob".into(),
            email: "bob@example.com".into(),
            email_code: "123456".into(),
            password: "pw".into(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains(r#""emailCode":"123456""#));
    }
}
