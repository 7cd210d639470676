//! Registration, login and password endpoints.
//!
//! [`MeFrpClient::login`] and [`MeFrpClient::verify_magic_link`] store the
//! token they receive, so later calls on the same client are authenticated.

mod types;

pub use types::*;

use crate::error::MeFrpError;
use crate::rest::MeFrpClient;
use crate::rest::endpoints::auth;
use crate::types::envelope::TokenData;

impl MeFrpClient {
    /// Request an email verification code for registration.
    pub async fn get_register_email_code(
        &self,
        email: &str,
        captcha_token: &str,
    ) -> Result<(), MeFrpError> {
        let request = EmailCodeRequest::new(email, captcha_token);
        self.post::<serde_json::Value, _>(auth::REGISTER_EMAIL_CODE, &request)
            .await?
            .into_unit()
    }

    /// Create a new account.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), MeFrpError> {
        self.post::<serde_json::Value, _>(auth::REGISTER, request)
            .await?
            .into_unit()
    }

    /// Log in with a password and return the new bearer token.
    ///
    /// On success the token also replaces the client's current token.
    pub async fn login(&mut self, request: &LoginRequest) -> Result<String, MeFrpError> {
        let data: TokenData = self.post(auth::LOGIN, request).await?.into_data()?;
        self.set_token(data.token.clone());
        tracing::debug!("login succeeded, token updated");
        Ok(data.token)
    }

    /// Ask the server to email a magic login link.
    pub async fn generate_magic_link(
        &self,
        request: &GenerateMagicLinkRequest,
    ) -> Result<(), MeFrpError> {
        self.post::<serde_json::Value, _>(auth::MAGIC_LINK, request)
            .await?
            .into_unit()
    }

    /// Verify a magic link ID.
    ///
    /// On success the returned token replaces the client's current token.
    pub async fn verify_magic_link(
        &mut self,
        mid: &str,
    ) -> Result<VerifyMagicLinkResponse, MeFrpError> {
        let response: VerifyMagicLinkResponse = self
            .get_with_query(auth::MAGIC_LINK_VERIFY, &MagicLinkQuery { mid })
            .await?
            .into_data()?;
        self.set_token(response.token.clone());
        tracing::debug!(username = %response.username, "magic link verified, token updated");
        Ok(response)
    }

    /// Request a password recovery email code.
    pub async fn request_iforgot_email_code(
        &self,
        request: &EmailCodeRequest,
    ) -> Result<(), MeFrpError> {
        self.post::<serde_json::Value, _>(auth::IFORGOT_EMAIL_CODE, request)
            .await?
            .into_unit()
    }

    /// Reset a forgotten password using an email code.
    pub async fn iforgot(&self, request: &IForgotRequest) -> Result<(), MeFrpError> {
        self.post::<serde_json::Value, _>(auth::IFORGOT, request)
            .await?
            .into_unit()
    }

    /// Change the password of the logged-in user.
    ///
    /// The server also resets the frp token and the access key.
    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), MeFrpError> {
        self.post::<serde_json::Value, _>(auth::CHANGE_PASSWORD, request)
            .await?
            .into_unit()
    }
}
