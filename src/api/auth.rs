//! Authentication calls.

use tracing::info;

use crate::error::{ApiError, Result};
use crate::session::SessionStore;

use super::types::{AdminUser, LoginPayload, LoginRequest};
use super::{ApiClient, Envelope};

impl ApiClient {
    /// Sign in and persist tokens and profile to the session.
    ///
    /// Nothing is stored unless the backend reports success, so a failed
    /// attempt leaves the previous session untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<AdminUser> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
            remember_me: true,
        };

        let envelope: Envelope<LoginPayload> = self.post("/auth/login", &body).await?;

        if !envelope.success {
            let message = if envelope.message.is_empty() {
                "login failed".to_string()
            } else {
                envelope.message
            };
            return Err(ApiError::Status {
                status: envelope.status_code,
                message,
            }
            .into());
        }

        let payload = envelope.data;
        self.session()
            .set_tokens(&payload.tokens.access_token, &payload.tokens.refresh_token)?;
        self.session().set_user(&payload.user)?;

        info!(email = %payload.user.email, role = %payload.user.role, "signed in");

        Ok(payload.user)
    }

    /// Drop the stored session. Purely local; the backend keeps no
    /// server-side session for the console.
    pub fn logout(&self) -> Result<()> {
        self.session().clear()
    }
}
