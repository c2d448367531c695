//! Session lifecycle client
//!
//! Login is the only public call in the API. On success the returned bearer
//! token is written to the injected [`TokenStore`](crate::api::TokenStore),
//! after which every other client can issue authenticated requests.

use std::sync::Arc;

use chronodesk_domain::{LoginRequest, LoginResponse, UserProfile};
use serde::de::IgnoredAny;
use tracing::{info, instrument, warn};

use crate::api::{ApiClient, ApiError};

/// Client for `/login`, `/logout` and `/me`
#[derive(Debug, Clone)]
pub struct AuthService {
    client: Arc<ApiClient>,
}

impl AuthService {
    /// Create the client over the shared [`ApiClient`]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Exchange credentials for a session token and persist it
    ///
    /// # Errors
    ///
    /// Returns the request error on rejected credentials, or
    /// [`ApiError::Storage`] if the token could not be persisted.
    #[instrument(skip_all, fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self.client.post_public("/login", request).await?;
        if response.token.trim().is_empty() {
            return Err(ApiError::Decode("login response carried an empty token".to_string()));
        }

        self.client.tokens().store(&response.token).await?;
        info!(user_id = response.user.id, "session started");
        Ok(response)
    }

    /// End the session
    ///
    /// The local token is cleared even when the server call fails, so the
    /// client never stays half logged in. The server error is still returned.
    #[instrument(skip_all)]
    pub async fn logout(&self) -> Result<(), ApiError> {
        let remote = self.client.post_empty::<IgnoredAny>("/logout").await;
        self.client.tokens().clear().await?;

        match remote {
            Ok(_) => {
                info!("session ended");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "logout request failed; local session cleared");
                Err(err)
            }
        }
    }

    /// Profile of the signed-in user
    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        self.client.get("/me", &[]).await
    }
}
