//! Authenticated API client
//!
//! Provides the one request path every resource client uses: token lookup,
//! bearer header, JSON body, envelope unwrapping and error mapping.

use std::sync::Arc;
use std::time::Duration;

use chronodesk_domain::constants::DEFAULT_ERROR_MESSAGE;
use chronodesk_domain::ApiConfig;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::auth::TokenStore;
use super::envelope::{error_message, unwrap_data};
use super::errors::ApiError;
use crate::http::HttpClient;

/// Configuration for API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL for API (e.g., "http://localhost:8000/api")
    pub base_url: String,
    /// Timeout for API requests
    pub timeout: Duration,
    /// Optional `User-Agent` header
    pub user_agent: Option<String>,
    /// Message used when an error response carries no `message`
    pub fallback_error_message: String,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self::from(&ApiConfig::default())
    }
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_seconds.max(1)),
            user_agent: config.user_agent.clone(),
            fallback_error_message: if config.fallback_error_message.trim().is_empty() {
                DEFAULT_ERROR_MESSAGE.to_string()
            } else {
                config.fallback_error_message.clone()
            },
        }
    }
}

/// Whether a request carries the session token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Authenticated,
    Public,
}

/// API client shared by every resource client
pub struct ApiClient {
    http_client: HttpClient,
    tokens: Arc<dyn TokenStore>,
    config: ApiClientConfig,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("config", &self.config).finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Arguments
    ///
    /// * `config` - Client configuration
    /// * `tokens` - Session token store
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is invalid or the HTTP client cannot be
    /// created
    pub fn new(config: ApiClientConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let parsed = url::Url::parse(&config.base_url)
            .map_err(|e| ApiError::Config(format!("invalid base URL '{}': {}", config.base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!(
                "base URL must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = HttpClient::builder().timeout(config.timeout).default_headers(headers);
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        Ok(Self { http_client: builder.build()?, tokens, config })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// The token store this client reads from
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Settings the client was built with
    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    /// Execute an authenticated GET request
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] without sending anything when no
    /// session is active, otherwise any transport, status or decode error
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.execute(Method::GET, path, query, None, Access::Authenticated).await
    }

    /// Execute an authenticated POST request with a JSON body
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = Self::encode(body)?;
        self.execute(Method::POST, path, &[], Some(body), Access::Authenticated).await
    }

    /// Execute an authenticated POST request without a body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(Method::POST, path, &[], None, Access::Authenticated).await
    }

    /// Execute an authenticated PUT request with a JSON body
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = Self::encode(body)?;
        self.execute(Method::PUT, path, &[], Some(body), Access::Authenticated).await
    }

    /// Execute an authenticated PATCH request; `body` may be omitted
    pub async fn patch<B, T>(&self, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = body.map(Self::encode).transpose()?;
        self.execute(Method::PATCH, path, &[], body, Access::Authenticated).await
    }

    /// Execute an authenticated DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(Method::DELETE, path, &[], None, Access::Authenticated).await
    }

    /// Execute a POST request without the session token (login)
    pub async fn post_public<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = Self::encode(body)?;
        self.execute(Method::POST, path, &[], Some(body), Access::Public).await
    }

    #[instrument(skip_all, fields(method = %method, path = %path))]
    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
        access: Access,
    ) -> Result<T, ApiError> {
        // Resolve the token first: a missing session must never reach the network.
        let token = match access {
            Access::Authenticated => Some(self.bearer_token().await?),
            Access::Public => None,
        };

        let url = self.url(path);
        debug!(url = %url, "API request");

        let mut request = self.http_client.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = self.http_client.send(request).await?;
        let status = response.status();

        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    debug!(status = status.as_u16(), error = %err, "failed to read error body");
                    String::new()
                }
            };
            let error = self.status_error(status, body);
            warn!(status = status.as_u16(), error = %error, "API request failed");
            return Err(error);
        }

        let bytes = response.bytes().await?;
        let result = if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            // No body by definition; only payload types that accept null fit.
            unwrap_data(&[]).map_err(|_| {
                ApiError::Decode(format!(
                    "no content response ({}), but the expected payload cannot be empty",
                    status.as_u16()
                ))
            })?
        } else {
            unwrap_data(&bytes)?
        };

        info!(status = status.as_u16(), "API request successful");
        Ok(result)
    }

    async fn bearer_token(&self) -> Result<String, ApiError> {
        match self.tokens.token().await? {
            Some(token) => Ok(token),
            None => {
                warn!("refusing to send authenticated request without a session token");
                Err(ApiError::MissingToken)
            }
        }
    }

    fn url(&self, path: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }

    fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
        serde_json::to_value(body)
            .map_err(|e| ApiError::Config(format!("Failed to serialize body: {}", e)))
    }

    fn status_error(&self, status: StatusCode, body: String) -> ApiError {
        let message =
            error_message(&body).unwrap_or_else(|| self.config.fallback_error_message.clone());
        ApiError::Status { status: status.as_u16(), message, body }
    }
}

/// Builder for API client
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
    tokens: Option<Arc<dyn TokenStore>>,
}

impl ApiClientBuilder {
    /// Set the API configuration
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Override only the base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut config = self.config.take().unwrap_or_default();
        config.base_url = base_url.into();
        self.config = Some(config);
        self
    }

    /// Set the token store
    pub fn tokens(mut self, tokens: Arc<dyn TokenStore>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns error if the token store is missing or client creation fails
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config = self.config.unwrap_or_default();
        let tokens =
            self.tokens.ok_or_else(|| ApiError::Config("Token store not set".to_string()))?;

        ApiClient::new(config, tokens)
    }
}
