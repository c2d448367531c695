#![allow(dead_code)]

use std::sync::Arc;

use chronodesk_infra::api::{ApiClient, Envelope, MemoryTokenStore, TokenStore};
use serde_json::Value;
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "integration-token";

/// Mock backend plus a client wired to it through an in-memory token store.
pub struct TestBackend {
    pub server: MockServer,
    pub tokens: Arc<MemoryTokenStore>,
    pub client: Arc<ApiClient>,
}

impl TestBackend {
    /// Backend with an active session.
    pub async fn signed_in() -> Self {
        Self::with_store(MemoryTokenStore::with_token(TEST_TOKEN)).await
    }

    /// Backend with no session token.
    pub async fn signed_out() -> Self {
        Self::with_store(MemoryTokenStore::new()).await
    }

    async fn with_store(store: MemoryTokenStore) -> Self {
        let server = MockServer::start().await;
        let tokens = Arc::new(store);
        let client = ApiClient::builder()
            .base_url(server.uri())
            .tokens(tokens.clone() as Arc<dyn TokenStore>)
            .build()
            .expect("client should build for mock server");

        Self { server, tokens, client: Arc::new(client) }
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {TEST_TOKEN}")
    }

    /// Number of requests the mock server has seen so far.
    pub async fn request_count(&self) -> usize {
        self.server.received_requests().await.map(|r| r.len()).unwrap_or(0)
    }
}

/// Wrap `data` in the backend's response envelope.
pub fn envelope(data: Value) -> Value {
    serde_json::to_value(Envelope { data, message: Some("OK".to_string()) })
        .expect("envelope should serialize")
}
