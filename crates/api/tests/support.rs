#![allow(dead_code)]

use std::sync::Arc;

use chronodesk_domain::{Config, TokenStoreKind};
use chronodesk_infra::api::{MemoryTokenStore, TokenStore};
use chronodesk_lib::AppContext;
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "app-test-token";

/// App context wired to a mock backend.
pub struct TestApp {
    pub server: MockServer,
    pub tokens: Arc<MemoryTokenStore>,
    pub ctx: Arc<AppContext>,
}

/// Create an app context pointed at a fresh mock server.
pub async fn setup_test_app(signed_in: bool) -> TestApp {
    let server = MockServer::start().await;

    let mut config = Config::default();
    config.api.base_url = server.uri();
    config.session.store = TokenStoreKind::Memory;

    let tokens = Arc::new(if signed_in {
        MemoryTokenStore::with_token(TEST_TOKEN)
    } else {
        MemoryTokenStore::new()
    });

    let ctx = AppContext::new_with_token_store(config, tokens.clone() as Arc<dyn TokenStore>)
        .expect("failed to create test context");

    TestApp { server, tokens, ctx: Arc::new(ctx) }
}

impl TestApp {
    pub async fn request_count(&self) -> usize {
        self.server.received_requests().await.map(|r| r.len()).unwrap_or(0)
    }
}
