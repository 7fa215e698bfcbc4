//! Common test utilities for integration tests
//!
//! Spins up a wiremock server standing in for the hospital-management
//! backend and wires an API client with in-memory token storage to it.

use careportal_client::{ApiClient, ClientConfig, MemoryStorage, TokenStore};
use std::sync::Arc;
use wiremock::MockServer;

/// Test harness: mock backend + client + storage
pub struct TestClient {
    pub server: MockServer,
    pub api: ApiClient,
    pub tokens: TokenStore,
}

impl TestClient {
    pub async fn new() -> Self {
        // A dedicated (non-pooled) server so that dropping it actually
        // closes the listener, as the transport-failure test relies on.
        let server = MockServer::builder().start().await;
        let tokens = TokenStore::new(Arc::new(MemoryStorage::new()));
        let config = ClientConfig {
            api_url: server.uri(),
        };
        let api = ApiClient::new(&config, tokens.clone());
        Self { server, api, tokens }
    }
}

/// Build an unsigned token whose payload is the given JSON text
#[allow(dead_code)]
pub fn token_with_payload(payload: &str) -> String {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine as _;
    format!("header.{}.sig", URL_SAFE_NO_PAD.encode(payload))
}
