//! Common test utilities for integration tests.

#![allow(dead_code)]

use acquia_dam::{ApiClient, ClientBuilder};
use wiremock::MockServer;

/// Personal access token for the `acme` collective.
pub const TOKEN: &str = "wat_acme_0123456789";

/// A mock DAM with both API versions served from one server.
///
/// v1 lives under `/v1/<collective>/`, v2 under `/v2/`.
pub struct TestDam {
    pub server: MockServer,
    pub client: ApiClient,
}

impl TestDam {
    /// Start a mock server and a client holding [`TOKEN`].
    pub async fn start() -> anyhow::Result<Self> {
        let server = MockServer::start().await;
        let client = builder(&server).access_token(TOKEN).build()?;
        Ok(Self { server, client })
    }

    /// Start a mock server and a client without a token.
    pub async fn start_without_token() -> anyhow::Result<Self> {
        let server = MockServer::start().await;
        let client = builder(&server).build()?;
        Ok(Self { server, client })
    }
}

fn builder(server: &MockServer) -> ClientBuilder {
    ApiClient::builder()
        .v1_base_url(format!("{}/v1/{{collective}}/", server.uri()))
        .v2_base_url(format!("{}/v2/", server.uri()))
}
