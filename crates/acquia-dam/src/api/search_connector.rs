//! Instant search connector API.

use crate::client::ApiClient;
use crate::credential::ApiVersion;
use crate::error::Result;
use crate::request::ApiRequest;
use crate::types::{SearchConnector, SearchConnectorParams};

/// Search connector API client.
pub struct SearchConnectorApi {
    client: ApiClient,
}

impl SearchConnectorApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Get a URL for the instant search connector.
    pub async fn url(&self, params: &SearchConnectorParams) -> Result<SearchConnector> {
        let request = ApiRequest::get(ApiVersion::V2, "integrations/url").with_query(params)?;
        self.client.send_request(request).await
    }
}
