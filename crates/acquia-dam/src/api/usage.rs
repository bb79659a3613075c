//! Usage API.

use crate::client::ApiClient;
use crate::credential::ApiVersion;
use crate::error::Result;
use crate::request::ApiRequest;
use crate::types::ApiUsage;

/// Usage API client.
pub struct UsageApi {
    client: ApiClient,
}

impl UsageApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Get API usage for the collective.
    pub async fn api_usage(&self) -> Result<ApiUsage> {
        self.client
            .send_request(ApiRequest::get(ApiVersion::V2, "usage/api"))
            .await
    }
}
