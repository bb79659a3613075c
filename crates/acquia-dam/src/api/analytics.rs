//! Analytics API.

use crate::client::ApiClient;
use crate::credential::ApiVersion;
use crate::error::Result;
use crate::request::ApiRequest;
use crate::types::{
    AnalyticsPage, AnalyticsParams, DownloadAssetEvent, ShareAssetEvent, ViewAssetEvent,
};

/// Analytics API client.
pub struct AnalyticsApi {
    client: ApiClient,
}

impl AnalyticsApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List asset download events.
    pub async fn list_asset_downloads(
        &self,
        params: &AnalyticsParams,
    ) -> Result<AnalyticsPage<DownloadAssetEvent>> {
        self.list("analytics/assets/downloads", params).await
    }

    /// List asset share events.
    pub async fn list_asset_shares(
        &self,
        params: &AnalyticsParams,
    ) -> Result<AnalyticsPage<ShareAssetEvent>> {
        self.list("analytics/assets/shares", params).await
    }

    /// List asset view events.
    pub async fn list_asset_views(
        &self,
        params: &AnalyticsParams,
    ) -> Result<AnalyticsPage<ViewAssetEvent>> {
        self.list("analytics/assets/views", params).await
    }

    async fn list<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &AnalyticsParams,
    ) -> Result<AnalyticsPage<T>> {
        let request = ApiRequest::post(ApiVersion::V2, path).with_json(params)?;
        self.client.send_request(request).await
    }
}
