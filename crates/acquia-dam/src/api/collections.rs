//! Collections API.

use serde_json::json;

use crate::client::ApiClient;
use crate::credential::ApiVersion;
use crate::error::Result;
use crate::request::ApiRequest;
use crate::types::{
    Collection, CollectionAssetsParams, CreateCollectionParams, CreatedCollection,
    ListCollectionsParams, Page,
};

/// Collections API client.
pub struct CollectionsApi {
    client: ApiClient,
}

impl CollectionsApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Add assets to and remove assets from collections in one call.
    pub async fn add_or_remove_assets(&self, params: &CollectionAssetsParams) -> Result<()> {
        let body = json!({
            "collections": { "uuids": params.collections },
            "add": { "uuids": params.assets_to_add },
            "remove": { "uuids": params.assets_to_remove },
        });
        let request = ApiRequest::post(ApiVersion::V1, "collection/assets").with_json(&body)?;
        self.client.execute(request).await
    }

    /// Create a collection.
    pub async fn create(&self, params: &CreateCollectionParams) -> Result<CreatedCollection> {
        let body = json!({
            "assets": { "uuids": params.assets },
            "description": params.description,
            "title": params.title,
        });
        let request = ApiRequest::post(ApiVersion::V1, "collection").with_json(&body)?;
        self.client.send_request(request).await
    }

    /// List collections of one type.
    pub async fn list(&self, params: &ListCollectionsParams) -> Result<Page<Collection>> {
        let request = ApiRequest::get(ApiVersion::V2, "collections").with_query(params)?;
        self.client.send_request(request).await
    }
}
