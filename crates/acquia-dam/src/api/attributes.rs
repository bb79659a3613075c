//! Attributes API.

use super::segment;
use crate::client::ApiClient;
use crate::credential::ApiVersion;
use crate::error::Result;
use crate::request::ApiRequest;
use crate::types::{Attribute, AttributeVocabulary, Page, Pagination};

/// Attributes API client.
pub struct AttributesApi {
    client: ApiClient,
}

impl AttributesApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List product attributes.
    pub async fn list(&self, pagination: Pagination) -> Result<Page<Attribute>> {
        let request = ApiRequest::get(ApiVersion::V2, "attributes").with_query(&pagination)?;
        self.client.send_request(request).await
    }

    /// List the controlled vocabulary of an attribute.
    pub async fn list_vocabulary(&self, id: &str) -> Result<AttributeVocabulary> {
        let path = format!("attributes/{}/vocabulary", segment(id)?);
        self.client
            .send_request(ApiRequest::get(ApiVersion::V2, path))
            .await
    }
}
