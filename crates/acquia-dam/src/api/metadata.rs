//! Metadata API.

use super::segment;
use crate::client::ApiClient;
use crate::credential::ApiVersion;
use crate::error::{Error, Result};
use crate::request::ApiRequest;
use crate::types::{
    AddVocabularyValueParams, FieldVocabulary, ListViewableFieldsParams, MetadataTypes,
    UpdateVocabularyValueParams, ViewableFields, VocabularyValue,
};

/// Metadata API client.
pub struct MetadataApi {
    client: ApiClient,
}

impl MetadataApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn value_path(display_key: &str, value: &str) -> Result<String> {
        Ok(format!(
            "metadata/{}/vocabulary/{}",
            segment(display_key)?,
            segment(value)?
        ))
    }

    /// Add a value to a field's controlled vocabulary.
    pub async fn add_value(&self, params: &AddVocabularyValueParams) -> Result<()> {
        let path = format!("metadata/{}/vocabulary", segment(&params.display_key)?);
        let request = ApiRequest::post(ApiVersion::V2, path).with_json(params)?;
        self.client.execute(request).await
    }

    /// Remove a value from a field's controlled vocabulary.
    pub async fn delete_value(&self, display_key: &str, value: &str) -> Result<()> {
        let path = Self::value_path(display_key, value)?;
        self.client
            .execute(ApiRequest::delete(ApiVersion::V2, path))
            .await
    }

    /// List the controlled vocabulary of a field.
    pub async fn list_field_values(&self, display_key: &str) -> Result<FieldVocabulary> {
        let path = format!("metadata/{}/vocabulary", segment(display_key)?);
        self.client
            .send_request(ApiRequest::get(ApiVersion::V2, path))
            .await
    }

    /// Get one vocabulary value and its position.
    pub async fn get_value(&self, display_key: &str, value: &str) -> Result<VocabularyValue> {
        let path = Self::value_path(display_key, value)?;
        self.client
            .send_request(ApiRequest::get(ApiVersion::V2, path))
            .await
    }

    /// List metadata types (v1).
    pub async fn list_types(&self) -> Result<MetadataTypes> {
        self.client
            .send_request(ApiRequest::get(ApiVersion::V1, "metadata/types"))
            .await
    }

    /// List the metadata fields the current user can view.
    pub async fn list_viewable_fields(
        &self,
        params: &ListViewableFieldsParams,
    ) -> Result<ViewableFields> {
        let request =
            ApiRequest::get(ApiVersion::V2, "metadata/fields/viewable").with_query(params)?;
        self.client.send_request(request).await
    }

    /// Change a vocabulary value, its position, or both.
    ///
    /// Fails with [`Error::Sdk`] before any request when neither is given.
    pub async fn update_value(&self, params: &UpdateVocabularyValueParams) -> Result<()> {
        if params.index.is_none() && params.value.is_none() {
            return Err(Error::sdk("One of index, value must be defined"));
        }
        let path = Self::value_path(&params.display_key, &params.existing_value)?;
        let request = ApiRequest::put(ApiVersion::V2, path).with_json(params)?;
        self.client.execute(request).await
    }
}
