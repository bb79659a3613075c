//! Assets API.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::debug;

use super::{body_keys, patch_query, segment, CategoriesApi, CollectionsApi};
use crate::client::ApiClient;
use crate::credential::ApiVersion;
use crate::error::{Error, Result};
use crate::request::{ApiRequest, FileContent, FormBody, QueryParams};
use crate::types::{
    Asset, AssetExpand, AssetGroup, AssetMetadata, AssetRef, AssetSecurity, AssetSource, BasicSearchParams,
    Category, CategoryAssetsParams, Collection, CollectionAssetsParams,
    CompleteChunkedUploadParams, CompleteChunkedUploadResult, CreateAssetParams,
    CreateAssetResult, CreatedAsset, GetAssetOptions, IntegrationLink, ListCollectionsParams,
    ListFileFormatsResult, ListIntegrationLinksResult, ListVersionsResult, Page,
    RegisterIntegrationLinkParams, SearchAssetsParams, SearchAssetsResult,
    StartChunkedUploadResult, UpdateMetadataParams, UpdateSecurityParams, UploadChunkParams,
    UploadChunkResult, UploadProfile,
};

#[derive(Serialize)]
struct ExpandQuery<'a> {
    expand: &'a [AssetExpand],
}

/// Just enough of a search result to resolve an asset ID.
#[derive(Deserialize)]
struct FoundAssets {
    items: Vec<FoundAsset>,
}

#[derive(Deserialize)]
struct FoundAsset {
    id: String,
}

/// Assets API client.
///
/// Methods that act on one asset take an [`AssetRef`]. References by
/// external ID or filename cost one extra search request.
pub struct AssetsApi {
    client: ApiClient,
}

impl AssetsApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Resolve an asset reference to its ID.
    ///
    /// Fails with [`Error::Sdk`] when the search finds nothing.
    pub async fn find_asset_id(&self, asset: &AssetRef) -> Result<String> {
        let query = match asset {
            AssetRef::Id(id) => return Ok(id.clone()),
            AssetRef::ExternalId(external_id) => format!("embedid: {}", external_id),
            AssetRef::Filename(filename) => format!("filename: {{{}}}", filename),
        };

        let params = BasicSearchParams {
            limit: Some(1),
            query: Some(query.clone()),
            ..Default::default()
        };
        let request = ApiRequest::get(ApiVersion::V2, "assets/search").with_query(&params)?;
        let found: FoundAssets = self.client.send_request(request).await?;

        match found.items.into_iter().next() {
            Some(item) => {
                debug!(%query, id = %item.id, "resolved asset");
                Ok(item.id)
            }
            None => Err(Error::sdk(format!("Unable to find asset using query {}", query))),
        }
    }

    async fn asset_path(&self, asset: &AssetRef, rest: &str) -> Result<String> {
        let id = self.find_asset_id(asset).await?;
        Ok(if rest.is_empty() {
            format!("assets/{}", segment(&id)?)
        } else {
            format!("assets/{}/{}", segment(&id)?, rest)
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Categories and collections
    // ─────────────────────────────────────────────────────────────────────────

    /// Add an asset to categories. Use [`CategoriesApi`] for bulk changes.
    pub async fn add_to_categories(&self, asset: &AssetRef, categories: &[String]) -> Result<()> {
        let id = self.find_asset_id(asset).await?;
        CategoriesApi::new(self.client.clone())
            .add_or_remove_assets(&CategoryAssetsParams {
                categories: categories.to_vec(),
                assets_to_add: vec![id],
                assets_to_remove: Vec::new(),
            })
            .await
    }

    /// Remove an asset from categories.
    pub async fn remove_from_categories(
        &self,
        asset: &AssetRef,
        categories: &[String],
    ) -> Result<()> {
        let id = self.find_asset_id(asset).await?;
        CategoriesApi::new(self.client.clone())
            .add_or_remove_assets(&CategoryAssetsParams {
                categories: categories.to_vec(),
                assets_to_add: Vec::new(),
                assets_to_remove: vec![id],
            })
            .await
    }

    /// Add an asset to collections. Use [`CollectionsApi`] for bulk changes.
    pub async fn add_to_collections(&self, asset: &AssetRef, collections: &[String]) -> Result<()> {
        let id = self.find_asset_id(asset).await?;
        CollectionsApi::new(self.client.clone())
            .add_or_remove_assets(&CollectionAssetsParams {
                collections: collections.to_vec(),
                assets_to_add: vec![id],
                assets_to_remove: Vec::new(),
            })
            .await
    }

    /// Remove an asset from collections.
    pub async fn remove_from_collections(
        &self,
        asset: &AssetRef,
        collections: &[String],
    ) -> Result<()> {
        let id = self.find_asset_id(asset).await?;
        CollectionsApi::new(self.client.clone())
            .add_or_remove_assets(&CollectionAssetsParams {
                collections: collections.to_vec(),
                assets_to_add: Vec::new(),
                assets_to_remove: vec![id],
            })
            .await
    }

    /// Same as [`CategoriesApi::list`].
    pub async fn list_categories(&self, path: Option<&str>) -> Result<Page<Category>> {
        CategoriesApi::new(self.client.clone()).list(path).await
    }

    /// Same as [`CollectionsApi::list`].
    pub async fn list_collections(&self, params: &ListCollectionsParams) -> Result<Page<Collection>> {
        CollectionsApi::new(self.client.clone()).list(params).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Uploads
    // ─────────────────────────────────────────────────────────────────────────

    /// Begin a chunked upload session.
    pub async fn start_chunked_upload(&self) -> Result<StartChunkedUploadResult> {
        self.client
            .send_request(ApiRequest::post(ApiVersion::V2, "uploads/chunks/start"))
            .await
    }

    /// Upload one chunk. Keep the returned tag for the completion call.
    pub async fn upload_chunk(&self, params: UploadChunkParams) -> Result<UploadChunkResult> {
        let form = FormBody::new()
            .text("chunk_number", params.chunk_number.to_string())
            .file("file", params.file)
            .text("session_id", params.session_id);
        let request = ApiRequest::post(ApiVersion::V2, "uploads/chunks/upload").with_form(form);
        self.client.send_request(request).await
    }

    /// Finish a chunked upload. The returned `file_id` goes into
    /// [`AssetSource::FileId`].
    pub async fn complete_chunked_upload(
        &self,
        params: &CompleteChunkedUploadParams,
    ) -> Result<CompleteChunkedUploadResult> {
        let request =
            ApiRequest::post(ApiVersion::V2, "uploads/chunks/complete").with_json(params)?;
        self.client.send_request(request).await
    }

    /// Create an asset from file content, a URL, or a chunked upload.
    pub async fn create(&self, params: CreateAssetParams) -> Result<CreateAssetResult> {
        let mut form = FormBody::new()
            .text("profile", params.profile)
            .text("filename", params.filename);
        if let Some(metadata) = &params.metadata {
            form = form.text("metadata", serde_json::to_string(metadata)?);
        }
        form = match params.source {
            AssetSource::File(file) => form.file("file", file),
            AssetSource::FileId(file_id) => form.text("file_id", file_id),
            AssetSource::Url(url) => form.text("url", url),
        };

        let request = ApiRequest::post(ApiVersion::V2, "uploads").with_form(form);
        let created: CreatedAsset = self.client.send_request(request).await?;
        let id = created
            .links
            .self_link
            .rsplit('/')
            .next()
            .filter(|id| !id.is_empty())
            .map(str::to_string);

        Ok(CreateAssetResult {
            links: created.links,
            id,
        })
    }

    /// Upload a file as the asset's alternate preview.
    pub async fn upload_alternate_preview(&self, asset: &AssetRef, file: FileContent) -> Result<()> {
        let path = self.asset_path(asset, "alternatepreview").await?;
        let request =
            ApiRequest::post(ApiVersion::V2, path).with_form(FormBody::new().file("file", file));
        self.client.execute(request).await
    }

    /// Delete an asset's alternate preview.
    pub async fn delete_alternate_preview(&self, asset: &AssetRef) -> Result<()> {
        let path = self.asset_path(asset, "alternatepreview").await?;
        self.client
            .execute(ApiRequest::delete(ApiVersion::V2, path))
            .await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Retrieval
    // ─────────────────────────────────────────────────────────────────────────

    /// Delete an asset.
    pub async fn delete(&self, asset: &AssetRef) -> Result<()> {
        let path = self.asset_path(asset, "").await?;
        self.client
            .execute(ApiRequest::delete(ApiVersion::V2, path))
            .await
    }

    /// Get an asset, or one of its versions.
    pub async fn get(&self, asset: &AssetRef, options: &GetAssetOptions) -> Result<Asset> {
        let mut path = self.asset_path(asset, "").await?;
        if let Some(version_id) = &options.version_id {
            path.push_str("/versions/");
            path.push_str(&segment(version_id)?);
        }
        let mut request = ApiRequest::get(ApiVersion::V2, path);
        if !options.expand.is_empty() {
            request = request.with_query(&ExpandQuery {
                expand: &options.expand,
            })?;
        }
        self.client.send_request(request).await
    }

    /// Get an asset's metadata fields.
    pub async fn get_metadata(&self, asset: &AssetRef) -> Result<AssetMetadata> {
        let path = self.asset_path(asset, "metadata").await?;
        self.client
            .send_request(ApiRequest::get(ApiVersion::V2, path))
            .await
    }

    /// Get an asset's security settings.
    pub async fn get_security(&self, asset: &AssetRef) -> Result<AssetSecurity> {
        let path = self.asset_path(asset, "security").await?;
        self.client
            .send_request(ApiRequest::get(ApiVersion::V2, path))
            .await
    }

    /// List asset groups.
    pub async fn list_asset_groups(&self) -> Result<Page<AssetGroup>> {
        self.client
            .send_request(ApiRequest::get(ApiVersion::V2, "assets/assetgroups"))
            .await
    }

    /// List upload profiles.
    pub async fn list_upload_profiles(&self) -> Result<Vec<UploadProfile>> {
        self.client
            .send_request(ApiRequest::get(ApiVersion::V2, "uploads/profiles"))
            .await
    }

    /// List the file formats the DAM knows (v1).
    pub async fn list_file_formats(&self) -> Result<ListFileFormatsResult> {
        self.client
            .send_request(ApiRequest::get(ApiVersion::V1, "fileformats"))
            .await
    }

    /// List the versions of an asset (v1).
    pub async fn list_versions(&self, asset: &AssetRef) -> Result<ListVersionsResult> {
        let id = self.find_asset_id(asset).await?;
        let path = format!("asset/uuid/{}/assetversions", segment(&id)?);
        self.client
            .send_request(ApiRequest::get(ApiVersion::V1, path))
            .await
    }

    /// Search assets.
    pub async fn search(&self, params: &SearchAssetsParams) -> Result<SearchAssetsResult> {
        let request = ApiRequest::get(ApiVersion::V2, "assets/search").with_query(params)?;
        self.client.send_request(request).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Integration links
    // ─────────────────────────────────────────────────────────────────────────

    /// List integration links (v1).
    pub async fn list_integration_links(&self) -> Result<ListIntegrationLinksResult> {
        self.client
            .send_request(ApiRequest::get(ApiVersion::V1, "integrationlink"))
            .await
    }

    /// Record that an asset is used on an external page.
    pub async fn register_integration_link(
        &self,
        asset: &AssetRef,
        params: &RegisterIntegrationLinkParams,
    ) -> Result<IntegrationLink> {
        let asset_uuid = self.find_asset_id(asset).await?;
        let mut body = Map::new();
        body.insert("assetUuid".into(), Value::String(asset_uuid));
        body.insert("description".into(), Value::String(params.description.clone()));
        if let Some(url) = &params.url {
            body.insert("url".into(), Value::String(url.clone()));
        }
        let request = ApiRequest::post(ApiVersion::V1, "integrationlink").with_json(&body)?;
        self.client.send_request(request).await
    }

    /// Remove an integration link (v1).
    pub async fn remove_integration_link(&self, uuid: &str) -> Result<()> {
        let path = format!("integrationlink/{}", segment(uuid)?);
        self.client
            .execute(ApiRequest::delete(ApiVersion::V1, path))
            .await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Updates
    // ─────────────────────────────────────────────────────────────────────────

    /// Change an asset's filename.
    pub async fn rename(&self, asset: &AssetRef, new_filename: &str) -> Result<()> {
        let path = self.asset_path(asset, "filename").await?;
        let request =
            ApiRequest::put(ApiVersion::V2, path).with_json(&json!({ "filename": new_filename }))?;
        self.client.execute(request).await
    }

    /// Update metadata fields. Without an explicit `patch`, every field in
    /// `fields` is patched.
    pub async fn update_metadata(&self, asset: &AssetRef, params: &UpdateMetadataParams) -> Result<()> {
        let path = self.asset_path(asset, "metadata").await?;
        let query = match &params.patch {
            Some(patch) => patch_query(patch),
            None => patch_query(params.fields.keys()),
        };
        let mut request =
            ApiRequest::put(ApiVersion::V2, path).with_json(&json!({ "fields": params.fields }))?;
        request.query = Some(query);
        self.client.execute(request).await
    }

    /// Change an asset's metadata type (v1).
    pub async fn update_metadata_type(&self, asset: &AssetRef, metadata_type_uuid: &str) -> Result<()> {
        let id = self.find_asset_id(asset).await?;
        let path = format!(
            "asset/changemetadatatype/asset/{}/type/{}",
            segment(&id)?,
            segment(metadata_type_uuid)?
        );
        self.client
            .execute(ApiRequest::put(ApiVersion::V1, path))
            .await
    }

    /// Update security. Without an explicit `patch`, every property set in
    /// `params` is patched.
    pub async fn update_security(&self, asset: &AssetRef, params: &UpdateSecurityParams) -> Result<()> {
        let path = self.asset_path(asset, "security").await?;
        let body = serde_json::to_value(params)?;
        let query: QueryParams = match &params.patch {
            Some(patch) => patch_query(patch.iter().map(|p| p.as_str())),
            None => patch_query(body_keys(&body)),
        };
        let mut request = ApiRequest::put(ApiVersion::V2, path).with_json(&body)?;
        request.query = Some(query);
        self.client.execute(request).await
    }
}
