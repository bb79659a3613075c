//! Assets: stored files, their metadata, security and uploads.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::json::JsonValue;
use crate::request::FileContent;

// ─────────────────────────────────────────────────────────────────────────────
// Requests
// ─────────────────────────────────────────────────────────────────────────────

/// How to identify an asset.
///
/// Only [`AssetRef::Id`] is used directly; the other two are resolved with a
/// one-result search (`embedid: <id>` or `filename: {<name>}`) before the
/// actual call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetRef {
    /// Asset UUID.
    Id(String),
    /// External ID (embed ID).
    ExternalId(String),
    /// Asset filename.
    Filename(String),
}

impl AssetRef {
    pub fn id(id: impl Into<String>) -> Self {
        AssetRef::Id(id.into())
    }

    pub fn external_id(external_id: impl Into<String>) -> Self {
        AssetRef::ExternalId(external_id.into())
    }

    pub fn filename(filename: impl Into<String>) -> Self {
        AssetRef::Filename(filename.into())
    }
}

/// Finish a chunked upload session.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteChunkedUploadParams {
    /// Session ID from the start call.
    pub session_id: String,
    /// Tags returned by each chunk upload, in any order.
    pub tags: Vec<String>,
}

/// Where the content of a new asset comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetSource {
    /// Upload the file content directly.
    File(FileContent),
    /// A `file_id` returned by a completed chunked upload.
    FileId(String),
    /// Public URL the DAM fetches the file from.
    Url(String),
}

/// Create a new asset.
#[derive(Debug, Clone)]
pub struct CreateAssetParams {
    pub filename: String,
    /// Upload profile name.
    pub profile: String,
    pub source: AssetSource,
    /// Metadata to apply to the new asset.
    pub metadata: Option<BTreeMap<String, Vec<String>>>,
}

/// Extra fields that can be expanded on an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetExpand {
    AssetProperties,
    FileProperties,
    Metadata,
    MetadataInfo,
    MetadataVocabulary,
    Security,
    Thumbnails,
    /// Only valid when retrieving a single asset.
    Status,
}

/// Facets that can be requested on a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetSearchFacet {
    FileTypes,
    Categories,
    Metadata,
}

/// Options for retrieving a single asset.
#[derive(Debug, Clone, Default)]
pub struct GetAssetOptions {
    pub expand: Vec<AssetExpand>,
    /// Retrieve this version instead of the current one.
    pub version_id: Option<String>,
}

/// A regular asset search.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BasicSearchParams {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<AssetExpand>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub facet: Vec<AssetSearchFacet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_deleted: Option<bool>,
    /// 1 to 100, default 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// 0 to 10000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Quick search query, same syntax as the web UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Return a `scroll_id` for walking large result sets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_document_text: Option<bool>,
    /// Sort field; prefix with `-` for descending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

/// Continue a scrolling search.
#[derive(Debug, Clone, Serialize)]
pub struct ScrollSearchParams {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<AssetExpand>,
    pub scroll_id: String,
}

/// Asset search parameters.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SearchAssetsParams {
    Basic(BasicSearchParams),
    Scroll(ScrollSearchParams),
}

impl Default for SearchAssetsParams {
    fn default() -> Self {
        SearchAssetsParams::Basic(BasicSearchParams::default())
    }
}

impl From<BasicSearchParams> for SearchAssetsParams {
    fn from(params: BasicSearchParams) -> Self {
        SearchAssetsParams::Basic(params)
    }
}

impl From<ScrollSearchParams> for SearchAssetsParams {
    fn from(params: ScrollSearchParams) -> Self {
        SearchAssetsParams::Scroll(params)
    }
}

/// Update an asset's metadata fields.
#[derive(Debug, Clone, Default)]
pub struct UpdateMetadataParams {
    /// Field key to the desired values.
    pub fields: BTreeMap<String, Vec<String>>,
    /// Fields to update. Defaults to every key in `fields`.
    pub patch: Option<Vec<String>>,
}

/// Register an integration link on an asset.
#[derive(Debug, Clone)]
pub struct RegisterIntegrationLinkParams {
    /// At most 255 characters.
    pub description: String,
    /// Page containing the asset link.
    pub url: Option<String>,
}

/// Security properties that can be patched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityPatch {
    /// Properties missing from the request are set to null.
    All,
    AssetGroups,
    ExpirationDate,
    ReleaseDate,
}

impl SecurityPatch {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityPatch::All => "all",
            SecurityPatch::AssetGroups => "asset_groups",
            SecurityPatch::ExpirationDate => "expiration_date",
            SecurityPatch::ReleaseDate => "release_date",
        }
    }
}

/// Update an asset's security.
///
/// For the date fields, `Some(None)` clears the date.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSecurityParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<Option<DateTime<Utc>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<Option<DateTime<Utc>>>,
    /// Properties to update. Defaults to the ones set above.
    #[serde(skip)]
    pub patch: Option<Vec<SecurityPatch>>,
}

/// Upload one chunk of a chunked upload.
#[derive(Debug, Clone)]
pub struct UploadChunkParams {
    /// 1 to 10,000.
    pub chunk_number: u32,
    /// At most 100MB, and at least 5MB unless it is the last chunk.
    pub file: FileContent,
    pub session_id: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Responses
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteChunkedUploadResult {
    pub file_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartChunkedUploadResult {
    /// Valid for 7 days.
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadChunkResult {
    pub tag: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfLink {
    #[serde(rename = "self")]
    pub self_link: String,
}

/// Raw response of the upload endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedAsset {
    #[serde(rename = "_links")]
    pub links: SelfLink,
}

/// A newly created asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAssetResult {
    #[serde(rename = "_links")]
    pub links: SelfLink,
    /// Last path segment of the `self` link.
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download: Option<String>,
}

/// Which optional sections of an asset were expanded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetExpanded {
    pub asset_properties: bool,
    pub download_link: Option<bool>,
    pub file_properties: bool,
    pub metadata: bool,
    pub metadata_info: bool,
    pub metadata_vocabulary: bool,
    pub security: bool,
    pub thumbnails: bool,
}

/// A stored file in the DAM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    #[serde(rename = "_links", default)]
    pub links: AssetLinks,
    #[serde(default)]
    pub asset_properties: Option<AssetProperties>,
    pub created_date: DateTime<Utc>,
    pub current_version: bool,
    #[serde(default)]
    pub deleted_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub embeds: Option<JsonValue>,
    #[serde(default)]
    pub expanded: AssetExpanded,
    pub external_id: String,
    #[serde(default)]
    pub file_properties: Option<FileProperties>,
    pub file_upload_date: DateTime<Utc>,
    pub filename: String,
    pub id: String,
    pub last_update_date: DateTime<Utc>,
    #[serde(default)]
    pub metadata: Option<AssetMetadata>,
    #[serde(default)]
    pub metadata_info: Option<MetadataInfo>,
    pub released_and_not_expired: bool,
    #[serde(default)]
    pub security: Option<AssetSecurity>,
    #[serde(default)]
    pub status: Option<AssetStatus>,
    #[serde(default)]
    pub thumbnails: Option<Thumbnails>,
    pub version_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetProperties {
    pub cutline_caption: String,
    pub favorite: bool,
    pub popularity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageProperties {
    pub aspect_ratio: f64,
    pub height: Option<u64>,
    pub width: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoProperties {
    pub aspect_ratio: Option<f64>,
    /// Seconds.
    pub duration: Option<f64>,
    pub height: Option<u64>,
    pub width: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileProperties {
    pub format: String,
    pub format_type: String,
    #[serde(default)]
    pub image_properties: Option<ImageProperties>,
    pub size_in_bytes: u64,
    pub size_in_kbytes: f64,
    #[serde(default)]
    pub video_properties: Option<VideoProperties>,
}

/// Metadata of an asset: field key to values. Empty fields are empty arrays.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetMetadata {
    pub fields: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataInfo {
    pub field_set: String,
    pub field_set_fields: Vec<FieldSetField>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSetField {
    pub controlled_vocabulary: bool,
    pub editable: bool,
    pub field_type: crate::types::MetadataFieldType,
    pub key: String,
    pub label: String,
    pub required: bool,
    #[serde(rename = "type")]
    pub kind: crate::types::MetadataFieldType,
    #[serde(default)]
    pub vocabulary: Option<Vec<String>>,
}

/// Security of an asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetSecurity {
    pub asset_groups: Vec<String>,
    pub expiration_date: Option<DateTime<Utc>>,
    pub release_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadProgress {
    Pending,
    Verifying,
    Complete,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetStatus {
    pub upload_progress: UploadProgress,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    pub valid_until: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thumbnails {
    #[serde(rename = "125px")]
    pub px125: Thumbnail,
    #[serde(rename = "160px")]
    pub px160: Thumbnail,
    #[serde(rename = "300px")]
    pub px300: Thumbnail,
    #[serde(rename = "600px")]
    pub px600: Thumbnail,
    #[serde(rename = "2048px")]
    pub px2048: Thumbnail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetGroup {
    pub name: String,
    pub uuid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationLink {
    pub asset_uuid: String,
    pub description: String,
    pub updated_date: DateTime<Utc>,
    pub url: Option<String>,
    pub uuid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListIntegrationLinksResult {
    pub integration_links: Vec<IntegrationLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadProfile {
    pub asset_groups: Vec<String>,
    pub immediate_release: bool,
    pub name: String,
    pub release_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFormat {
    pub description: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListFileFormatsResult {
    pub count: u64,
    pub formats: Vec<FileFormat>,
}

/// One version of an asset (v1 shape).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetVersion {
    pub date_added: DateTime<Utc>,
    pub date_last_edited: DateTime<Utc>,
    pub external_id: String,
    pub file_format: String,
    pub finalized: bool,
    pub name: String,
    pub previews: crate::types::Previews,
    pub size: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub uuid: String,
    pub version_number: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListVersionsResult {
    pub num_results: u64,
    pub uuid: String,
    pub versions: Vec<AssetVersion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryFacet {
    pub count: u64,
    pub id: String,
    pub name: String,
    pub path: String,
    pub search_query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileTypeFacet {
    pub count: u64,
    pub name: String,
    pub search_query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataFacetValue {
    pub count: u64,
    pub search_query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataFacet {
    pub display_key: String,
    pub display_name: String,
    pub values: Vec<MetadataFacetValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchFacets {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<CategoryFacet>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_types: Option<Vec<FileTypeFacet>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<MetadataFacet>>,
}

/// Result of an asset search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchAssetsResult {
    #[serde(default)]
    pub facets: Option<SearchFacets>,
    pub include_archived: bool,
    pub include_deleted: bool,
    pub item_type: String,
    pub items: Vec<Asset>,
    pub limit: u64,
    pub offset: u64,
    #[serde(default)]
    pub query: Option<String>,
    pub query_explained: String,
    pub query_syntax_ok: bool,
    /// Pass to a scroll search to fetch the next page.
    #[serde(default)]
    pub scroll_id: Option<String>,
    #[serde(default)]
    pub scroll_timeout: Option<String>,
    pub sort: String,
    pub sort_explained: String,
    pub total_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_params_untagged() {
        let basic = SearchAssetsParams::Basic(BasicSearchParams {
            limit: Some(1),
            query: Some("cats".into()),
            expand: vec![AssetExpand::Metadata, AssetExpand::FileProperties],
            ..Default::default()
        });
        assert_eq!(
            serde_json::to_value(&basic).unwrap(),
            json!({"expand": ["metadata", "file_properties"], "limit": 1, "query": "cats"})
        );

        let scroll = SearchAssetsParams::Scroll(ScrollSearchParams {
            expand: vec![],
            scroll_id: "s1".into(),
        });
        assert_eq!(serde_json::to_value(&scroll).unwrap(), json!({"scroll_id": "s1"}));
    }

    #[test]
    fn test_security_params_serialize_clear_as_null() {
        let params = UpdateSecurityParams {
            expiration_date: Some(None),
            patch: Some(vec![SecurityPatch::ExpirationDate]),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"expiration_date": null})
        );
    }

    #[test]
    fn test_asset_deserializes_minimal() {
        let asset: Asset = serde_json::from_value(json!({
            "_links": {},
            "asset_properties": null,
            "created_date": "2021-03-04T05:06:07Z",
            "current_version": true,
            "deleted_date": null,
            "embeds": null,
            "expanded": {
                "asset_properties": false,
                "file_properties": false,
                "metadata": true,
                "metadata_info": false,
                "metadata_vocabulary": false,
                "security": false,
                "thumbnails": false
            },
            "external_id": "ext",
            "file_properties": null,
            "file_upload_date": "2021-03-04T05:06:07Z",
            "filename": "cat.jpg",
            "id": "uuid-1",
            "last_update_date": "2021-03-05T05:06:07Z",
            "metadata": {"fields": {"keywords": ["cat"], "empty": []}},
            "metadata_info": null,
            "released_and_not_expired": true,
            "security": null,
            "status": null,
            "thumbnails": null,
            "version_id": "v1"
        }))
        .unwrap();

        assert_eq!(asset.id, "uuid-1");
        assert_eq!(asset.created_date.to_rfc3339(), "2021-03-04T05:06:07+00:00");
        assert!(asset.expanded.metadata);
        assert_eq!(asset.metadata.unwrap().fields["keywords"], vec!["cat"]);
    }
}
