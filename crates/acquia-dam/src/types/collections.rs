//! Collections: named groupings of assets.

use serde::{Deserialize, Serialize};

/// Add assets to and remove assets from collections.
#[derive(Debug, Clone, Default)]
pub struct CollectionAssetsParams {
    /// Collection UUIDs.
    pub collections: Vec<String>,
    pub assets_to_add: Vec<String>,
    pub assets_to_remove: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateCollectionParams {
    pub title: String,
    pub description: String,
    /// Assets to put in the new collection.
    pub assets: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionType {
    Global,
    Private,
    Shared,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListCollectionsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(rename = "type")]
    pub kind: CollectionType,
}

impl ListCollectionsParams {
    pub fn new(kind: CollectionType) -> Self {
        Self {
            limit: None,
            offset: None,
            kind,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionAsset {
    pub uuid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedCollection {
    pub assets: Vec<CollectionAsset>,
    pub assets_added_count: u64,
    pub description: String,
    pub name: String,
    pub num_results: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub uuid: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    #[serde(rename = "_links", default)]
    pub links: CollectionLinks,
    pub id: String,
    pub title: String,
    pub total_items: u64,
    #[serde(rename = "type")]
    pub kind: CollectionType,
}
