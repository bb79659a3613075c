//! Request and response types for the DAM API.
//!
//! Known timestamp fields are `chrono::DateTime<Utc>`. Open-ended subtrees
//! use [`JsonValue`](crate::JsonValue), which has its timestamps coerced on
//! deserialization.

mod analytics;
mod assets;
mod attributes;
mod categories;
mod collections;
mod events;
mod metadata;
mod orders;
mod products;
mod search_connector;
mod usage;
mod users;
mod webhooks;
mod workflow;

pub use analytics::*;
pub use assets::*;
pub use attributes::*;
pub use categories::*;
pub use collections::*;
pub use events::*;
pub use metadata::*;
pub use orders::*;
pub use products::*;
pub use search_connector::*;
pub use usage::*;
pub use users::*;
pub use webhooks::*;
pub use workflow::*;

use serde::{Deserialize, Serialize};

/// A page of results from a v2 list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Type of the items, e.g. `"asset"`.
    pub item_type: String,
    /// Items on this page.
    pub items: Vec<T>,
    /// Total number of matching items across all pages.
    pub total_count: u64,
    /// Page size, for endpoints that paginate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    /// Offset of the first item, for endpoints that paginate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

/// Limit/offset query used by paginated list endpoints.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl Pagination {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }
}

/// Body shape `{"uuids": [...]}` used throughout the v1 API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Uuids {
    pub uuids: Vec<String>,
}

impl Uuids {
    pub fn new<I, S>(uuids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            uuids: uuids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Preview image URLs of a v1 asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Previews {
    pub preview125: String,
    pub preview160: String,
    pub preview300: String,
    pub preview600: String,
    pub preview2048: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templated: Option<String>,
}
