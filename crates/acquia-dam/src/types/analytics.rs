//! Asset analytics: downloads, shares and views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Filter on an analytics query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnalyticsFilter {
    /// Events on one asset.
    Asset { id: String },
    /// Events within a time window.
    DateRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// Analytics query.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalyticsParams {
    pub filters: Vec<AnalyticsFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Token from the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination_token: Option<String>,
}

/// A page of analytics events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsPage<T> {
    pub items: Vec<T>,
    /// `None` on the last page.
    pub pagination_token: Option<String>,
    pub total_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsAsset {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsFile {
    pub file_type: String,
    pub format: String,
    pub size_in_bytes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConversion {
    pub output_file_format: Option<String>,
    pub output_file_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsIntendedUse {
    pub value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsUser {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadAssetEvent {
    pub asset_properties: AnalyticsAsset,
    pub conversion_properties: AnalyticsConversion,
    pub file_properties: AnalyticsFile,
    pub intended_use_properties: AnalyticsIntendedUse,
    pub referrer: String,
    pub timestamp: DateTime<Utc>,
    pub user_properties: AnalyticsUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareAssetEvent {
    pub asset_properties: AnalyticsAsset,
    pub referrer: String,
    pub timestamp: DateTime<Utc>,
    pub user_properties: AnalyticsUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewAssetEvent {
    pub asset_properties: AnalyticsAsset,
    pub file_properties: AnalyticsFile,
    pub intended_use_properties: AnalyticsIntendedUse,
    pub referrer: String,
    pub timestamp: DateTime<Utc>,
    pub user_properties: AnalyticsUser,
}
