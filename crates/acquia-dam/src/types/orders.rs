//! Orders: bundles of assets and conversions delivered to recipients.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Contact, Previews};

/// How to identify an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderRef {
    Id(String),
    /// Human-readable sequence number.
    SeqNum(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderMetadataItem {
    pub selected: bool,
    pub uuid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderMetadataItemList {
    pub items: Vec<OrderMetadataItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderMetadataField {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_list: Option<OrderMetadataItemList>,
    pub uuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderMetadata {
    pub fields: Vec<OrderMetadataField>,
}

/// Place an order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderParams {
    /// Asset UUIDs.
    pub assets: Vec<String>,
    /// Conversion UUIDs.
    pub conversions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_archive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<OrderMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Order profile UUID.
    pub profile: String,
    /// Recipient email addresses.
    pub recipients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemovedItem {
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanAssetsResult {
    pub removed_items: Vec<RemovedItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub conversions: BTreeMap<String, String>,
    pub filename: String,
    pub previews: Previews,
    pub uuid: String,
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub assets_in_order: u64,
    pub conversion_status: Option<String>,
    pub date_placed: DateTime<Utc>,
    pub download_count: u64,
    pub expiration_date: DateTime<Utc>,
    pub external_pickup_link: String,
    pub ordered_items: Vec<OrderItem>,
    pub recipient: Contact,
    pub sender: Contact,
    pub sequence_number: String,
    pub status: String,
    pub uuid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderResult {
    pub orders: Vec<Order>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZipStatus {
    pub archived: u64,
    pub done: bool,
    pub download: Option<String>,
    pub errored: bool,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub approval_required: bool,
    pub description: Option<String>,
    pub display_order: i64,
    pub media_type: String,
    pub name: String,
    pub uuid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionList {
    pub conversions: Vec<Conversion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderProfile {
    pub internet_delivery: bool,
    pub metadata_type_uuid: String,
    pub name: String,
    #[serde(default)]
    pub send_to_self: Option<bool>,
    pub special_instructions: Option<String>,
    pub uuid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderProfileList {
    pub profiles: Vec<OrderProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_order_params_camel_case() {
        let params = CreateOrderParams {
            assets: vec!["a".into()],
            conversions: vec!["c".into()],
            create_archive: Some(true),
            profile: "p".into(),
            recipients: vec!["x@example.com".into()],
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "assets": ["a"],
                "conversions": ["c"],
                "createArchive": true,
                "profile": "p",
                "recipients": ["x@example.com"]
            })
        );
    }
}
