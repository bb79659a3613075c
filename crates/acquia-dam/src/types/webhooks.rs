//! Webhook configurations for asset and workflow events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Asset events a webhook can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetEventType {
    AssetCreated,
    AssetDeleted,
    AssetReleaseDateUpdated,
    AssetExpirationDateUpdated,
    AssetAssetGroupsUpdated,
    AssetCategoriesUpdated,
    AssetTagsUpdated,
    AssetVersionAdded,
}

/// Workflow events a webhook can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowEventType {
    DeliverableStatusChanged,
    ProjectCreated,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateAssetsWebhookParams {
    pub delivery_url: String,
    pub event_type: AssetEventType,
    /// Used to sign deliveries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateWorkflowWebhookParams {
    pub event: WorkflowEventType,
    /// URL deliveries are posted to.
    pub target: String,
}

/// Properties of an asset webhook that can be patched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebhookPatch {
    DeliveryEnabled,
    DeliveryUrl,
    EventType,
    SecretKey,
}

impl WebhookPatch {
    pub fn as_str(&self) -> &'static str {
        match self {
            WebhookPatch::DeliveryEnabled => "delivery_enabled",
            WebhookPatch::DeliveryUrl => "delivery_url",
            WebhookPatch::EventType => "event_type",
            WebhookPatch::SecretKey => "secret_key",
        }
    }
}

/// Edit an asset webhook.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EditAssetsWebhookParams {
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<AssetEventType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
    /// Properties to update. Defaults to the ones set above.
    #[serde(skip)]
    pub patch: Option<Vec<WebhookPatch>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAssetsWebhookResult {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookCreator {
    pub uuid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsWebhook {
    pub created_by_user: WebhookCreator,
    pub created_date: DateTime<Utc>,
    pub delivery_enabled: bool,
    pub event_type: String,
    pub last_delivered_date: Option<DateTime<Utc>>,
    pub last_pinged_date: Option<DateTime<Utc>>,
    pub signing_enabled: bool,
    pub webhook_configuration_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowWebhook {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<WorkflowEventType>,
    pub target: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowWebhooks {
    pub items: Vec<WorkflowWebhook>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_workflow_event_names() {
        assert_eq!(
            serde_json::to_value(WorkflowEventType::DeliverableStatusChanged).unwrap(),
            json!("DELIVERABLE_STATUS_CHANGED")
        );
    }

    #[test]
    fn test_edit_params_body_only_has_set_fields() {
        let params = EditAssetsWebhookParams {
            id: "w1".into(),
            delivery_enabled: Some(false),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"delivery_enabled": false})
        );
    }
}
