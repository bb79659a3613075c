//! Webhook delivery payloads.
//!
//! These are never returned by the API client; they describe what the DAM
//! posts to a webhook target, for consumers that receive deliveries.

use serde::{Deserialize, Serialize};

use crate::types::Category;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventUser {
    pub email: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventContext {
    pub user: EventUser,
}

/// Old and new value of a changed property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Change<T> {
    pub new_value: T,
    pub old_value: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetGroupId {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub display_name: String,
    pub id: String,
    pub value: String,
}

/// An asset webhook delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetEvent {
    pub asset_id: String,
    pub event_context: EventContext,
    pub webhook_configuration_id: String,
    pub webhook_delivery_id: String,
    #[serde(flatten)]
    pub kind: AssetEventKind,
}

/// Event-specific part of an [`AssetEvent`], tagged by `event_type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum AssetEventKind {
    AssetCreated {
        date_created: String,
    },
    AssetDeleted {
        date_deleted: String,
    },
    AssetReleaseDateUpdated {
        change: Change<Option<String>>,
    },
    AssetExpirationDateUpdated {
        change: Change<Option<String>>,
    },
    AssetAssetGroupsUpdated {
        change: Change<Vec<AssetGroupId>>,
    },
    AssetCategoriesUpdated {
        change: Change<Vec<Category>>,
    },
    AssetTagsUpdated {
        change: Change<Vec<Tag>>,
    },
    Ping,
    AssetVersionAdded {
        asset_version_id: String,
        date_created: String,
        version_number: String,
    },
}

/// Status of a workflow deliverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliverableStatus {
    NeedsSetup,
    NeedsProof,
    NeedsProofWithEdits,
    InReview,
    ReviewComplete,
    Closed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliverableStatusChangedEvent {
    pub deliverable_key: String,
    pub new_status: DeliverableStatus,
    pub old_status: DeliverableStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCreatedEvent {
    pub project_id: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> serde_json::Value {
        json!({
            "asset_id": "a1",
            "event_context": {"user": {"email": "u@example.com", "id": "u1"}},
            "webhook_configuration_id": "w1",
            "webhook_delivery_id": "d1"
        })
    }

    fn with(mut value: serde_json::Value, extra: serde_json::Value) -> serde_json::Value {
        let map = value.as_object_mut().unwrap();
        for (k, v) in extra.as_object().unwrap() {
            map.insert(k.clone(), v.clone());
        }
        value
    }

    #[test]
    fn test_asset_created_event() {
        let event: AssetEvent = serde_json::from_value(with(
            base(),
            json!({"event_type": "asset_created", "date_created": "2024-05-01T10:00:00Z"}),
        ))
        .unwrap();
        assert_eq!(event.asset_id, "a1");
        assert!(matches!(
            event.kind,
            AssetEventKind::AssetCreated { ref date_created } if date_created == "2024-05-01T10:00:00Z"
        ));
    }

    #[test]
    fn test_ping_and_tags_events() {
        let ping: AssetEvent =
            serde_json::from_value(with(base(), json!({"event_type": "ping"}))).unwrap();
        assert!(matches!(ping.kind, AssetEventKind::Ping));

        let tags: AssetEvent = serde_json::from_value(with(
            base(),
            json!({
                "event_type": "asset_tags_updated",
                "change": {
                    "old_value": [],
                    "new_value": [{"display_name": "Cat", "id": "t1", "value": "cat"}]
                }
            }),
        ))
        .unwrap();
        match tags.kind {
            AssetEventKind::AssetTagsUpdated { change } => {
                assert!(change.old_value.is_empty());
                assert_eq!(change.new_value[0].value, "cat");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_deliverable_status_changed() {
        let event: DeliverableStatusChangedEvent = serde_json::from_value(json!({
            "deliverable_key": "k",
            "new_status": "IN_REVIEW",
            "old_status": "NEEDS_PROOF_WITH_EDITS"
        }))
        .unwrap();
        assert_eq!(event.new_status, DeliverableStatus::InReview);
        assert_eq!(event.old_status, DeliverableStatus::NeedsProofWithEdits);
    }
}
