//! Resource clients, one per API area.
//!
//! Each holds a clone of [`ApiClient`](crate::ApiClient) and is obtained from
//! one of its accessors, e.g. `client.assets()`.

use std::borrow::Cow;

use crate::error::{Error, Result};

mod analytics;
mod assets;
mod attributes;
mod categories;
mod collections;
mod metadata;
mod orders;
mod products;
mod search_connector;
mod usage;
mod users;
mod webhooks;
mod workflow;

pub use analytics::AnalyticsApi;
pub use assets::AssetsApi;
pub use attributes::AttributesApi;
pub use categories::{encode_category_path, CategoriesApi};
pub use collections::CollectionsApi;
pub use metadata::MetadataApi;
pub use orders::OrdersApi;
pub use products::ProductsApi;
pub use search_connector::SearchConnectorApi;
pub use usage::UsageApi;
pub use users::UsersApi;
pub use webhooks::WebhooksApi;
pub use workflow::WorkflowApi;

/// Percent-encode one path segment.
///
/// Empty, `.` and `..` are rejected: URL parsing would resolve them as dot
/// segments and the request would reach a different resource.
pub(crate) fn segment(value: &str) -> Result<Cow<'_, str>> {
    if matches!(value, "" | "." | "..") {
        return Err(Error::sdk(format!("Invalid path segment {:?}", value)));
    }
    Ok(urlencoding::encode(value))
}

/// Comma-joined `patch` query value.
pub(crate) fn patch_query<I, S>(keys: I) -> crate::request::QueryParams
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = keys
        .into_iter()
        .map(|key| key.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(",");
    let mut query = crate::request::QueryParams::new();
    query.push("patch", joined);
    query
}

/// Keys of a serialized body, in order.
pub(crate) fn body_keys(body: &serde_json::Value) -> Vec<String> {
    body.as_object()
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_segment_encoding() {
        assert_eq!(segment("abc-123").unwrap(), "abc-123");
        assert_eq!(segment("red / blue").unwrap(), "red%20%2F%20blue");
        assert_eq!(segment("v1.2").unwrap(), "v1.2");
    }

    #[test]
    fn test_segment_rejects_dot_segments() {
        for value in ["", ".", ".."] {
            let err = segment(value).unwrap_err();
            assert_eq!(err.kind(), crate::ErrorKind::Sdk);
        }
    }

    #[test]
    fn test_patch_query_joins() {
        assert_eq!(patch_query(["a", "b"]).encode(), "patch=a%2Cb");
        assert_eq!(patch_query(Vec::<String>::new()).encode(), "patch=");
    }

    #[test]
    fn test_body_keys_keep_order() {
        assert_eq!(body_keys(&json!({"z": 1, "a": 2})), vec!["z", "a"]);
        assert!(body_keys(&json!(null)).is_empty());
    }
}
