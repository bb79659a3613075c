//! Instant search connector.

use serde::{Deserialize, Serialize};

use crate::json::JsonValue;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConnectorParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_search_bar: Option<bool>,
    /// Initial search query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

/// Search connector response, kept as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchConnector(pub JsonValue);

impl SearchConnector {
    /// The connector URL, when the response carries one.
    pub fn url(&self) -> Option<&str> {
        self.0.get("url").and_then(JsonValue::as_str)
    }
}
