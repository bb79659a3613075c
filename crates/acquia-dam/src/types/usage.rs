//! API usage.

use serde::{Deserialize, Serialize};

use crate::json::JsonValue;

/// API usage report. The shape is not fixed, so it is kept as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiUsage(pub JsonValue);
