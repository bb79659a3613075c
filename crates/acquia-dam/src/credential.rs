//! Access tokens and the per-version base URL table.
//!
//! Two token shapes are accepted:
//!
//! - `wat_<key>_<rest>`: personal access tokens issued by the DAM admin UI.
//! - `<key>/<rest>`: OAuth access tokens.
//!
//! In both, `<key>` is the collective key: the tenant name that becomes the
//! subdomain of the v1 API host.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Placeholder in the v1 base URL template that receives the collective key.
pub const COLLECTIVE_PLACEHOLDER: &str = "{collective}";

/// Default v1 base URL template.
pub const DEFAULT_V1_BASE_URL: &str = "https://{collective}.widencollective.com/api/rest/";

/// Default v2 base URL.
pub const DEFAULT_V2_BASE_URL: &str = "https://api.widencollective.com/v2/";

static PERSONAL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^wat_[a-z]*_").expect("token pattern is valid"));

static OAUTH_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]*/").expect("token pattern is valid"));

/// DAM API version. Each endpoint lives on exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    V1,
    V2,
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiVersion::V1 => f.write_str("1"),
            ApiVersion::V2 => f.write_str("2"),
        }
    }
}

/// Extract the collective key from a token.
///
/// Returns `Ok(None)` for the empty token, which is the reset state.
pub fn collective_key(token: &str) -> Result<Option<String>> {
    if token.is_empty() {
        return Ok(None);
    }
    if PERSONAL_TOKEN.is_match(token) {
        let key = token.split('_').nth(1).unwrap_or_default();
        return Ok(Some(key.to_string()));
    }
    if OAUTH_TOKEN.is_match(token) {
        let key = token.split('/').next().unwrap_or_default();
        return Ok(Some(key.to_string()));
    }
    Err(Error::MalformedCredential("Malformed Access Token".to_string()))
}

/// The stored token together with everything derived from it.
#[derive(Clone)]
pub(crate) struct Credential {
    token: String,
    collective_key: Option<String>,
    v1_template: String,
    v1_base_url: String,
    v2_base_url: String,
}

impl Credential {
    /// An unset credential using the given base URLs.
    pub(crate) fn new(v1_template: String, v2_base_url: String) -> Self {
        let v1_base_url = v1_template.replace(COLLECTIVE_PLACEHOLDER, "");
        Self {
            token: String::new(),
            collective_key: None,
            v1_template,
            v1_base_url,
            v2_base_url,
        }
    }

    /// Validate and store `token`. On error nothing changes.
    pub(crate) fn set(&mut self, token: &str) -> Result<()> {
        let key = collective_key(token)?;
        self.v1_base_url = self
            .v1_template
            .replace(COLLECTIVE_PLACEHOLDER, key.as_deref().unwrap_or_default());
        self.collective_key = key;
        self.token = token.to_string();
        Ok(())
    }

    pub(crate) fn token(&self) -> Option<&str> {
        if self.token.is_empty() {
            None
        } else {
            Some(&self.token)
        }
    }

    pub(crate) fn collective_key(&self) -> Option<&str> {
        self.collective_key.as_deref()
    }

    pub(crate) fn base_url(&self, version: ApiVersion) -> &str {
        match version {
            ApiVersion::V1 => &self.v1_base_url,
            ApiVersion::V2 => &self.v2_base_url,
        }
    }
}

// The token never shows up in debug output.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &self.token().map(|_| "<redacted>"))
            .field("collective_key", &self.collective_key)
            .field("v1_base_url", &self.v1_base_url)
            .field("v2_base_url", &self.v2_base_url)
            .finish()
    }
}
