//! Client error types.

use std::fmt;

use thiserror::Error;

use crate::json::JsonValue;

/// Client error type.
///
/// The first three variants are the SDK's own classifications. The rest are
/// failures of the underlying HTTP, URL or JSON machinery.
#[derive(Debug, Error)]
pub enum Error {
    /// The access token matches neither recognized shape.
    #[error("{}", sdk_message(.0))]
    MalformedCredential(String),

    /// A usage contract was violated before any request was sent.
    #[error("{}", sdk_message(.0))]
    Sdk(String),

    /// The server answered with a non-2xx status.
    #[error("{}", http_message(.status, .body))]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body, parsed as JSON when the server declared it.
        body: Option<ResponseBody>,
    },

    /// The request could not be sent or the response could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing failed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedCredential,
    Sdk,
    Http,
    Other,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MalformedCredential(_) => ErrorKind::MalformedCredential,
            Error::Sdk(_) => ErrorKind::Sdk,
            Error::Http { .. } => ErrorKind::Http,
            _ => ErrorKind::Other,
        }
    }

    /// HTTP status code, for [`Error::Http`].
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body, for [`Error::Http`].
    pub fn body(&self) -> Option<&ResponseBody> {
        match self {
            Error::Http { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status_code(), Some(401) | Some(403))
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self.status_code(), Some(status) if status >= 500)
    }

    pub(crate) fn sdk(message: impl Into<String>) -> Self {
        Error::Sdk(message.into())
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Parsed body of an HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// The server declared `application/json`; dates are already coerced.
    Json(JsonValue),
    /// Any other content type.
    Text(String),
}

impl ResponseBody {
    /// The JSON payload, if any.
    pub fn as_json(&self) -> Option<&JsonValue> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }

    /// The text payload, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseBody::Text(text) => Some(text),
            ResponseBody::Json(_) => None,
        }
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseBody::Json(value) => match serde_json::to_string(value) {
                Ok(json) => f.write_str(&json),
                Err(_) => f.write_str("<unprintable JSON>"),
            },
            ResponseBody::Text(text) => write!(f, "{text:?}"),
        }
    }
}

fn sdk_message(message: &str) -> String {
    describe("SDK Error", None, Some(&ResponseBody::Text(message.to_string())))
}

fn http_message(status: &u16, body: &Option<ResponseBody>) -> String {
    describe("HTTP Error", Some(*status), body.as_ref())
}

/// Render the `type / statusCode / body` block used as the error message.
fn describe(kind: &str, status: Option<u16>, body: Option<&ResponseBody>) -> String {
    let status = status.map_or_else(|| "N/A".to_string(), |s| s.to_string());
    let body = body.map_or_else(|| "N/A".to_string(), |b| b.to_string());
    format!("type: {kind:?}\nstatusCode: {status}\nbody: {body}")
}
