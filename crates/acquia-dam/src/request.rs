//! Request descriptors.
//!
//! Resource clients describe each call as an [`ApiRequest`] and hand it to
//! [`ApiClient::send_request`](crate::ApiClient::send_request), which owns
//! everything about the wire format.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::credential::ApiVersion;
use crate::error::Result;

/// One request against the DAM API.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub version: ApiVersion,
    pub method: Method,
    /// Path relative to the version's base URL, without a leading slash.
    pub path: String,
    pub query: Option<QueryParams>,
    pub body: Option<RequestBody>,
}

impl ApiRequest {
    /// Create a request with no query or body.
    pub fn new(version: ApiVersion, method: Method, path: impl Into<String>) -> Self {
        Self {
            version,
            method,
            path: path.into(),
            query: None,
            body: None,
        }
    }

    /// A GET request.
    pub fn get(version: ApiVersion, path: impl Into<String>) -> Self {
        Self::new(version, Method::GET, path)
    }

    /// A POST request.
    pub fn post(version: ApiVersion, path: impl Into<String>) -> Self {
        Self::new(version, Method::POST, path)
    }

    /// A PUT request.
    pub fn put(version: ApiVersion, path: impl Into<String>) -> Self {
        Self::new(version, Method::PUT, path)
    }

    /// A DELETE request.
    pub fn delete(version: ApiVersion, path: impl Into<String>) -> Self {
        Self::new(version, Method::DELETE, path)
    }

    /// Attach query parameters built from any serializable value.
    pub fn with_query<Q: Serialize + ?Sized>(mut self, query: &Q) -> Result<Self> {
        self.query = Some(QueryParams::from_serialize(query)?);
        Ok(self)
    }

    /// Attach a JSON body.
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(RequestBody::Json(serde_json::to_value(body)?));
        Ok(self)
    }

    /// Attach a multipart form body.
    pub fn with_form(mut self, form: FormBody) -> Self {
        self.body = Some(RequestBody::Form(form));
        self
    }
}

/// Request body. JSON bodies are serialized and labelled
/// `application/json`; form bodies go out as `multipart/form-data` as-is.
#[derive(Debug, Clone)]
pub enum RequestBody {
    Json(Value),
    Form(FormBody),
}

/// Ordered query-string parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// Build parameters from a serializable struct or map.
    ///
    /// Arrays are joined with commas, other values are stringified, nulls
    /// are dropped. Field order is kept.
    pub fn from_serialize<Q: Serialize + ?Sized>(query: &Q) -> Result<Self> {
        Ok(build_query(&serde_json::to_value(query)?))
    }

    /// Parameters in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    /// Whether no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Form-urlencoded query string, without the leading `?`.
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter())
            .finish()
    }
}

/// Flatten a JSON object into query parameters.
///
/// Non-object values produce no parameters.
pub fn build_query(value: &Value) -> QueryParams {
    let mut params = QueryParams::new();
    if let Value::Object(map) = value {
        for (key, value) in map {
            if let Some(value) = query_value(value) {
                params.push(key.as_str(), value);
            }
        }
    }
    params
}

fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| query_value(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        other => Some(other.to_string()),
    }
}

/// A multipart form payload.
#[derive(Debug, Clone, Default)]
pub struct FormBody {
    parts: Vec<(String, FormPart)>,
}

/// One field of a [`FormBody`].
#[derive(Debug, Clone, PartialEq)]
pub enum FormPart {
    Text(String),
    File(FileContent),
}

/// File content for uploads.
#[derive(Debug, Clone, PartialEq)]
pub struct FileContent {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime_type: Option<String>,
}

impl FileContent {
    /// File bytes with the file name sent in the form part.
    pub fn new(bytes: impl Into<Vec<u8>>, file_name: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            file_name: file_name.into(),
            mime_type: None,
        }
    }

    /// Set the part's content type.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

impl FormBody {
    /// Empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text field.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push((name.into(), FormPart::Text(value.into())));
        self
    }

    /// Append a file field.
    pub fn file(mut self, name: impl Into<String>, file: FileContent) -> Self {
        self.parts.push((name.into(), FormPart::File(file)));
        self
    }

    /// Fields in insertion order.
    pub fn parts(&self) -> &[(String, FormPart)] {
        &self.parts
    }

    /// Convert into a reqwest multipart form, part for part.
    pub(crate) fn into_multipart(self) -> Result<reqwest::multipart::Form> {
        let mut form = reqwest::multipart::Form::new();
        for (name, part) in self.parts {
            form = match part {
                FormPart::Text(value) => form.text(name, value),
                FormPart::File(file) => {
                    let mut part =
                        reqwest::multipart::Part::bytes(file.bytes).file_name(file.file_name);
                    if let Some(mime) = file.mime_type {
                        part = part.mime_str(&mime)?;
                    }
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_arrays_joined_and_order_kept() {
        let params = build_query(&json!({"a": ["x", "y"], "b": 1}));
        assert_eq!(
            params.pairs(),
            &[
                ("a".to_string(), "x,y".to_string()),
                ("b".to_string(), "1".to_string())
            ]
        );
        assert_eq!(params.encode(), "a=x%2Cy&b=1");
    }

    #[test]
    fn test_insertion_order_not_sorted() {
        let params = build_query(&json!({"zeta": true, "alpha": "s", "mid": 2.5}));
        let keys: Vec<&str> = params.pairs().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(params.pairs()[0].1, "true");
        assert_eq!(params.pairs()[2].1, "2.5");
    }

    #[test]
    fn test_nulls_dropped() {
        let params = build_query(&json!({"a": null, "b": "keep"}));
        assert_eq!(params.pairs(), &[("b".to_string(), "keep".to_string())]);
    }

    #[test]
    fn test_from_serialize_struct() {
        #[derive(Serialize)]
        struct Query {
            limit: u32,
            #[serde(skip_serializing_if = "Option::is_none")]
            offset: Option<u32>,
            expand: Vec<&'static str>,
        }

        let params = QueryParams::from_serialize(&Query {
            limit: 10,
            offset: None,
            expand: vec!["metadata", "security"],
        })
        .unwrap();
        assert_eq!(params.encode(), "limit=10&expand=metadata%2Csecurity");
    }

    #[test]
    fn test_non_object_yields_nothing() {
        assert!(build_query(&json!([1, 2])).is_empty());
        assert!(build_query(&json!(null)).is_empty());
    }

    #[test]
    fn test_request_builders() {
        let req = ApiRequest::put(ApiVersion::V2, "assets/abc/filename")
            .with_json(&json!({"filename": "new.jpg"}))
            .unwrap();
        assert_eq!(req.method, Method::PUT);
        assert!(matches!(req.body, Some(RequestBody::Json(_))));

        let form = FormBody::new()
            .text("profile", "default")
            .file("file", FileContent::new(b"abc".to_vec(), "a.txt"));
        let req = ApiRequest::post(ApiVersion::V2, "uploads").with_form(form);
        match req.body {
            Some(RequestBody::Form(form)) => {
                assert_eq!(form.parts().len(), 2);
                assert_eq!(form.parts()[0].1, FormPart::Text("default".into()));
            }
            other => panic!("expected form body, got {other:?}"),
        }
    }
}
