//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::api::{
    AnalyticsApi, AssetsApi, AttributesApi, CategoriesApi, CollectionsApi, MetadataApi, OrdersApi,
    ProductsApi, SearchConnectorApi, UsageApi, UsersApi, WebhooksApi, WorkflowApi,
};
use crate::credential::{
    ApiVersion, Credential, COLLECTIVE_PLACEHOLDER, DEFAULT_V1_BASE_URL, DEFAULT_V2_BASE_URL,
};
use crate::error::{Error, ResponseBody, Result};
use crate::json::coerce_dates;
use crate::request::{ApiRequest, RequestBody};

/// Header carrying the SDK identifier on every request.
pub const SDK_CLIENT_HEADER: &str = "x-acquia-sdk-client";

/// Environment variable read by [`ApiClient::from_env`].
pub const ACCESS_TOKEN_ENV: &str = "ACQUIA_DAM_ACCESS_TOKEN";

/// Default SDK identifier.
pub fn default_sdk_identifier() -> String {
    format!("acquia-dam-rs@{}", env!("CARGO_PKG_VERSION"))
}

/// Acquia DAM API client.
///
/// Owns the access token and the base URL of each API version, and is the
/// single place requests are built and responses parsed. Resource clients
/// (`client.assets()`, `client.orders()`, ...) hold a clone of it; clones
/// share the same credential.
///
/// # Example
///
/// ```no_run
/// use acquia_dam::ApiClient;
///
/// # async fn example() -> acquia_dam::Result<()> {
/// let client = ApiClient::new("wat_acme_0123456789")?;
/// let groups = client.assets().list_asset_groups().await?;
/// println!("{} asset groups", groups.total_count);
/// # Ok(())
/// # }
/// ```
///
/// # Concurrency
///
/// Requests may run concurrently from any number of clones. The token is
/// read once per request, when headers are built; replacing it while
/// requests are in flight is last-write-wins and those requests may go out
/// with either value.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
struct ClientInner {
    http: reqwest::Client,
    credential: RwLock<Credential>,
    sdk_identifier: String,
    timeout: Option<Duration>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("credential", &*self.inner.credential.read())
            .field("sdk_identifier", &self.inner.sdk_identifier)
            .finish()
    }
}

impl ApiClient {
    /// Create a client with default settings and the given access token.
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::builder().access_token(access_token).build()
    }

    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client using the token in `ACQUIA_DAM_ACCESS_TOKEN`.
    ///
    /// A missing variable leaves the client without a token.
    pub fn from_env() -> Result<Self> {
        let mut builder = Self::builder();
        if let Ok(token) = std::env::var(ACCESS_TOKEN_ENV) {
            builder = builder.access_token(token);
        }
        builder.build()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Credential
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the access token.
    ///
    /// The empty string clears it. Any other value must look like
    /// `wat_<key>_...` or `<key>/...`; otherwise this returns
    /// [`Error::MalformedCredential`] and the previous token stays.
    pub fn set_access_token(&self, token: impl AsRef<str>) -> Result<()> {
        self.inner.credential.write().set(token.as_ref())
    }

    /// The current access token, if one is set.
    pub fn access_token(&self) -> Option<String> {
        self.inner.credential.read().token().map(str::to_string)
    }

    /// The collective key derived from the current token.
    pub fn collective_key(&self) -> Option<String> {
        self.inner
            .credential
            .read()
            .collective_key()
            .map(str::to_string)
    }

    /// Base URL currently used for an API version.
    pub fn base_url(&self, version: ApiVersion) -> String {
        self.inner.credential.read().base_url(version).to_string()
    }

    /// The SDK identifier sent with every request.
    pub fn sdk_identifier(&self) -> &str {
        &self.inner.sdk_identifier
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the analytics API.
    pub fn analytics(&self) -> AnalyticsApi {
        AnalyticsApi::new(self.clone())
    }

    /// Access the assets API.
    pub fn assets(&self) -> AssetsApi {
        AssetsApi::new(self.clone())
    }

    /// Access the attributes API.
    pub fn attributes(&self) -> AttributesApi {
        AttributesApi::new(self.clone())
    }

    /// Access the categories API.
    pub fn categories(&self) -> CategoriesApi {
        CategoriesApi::new(self.clone())
    }

    /// Access the collections API.
    pub fn collections(&self) -> CollectionsApi {
        CollectionsApi::new(self.clone())
    }

    /// Access the metadata API.
    pub fn metadata(&self) -> MetadataApi {
        MetadataApi::new(self.clone())
    }

    /// Access the orders API.
    pub fn orders(&self) -> OrdersApi {
        OrdersApi::new(self.clone())
    }

    /// Access the products API.
    pub fn products(&self) -> ProductsApi {
        ProductsApi::new(self.clone())
    }

    /// Access the instant search connector API.
    pub fn search_connector(&self) -> SearchConnectorApi {
        SearchConnectorApi::new(self.clone())
    }

    /// Access the usage API.
    pub fn usage(&self) -> UsageApi {
        UsageApi::new(self.clone())
    }

    /// Access the users API.
    pub fn users(&self) -> UsersApi {
        UsersApi::new(self.clone())
    }

    /// Access the webhooks API.
    pub fn webhooks(&self) -> WebhooksApi {
        WebhooksApi::new(self.clone())
    }

    /// Access the workflow API.
    pub fn workflow(&self) -> WorkflowApi {
        WorkflowApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transport
    // ─────────────────────────────────────────────────────────────────────────

    /// Send a request and deserialize the response body into `T`.
    ///
    /// An empty 2xx body deserializes from `null`, so `()` and `Option<_>`
    /// work for endpoints that return nothing. Non-JSON bodies deserialize
    /// from a JSON string. Non-2xx responses become [`Error::Http`]; nothing
    /// is retried.
    #[instrument(skip(self, request), fields(method = %request.method, version = %request.version, path = %request.path))]
    pub async fn send_request<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let headers = self.build_headers(&request)?;
        let url = self.build_url(&request)?;

        let mut builder = self
            .inner
            .http
            .request(request.method.clone(), url.clone())
            .headers(headers);
        if let Some(timeout) = self.inner.timeout {
            builder = builder.timeout(timeout);
        }
        builder = match request.body {
            Some(RequestBody::Json(body)) => builder.body(serde_json::to_vec(&body)?),
            Some(RequestBody::Form(form)) => builder.multipart(form.into_multipart()?),
            None => builder,
        };

        debug!(%url, "sending request");
        let response = builder.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "received response");

        if !status.is_success() {
            let body = self.parse_error_body(response).await;
            return Err(Error::Http {
                status: status.as_u16(),
                body,
            });
        }

        let value = match read_body(response).await? {
            None => Value::Null,
            Some(Payload::Json(value)) => value,
            Some(Payload::Text(text)) => Value::String(text),
        };
        Ok(serde_json::from_value(value)?)
    }

    /// Send a request whose response body is not needed.
    pub async fn execute(&self, request: ApiRequest) -> Result<()> {
        self.send_request::<IgnoredAny>(request).await?;
        Ok(())
    }

    /// Build the full URL for a request: base URL, path, query string.
    pub fn build_url(&self, request: &ApiRequest) -> Result<Url> {
        let base = self.base_url(request.version);
        let mut url = format!("{}{}", base, request.path);
        if let Some(query) = request.query.as_ref().filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(&query.encode());
        }
        Ok(Url::parse(&url)?)
    }

    /// Build request headers.
    ///
    /// Fails with [`Error::Sdk`] when no token is set.
    pub fn build_headers(&self, request: &ApiRequest) -> Result<HeaderMap> {
        let token = self
            .access_token()
            .ok_or_else(|| Error::sdk("Access token is not set"))?;

        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| Error::Config("Invalid access token".to_string()))?;
        headers.insert(AUTHORIZATION, auth);

        let identifier = HeaderValue::from_str(&self.inner.sdk_identifier)
            .map_err(|_| Error::Config("Invalid SDK identifier".to_string()))?;
        headers.insert(HeaderName::from_static(SDK_CLIENT_HEADER), identifier);

        if matches!(request.body, Some(RequestBody::Json(_))) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        Ok(headers)
    }

    /// Read the body of a failed response.
    ///
    /// A body labelled JSON that does not parse is kept as text. Only an
    /// empty or unreadable body yields `None`.
    async fn parse_error_body(&self, response: reqwest::Response) -> Option<ResponseBody> {
        let (is_json, bytes) = match read_bytes(response).await {
            Ok(read) => read,
            Err(e) => {
                warn!(error = %e, "Failed to read error response body");
                return None;
            }
        };
        let payload = match decode_body(is_json, &bytes) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "Error response body is not valid JSON");
                Some(Payload::Text(String::from_utf8_lossy(&bytes).into_owned()))
            }
        };
        payload.map(|payload| match payload {
            Payload::Json(value) => ResponseBody::Json(coerce_dates(value)),
            Payload::Text(text) => ResponseBody::Text(text),
        })
    }
}

/// A response body before typing.
enum Payload {
    Json(Value),
    Text(String),
}

/// Read a response body: JSON when the content type says so, text
/// otherwise, `None` when empty.
async fn read_body(response: reqwest::Response) -> Result<Option<Payload>> {
    let (is_json, bytes) = read_bytes(response).await?;
    decode_body(is_json, &bytes)
}

/// Read the raw body and whether it is labelled JSON.
async fn read_bytes(response: reqwest::Response) -> Result<(bool, Vec<u8>)> {
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("application/json"));
    Ok((is_json, response.bytes().await?.to_vec()))
}

fn decode_body(is_json: bool, bytes: &[u8]) -> Result<Option<Payload>> {
    if bytes.is_empty() {
        return Ok(None);
    }
    if is_json {
        Ok(Some(Payload::Json(serde_json::from_slice(bytes)?)))
    } else {
        Ok(Some(Payload::Text(
            String::from_utf8_lossy(bytes).into_owned(),
        )))
    }
}

/// Builder for creating an [`ApiClient`].
#[derive(Debug)]
pub struct ClientBuilder {
    access_token: Option<String>,
    v1_base_url: String,
    v2_base_url: String,
    sdk_identifier: String,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            access_token: None,
            v1_base_url: DEFAULT_V1_BASE_URL.to_string(),
            v2_base_url: DEFAULT_V2_BASE_URL.to_string(),
            sdk_identifier: default_sdk_identifier(),
            user_agent: None,
            timeout: None,
        }
    }

    /// Set the access token.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set the v1 base URL template. `{collective}` is replaced by the
    /// collective key of the token.
    pub fn v1_base_url(mut self, template: impl Into<String>) -> Self {
        self.v1_base_url = template.into();
        self
    }

    /// Set the v2 base URL.
    pub fn v2_base_url(mut self, url: impl Into<String>) -> Self {
        self.v2_base_url = url.into();
        self
    }

    /// Set the SDK identifier header value.
    pub fn sdk_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.sdk_identifier = identifier.into();
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Set a per-request timeout. None by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<ApiClient> {
        let v1_base_url = normalize_base(self.v1_base_url);
        let v2_base_url = normalize_base(self.v2_base_url);
        Url::parse(&v1_base_url.replace(COLLECTIVE_PLACEHOLDER, "collective"))?;
        Url::parse(&v2_base_url)?;

        let mut credential = Credential::new(v1_base_url, v2_base_url);
        if let Some(token) = &self.access_token {
            credential.set(token)?;
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("acquia-dam/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(ApiClient {
            inner: Arc::new(ClientInner {
                http,
                credential: RwLock::new(credential),
                sdk_identifier: self.sdk_identifier,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_base(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{FileContent, FormBody, QueryParams};
    use serde_json::json;

    fn client() -> ApiClient {
        ApiClient::new("wat_acme_secret").unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let client = ClientBuilder::new().build().unwrap();
        assert_eq!(client.access_token(), None);
        assert_eq!(client.collective_key(), None);
        assert_eq!(
            client.base_url(ApiVersion::V1),
            "https://.widencollective.com/api/rest/"
        );
        assert_eq!(client.base_url(ApiVersion::V2), DEFAULT_V2_BASE_URL);
        assert!(client.sdk_identifier().starts_with("acquia-dam-rs@"));
    }

    #[test]
    fn test_builder_rejects_malformed_token() {
        let err = ApiClient::new("not a token").unwrap_err();
        assert!(matches!(err, Error::MalformedCredential(_)));
    }

    #[test]
    fn test_builder_normalizes_trailing_slash() {
        let client = ClientBuilder::new()
            .access_token("acme/secret")
            .v1_base_url("http://localhost:8080/{collective}")
            .v2_base_url("http://localhost:8080/v2")
            .build()
            .unwrap();

        assert_eq!(client.base_url(ApiVersion::V1), "http://localhost:8080/acme/");
        assert_eq!(client.base_url(ApiVersion::V2), "http://localhost:8080/v2/");
    }

    #[test]
    fn test_builder_rejects_malformed_base_urls() {
        let err = ClientBuilder::new()
            .v1_base_url("not a url/{collective}")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));

        let err = ClientBuilder::new()
            .v1_base_url("https://{collective}.dam.test:99999/api/")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));

        let err = ClientBuilder::new().v2_base_url("::").build().unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn test_set_access_token_updates_v1_base() {
        let client = client();
        assert_eq!(client.collective_key().as_deref(), Some("acme"));
        assert_eq!(
            client.base_url(ApiVersion::V1),
            "https://acme.widencollective.com/api/rest/"
        );

        client.set_access_token("globex/abc").unwrap();
        assert_eq!(client.collective_key().as_deref(), Some("globex"));
        assert!(client.base_url(ApiVersion::V1).contains("://globex."));

        assert!(client.set_access_token("bad").is_err());
        assert_eq!(client.access_token().as_deref(), Some("globex/abc"));

        client.set_access_token("").unwrap();
        assert_eq!(client.access_token(), None);
        assert_eq!(
            client.base_url(ApiVersion::V1),
            "https://.widencollective.com/api/rest/"
        );
    }

    #[test]
    fn test_clones_share_credential() {
        let client = client();
        let other = client.clone();
        other.set_access_token("wat_globex_x").unwrap();
        assert_eq!(client.collective_key().as_deref(), Some("globex"));
    }

    #[test]
    fn test_url_building() {
        let client = client();

        let req = ApiRequest::get(ApiVersion::V2, "assets/search");
        assert_eq!(
            client.build_url(&req).unwrap().as_str(),
            "https://api.widencollective.com/v2/assets/search"
        );

        let req = ApiRequest::get(ApiVersion::V1, "fileformats");
        assert_eq!(
            client.build_url(&req).unwrap().as_str(),
            "https://acme.widencollective.com/api/rest/fileformats"
        );

        let req = ApiRequest::get(ApiVersion::V2, "assets/search")
            .with_query(&json!({"expand": ["metadata", "security"], "limit": 1}))
            .unwrap();
        assert_eq!(
            client.build_url(&req).unwrap().as_str(),
            "https://api.widencollective.com/v2/assets/search?expand=metadata%2Csecurity&limit=1"
        );

        let mut req = ApiRequest::get(ApiVersion::V2, "usage/api");
        req.query = Some(QueryParams::new());
        assert_eq!(
            client.build_url(&req).unwrap().as_str(),
            "https://api.widencollective.com/v2/usage/api"
        );
    }

    #[test]
    fn test_headers_without_body() {
        let headers = client()
            .build_headers(&ApiRequest::get(ApiVersion::V2, "user"))
            .unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer wat_acme_secret");
        assert!(headers[SDK_CLIENT_HEADER]
            .to_str()
            .unwrap()
            .starts_with("acquia-dam-rs@"));
        assert!(headers.get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_headers_json_body_sets_content_type() {
        let req = ApiRequest::post(ApiVersion::V2, "products")
            .with_json(&json!({"name": "x"}))
            .unwrap();
        let headers = client().build_headers(&req).unwrap();
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_headers_form_body_has_no_json_content_type() {
        let form = FormBody::new().file("file", FileContent::new(vec![1, 2, 3], "a.bin"));
        let req = ApiRequest::post(ApiVersion::V2, "uploads").with_form(form);
        let headers = client().build_headers(&req).unwrap();
        assert!(headers.get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_headers_require_token() {
        let client = ClientBuilder::new().build().unwrap();
        let err = client
            .build_headers(&ApiRequest::get(ApiVersion::V2, "user"))
            .unwrap_err();
        assert!(matches!(err, Error::Sdk(_)));
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let debug = format!("{:?}", client());
        assert!(!debug.contains("secret"));
    }
}
