//! Categories API.

use serde_json::json;
use tracing::debug;

use super::segment;
use crate::client::ApiClient;
use crate::credential::ApiVersion;
use crate::error::Result;
use crate::request::{ApiRequest, QueryParams};
use crate::types::{
    Category, CategoryAssetsParams, CategoryNode, CategoryTree, CreateCategoryParams,
    EditCategoryParams, Page,
};

/// Encode a category path for use in a URL.
///
/// The path is split on `/` unless the slash is escaped as `\/`, and each
/// part is percent-encoded on its own.
///
/// Fails with [`Error::Sdk`](crate::Error::Sdk) when a part is empty, `.`
/// or `..`.
pub fn encode_category_path(path: &str) -> Result<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut escaped = false;
    for ch in path.chars() {
        if ch == '/' && !escaped {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
        escaped = ch == '\\';
    }
    parts.push(current);

    let encoded = parts
        .iter()
        .map(|part| segment(part).map(|s| s.into_owned()))
        .collect::<Result<Vec<_>>>()?;
    Ok(encoded.join("/"))
}

/// Categories API client.
pub struct CategoriesApi {
    client: ApiClient,
}

impl CategoriesApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Add assets to and remove assets from categories in one call.
    pub async fn add_or_remove_assets(&self, params: &CategoryAssetsParams) -> Result<()> {
        let body = json!({
            "categories": { "uuids": params.categories },
            "add": { "uuids": params.assets_to_add },
            "remove": { "uuids": params.assets_to_remove },
        });
        let request = ApiRequest::post(ApiVersion::V1, "category/assets").with_json(&body)?;
        self.client.execute(request).await
    }

    /// Create a category.
    pub async fn create(&self, params: &CreateCategoryParams) -> Result<CategoryNode> {
        let request = ApiRequest::post(ApiVersion::V1, "category").with_json(params)?;
        self.client.send_request(request).await
    }

    /// Edit a category.
    pub async fn edit(&self, params: &EditCategoryParams) -> Result<CategoryNode> {
        let path = format!("category/uuid/{}", segment(&params.uuid)?);
        let request = ApiRequest::put(ApiVersion::V1, path).with_json(params)?;
        self.client.send_request(request).await
    }

    /// Get the whole category tree.
    pub async fn tree(&self, include_empty: Option<bool>) -> Result<CategoryTree> {
        let mut request = ApiRequest::get(ApiVersion::V1, "category/categoryTree");
        if let Some(include_empty) = include_empty {
            let mut query = QueryParams::new();
            query.push("includeEmpty", include_empty.to_string());
            request.query = Some(query);
        }
        self.client.send_request(request).await
    }

    /// List the categories under `path`, or the top-level ones.
    pub async fn list(&self, path: Option<&str>) -> Result<Page<Category>> {
        let mut url_path = String::from("categories");
        if let Some(path) = path.filter(|p| !p.is_empty()) {
            url_path.push('/');
            url_path.push_str(&encode_category_path(path)?);
        }
        debug!(path = %url_path, "listing categories");
        self.client
            .send_request(ApiRequest::get(ApiVersion::V2, url_path))
            .await
    }
}
