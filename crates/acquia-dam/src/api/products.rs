//! Products API.

use std::collections::BTreeMap;

use serde_json::json;

use super::segment;
use crate::client::ApiClient;
use crate::credential::ApiVersion;
use crate::error::Result;
use crate::request::ApiRequest;
use crate::types::{
    Channel, ChannelProducts, CreateProductParams, CreateProductResult,
    ListProductCategoriesParams, Page, Pagination, Product, ProductCategoryRef,
    ProductCategorySummary, ProductType, SearchProductsParams, SearchProductsResult,
};

/// Products API client.
pub struct ProductsApi {
    client: ApiClient,
}

impl ProductsApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn product_path(id: &str, rest: &str) -> Result<String> {
        let id = segment(id)?;
        Ok(if rest.is_empty() {
            format!("products/{}", id)
        } else {
            format!("products/{}/{}", id, rest)
        })
    }

    /// Create a product.
    pub async fn create(&self, params: &CreateProductParams) -> Result<CreateProductResult> {
        let request = ApiRequest::post(ApiVersion::V2, "products").with_json(params)?;
        self.client.send_request(request).await
    }

    /// Delete a product.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .execute(ApiRequest::delete(ApiVersion::V2, Self::product_path(id, "")?))
            .await
    }

    /// Get a product.
    pub async fn get(&self, id: &str) -> Result<Product> {
        self.client
            .send_request(ApiRequest::get(ApiVersion::V2, Self::product_path(id, "")?))
            .await
    }

    /// List channels.
    pub async fn list_channels(&self, pagination: Pagination) -> Result<Page<Channel>> {
        let request = ApiRequest::get(ApiVersion::V2, "channels").with_query(&pagination)?;
        self.client.send_request(request).await
    }

    /// List the products published to a channel.
    pub async fn list_by_channel(
        &self,
        channel_id: &str,
        pagination: Pagination,
    ) -> Result<ChannelProducts> {
        let path = format!("products/channels/{}", segment(channel_id)?);
        let request = ApiRequest::get(ApiVersion::V2, path).with_query(&pagination)?;
        self.client.send_request(request).await
    }

    /// List product categories.
    pub async fn list_categories(
        &self,
        params: &ListProductCategoriesParams,
    ) -> Result<Page<ProductCategorySummary>> {
        let request = ApiRequest::get(ApiVersion::V2, "product-categories").with_query(params)?;
        self.client.send_request(request).await
    }

    /// List product types.
    pub async fn list_types(&self, pagination: Pagination) -> Result<Page<ProductType>> {
        let request = ApiRequest::get(ApiVersion::V2, "product-types").with_query(&pagination)?;
        self.client.send_request(request).await
    }

    /// Rename a product.
    pub async fn rename(&self, id: &str, name: &str) -> Result<()> {
        let request = ApiRequest::put(ApiVersion::V2, Self::product_path(id, "rename")?)
            .with_json(&json!({ "new_name": name }))?;
        self.client.execute(request).await
    }

    /// Search products.
    pub async fn search(&self, params: &SearchProductsParams) -> Result<SearchProductsResult> {
        let request = ApiRequest::post(ApiVersion::V2, "products/search").with_json(params)?;
        self.client.send_request(request).await
    }

    /// Replace a product's attribute values.
    pub async fn update_attributes(
        &self,
        id: &str,
        attributes: &BTreeMap<String, Vec<String>>,
    ) -> Result<()> {
        let request = ApiRequest::put(ApiVersion::V2, Self::product_path(id, "attributes")?)
            .with_json(&json!({ "attributes": attributes }))?;
        self.client.execute(request).await
    }

    /// Set the categories a product belongs to.
    pub async fn update_category(&self, id: &str, categories: &[ProductCategoryRef]) -> Result<()> {
        let request = ApiRequest::put(ApiVersion::V2, Self::product_path(id, "product-category")?)
            .with_json(&json!({ "product_categories": categories }))?;
        self.client.execute(request).await
    }

    /// Set the featured image of a product.
    pub async fn update_featured_image(&self, id: &str, asset_id: &str) -> Result<()> {
        let request = ApiRequest::put(ApiVersion::V2, Self::product_path(id, "featured-image")?)
            .with_json(&json!({ "asset_id": asset_id }))?;
        self.client.execute(request).await
    }

    /// Set the parent of a product.
    pub async fn update_parent(&self, id: &str, parent_product_id: &str) -> Result<()> {
        let request = ApiRequest::put(ApiVersion::V2, Self::product_path(id, "parent-product")?)
            .with_json(&json!({ "parent_product_id": parent_product_id }))?;
        self.client.execute(request).await
    }

    /// Set the type of a product.
    pub async fn update_type(&self, id: &str, product_type_id: &str) -> Result<()> {
        let request = ApiRequest::put(ApiVersion::V2, Self::product_path(id, "product-type")?)
            .with_json(&json!({ "product_type_id": product_type_id }))?;
        self.client.execute(request).await
    }
}
