//! Products (PIM): items with attributes, categories and types.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::AttributeGroup;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCategoryRef {
    pub product_category_id: String,
}

impl ProductCategoryRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            product_category_id: id.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateProductParams {
    /// Attribute ID to values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, Vec<String>>>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_product_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_categories: Option<Vec<ProductCategoryRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type_id: Option<String>,
    pub sku: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ListProductCategoriesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// List the children of this category instead of the top level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_product_category_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSearchExpand {
    Attributes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSortType {
    Created,
    LastUpdated,
    Name,
    ProductTypeName,
    Sku,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSort {
    pub order: SortOrder,
    #[serde(rename = "type")]
    pub kind: ProductSortType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductFilterType {
    Name,
    Sku,
    ProductType,
    FeaturedImage,
    Attribute,
    SearchParentsViaVariants,
    ExcludeParents,
    ExcludeVariants,
    CreatedTimestamp,
    LastUpdatedTimestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductFilterOperator {
    Contains,
    HasValue,
    In,
    IsEmpty,
    After,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argument: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_id: Option<String>,
    pub operator: ProductFilterOperator,
    #[serde(rename = "type")]
    pub kind: ProductFilterType,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchProductsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand: Option<Vec<ProductSearchExpand>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<ProductFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<ProductSort>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductResult {
    pub product_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductAttribute {
    #[serde(default)]
    pub attribute_group: Option<AttributeGroup>,
    pub attribute_id: String,
    pub import_only: Option<bool>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedImage {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentProduct {
    pub parent_product_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCategory {
    pub name: String,
    pub product_category_id: String,
    pub sub_category: Option<Box<ProductCategory>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCategories {
    pub product_categories: Vec<ProductCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductType {
    pub name: String,
    pub product_type_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub attributes: Option<BTreeMap<String, ProductAttribute>>,
    pub created_date: DateTime<Utc>,
    pub featured_image: Option<FeaturedImage>,
    pub last_updated_timestamp: DateTime<Utc>,
    pub name: String,
    pub parent_product: Option<ParentProduct>,
    pub product_categories: ProductCategories,
    pub product_id: String,
    pub product_type: Option<ProductType>,
    pub sku: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub channel_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCategorySummary {
    pub name: String,
    pub product_category_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelProducts {
    pub channel_id: String,
    pub channel_name: String,
    pub item_type: String,
    pub items: Vec<Product>,
    pub limit: u64,
    pub offset: u64,
    pub total_count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductSearchExpanded {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchProductsResult {
    #[serde(default)]
    pub expanded: ProductSearchExpanded,
    pub filters: Vec<ProductFilter>,
    pub item_type: String,
    pub items: Vec<Product>,
    pub limit: u64,
    pub offset: u64,
    pub query: Option<String>,
    pub sort: ProductSort,
    pub total_count: u64,
}
