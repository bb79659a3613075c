//! Categories: the folder tree assets are filed under.

use serde::{Deserialize, Serialize};

/// Add assets to and remove assets from categories.
#[derive(Debug, Clone, Default)]
pub struct CategoryAssetsParams {
    /// Category UUIDs.
    pub categories: Vec<String>,
    pub assets_to_add: Vec<String>,
    pub assets_to_remove: Vec<String>,
}

/// Create a category.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_alphabetically: Option<bool>,
    /// UUID of the sibling this category is displayed before.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_before_category: Option<String>,
    /// UUID of the parent category.
    pub parent_category: String,
    pub title: String,
}

/// Edit a category. Unset fields are left as they are.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditCategoryParams {
    #[serde(skip)]
    pub uuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_alphabetically: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_before_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A node of the v1 category tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryNode {
    #[serde(default)]
    pub children: Vec<CategoryNode>,
    pub id: u64,
    pub title: String,
    pub uuid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTree {
    pub categories: Vec<CategoryNode>,
    pub parent_category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryLinks {
    pub assets: String,
    pub categories: String,
}

/// A category as listed by the v2 API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_links")]
    pub links: CategoryLinks,
    pub id: String,
    pub name: String,
    pub parts: Vec<String>,
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_edit_params_skip_uuid_and_unset() {
        let params = EditCategoryParams {
            uuid: "c1".into(),
            title: Some("Renamed".into()),
            display_alphabetically: Some(true),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"displayAlphabetically": true, "title": "Renamed"})
        );
    }

    #[test]
    fn test_tree_nodes_nest() {
        let tree: CategoryTree = serde_json::from_value(json!({
            "categories": [
                {"id": 1, "title": "Root", "uuid": "r", "children": [
                    {"id": 2, "title": "Child", "uuid": "c", "children": []}
                ]}
            ],
            "parentCategory": null
        }))
        .unwrap();
        assert_eq!(tree.categories[0].children[0].title, "Child");
    }
}
