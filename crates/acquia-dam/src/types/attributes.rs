//! Product attributes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    Asset,
    MultiControlledVocab,
    RichText,
    SingleControlledVocab,
    Text,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeGroup {
    pub attribute_group_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attribute {
    pub attribute_group: Option<AttributeGroup>,
    pub attribute_id: String,
    pub import_only: bool,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AttributeType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeVocabulary {
    pub vocabulary: Vec<String>,
}
