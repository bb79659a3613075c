//! Metadata fields, their controlled vocabularies and metadata types.

use serde::{Deserialize, Serialize};

/// Kind of a metadata field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataFieldType {
    Checkboxes,
    Date,
    Numeric,
    SelectionList,
    SelectionListMulti,
    Text,
    TextLong,
    TextMultiLine,
    TextShort,
}

impl MetadataFieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataFieldType::Checkboxes => "checkboxes",
            MetadataFieldType::Date => "date",
            MetadataFieldType::Numeric => "numeric",
            MetadataFieldType::SelectionList => "selection_list",
            MetadataFieldType::SelectionListMulti => "selection_list_multi",
            MetadataFieldType::Text => "text",
            MetadataFieldType::TextLong => "text_long",
            MetadataFieldType::TextMultiLine => "text_multi_line",
            MetadataFieldType::TextShort => "text_short",
        }
    }
}

/// Which field types to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldTypeFilter {
    All,
    AllControlledVocabulary,
    Only(Vec<MetadataFieldType>),
}

impl Serialize for FieldTypeFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldTypeFilter::All => serializer.serialize_str("all"),
            FieldTypeFilter::AllControlledVocabulary => {
                serializer.serialize_str("all_controlled_vocabulary")
            }
            FieldTypeFilter::Only(types) => types.serialize(serializer),
        }
    }
}

/// Add a value to a controlled vocabulary.
#[derive(Debug, Clone, Serialize)]
pub struct AddVocabularyValueParams {
    #[serde(skip)]
    pub display_key: String,
    /// Position in the list; appended when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    pub value: String,
}

/// Update an existing vocabulary value.
///
/// At least one of `index` and `value` must be set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateVocabularyValueParams {
    #[serde(skip)]
    pub display_key: String,
    #[serde(skip)]
    pub existing_value: String,
    /// New position in the list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    /// Replacement value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ListViewableFieldsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name_after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name_starts_with: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_types: Option<FieldTypeFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyValueLinks {
    #[serde(rename = "self")]
    pub self_link: String,
    pub vocabulary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyValue {
    #[serde(rename = "_links")]
    pub links: VocabularyValueLinks,
    pub index: u32,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldVocabulary {
    #[serde(rename = "_links")]
    pub links: crate::types::SelfLink,
    pub vocabulary: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataTypeItem {
    pub display_name: String,
    pub uuid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataTypeItemList {
    pub items: Vec<MetadataTypeItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataTypeField {
    pub discriminator: String,
    pub display_key: String,
    pub display_name: String,
    pub editable: bool,
    #[serde(default)]
    pub item_list: Option<MetadataTypeItemList>,
    pub required: bool,
    pub uuid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataType {
    pub fields: Vec<MetadataTypeField>,
    pub name: String,
    #[serde(rename = "use")]
    pub usage: String,
    pub uuid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataTypes {
    pub types: Vec<MetadataType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewableField {
    pub display_key: String,
    pub display_name: String,
    pub field_type: MetadataFieldType,
    pub metadata_types: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewableFields {
    pub fields: Vec<ViewableField>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::QueryParams;

    #[test]
    fn test_field_type_filter_in_query() {
        let params = ListViewableFieldsParams {
            field_types: Some(FieldTypeFilter::Only(vec![
                MetadataFieldType::Text,
                MetadataFieldType::SelectionListMulti,
            ])),
            ..Default::default()
        };
        let query = QueryParams::from_serialize(&params).unwrap();
        assert_eq!(query.encode(), "field_types=text%2Cselection_list_multi");

        let params = ListViewableFieldsParams {
            field_types: Some(FieldTypeFilter::AllControlledVocabulary),
            limit: Some(3),
            ..Default::default()
        };
        let query = QueryParams::from_serialize(&params).unwrap();
        assert_eq!(query.encode(), "field_types=all_controlled_vocabulary&limit=3");
    }

    #[test]
    fn test_field_type_names() {
        assert_eq!(MetadataFieldType::TextMultiLine.as_str(), "text_multi_line");
    }
}
