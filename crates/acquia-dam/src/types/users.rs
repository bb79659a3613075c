//! Users and their contact details.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub city: Option<String>,
    pub company: Option<String>,
    pub country: Option<String>,
    pub email: String,
    pub first_name: String,
    pub id: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub postal_code: Option<String>,
    pub state_or_province: Option<String>,
    pub street_address: Option<String>,
    pub title: Option<String>,
    pub username: String,
    pub uuid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactField {
    pub required: bool,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFields {
    pub city: ContactField,
    pub company: ContactField,
    pub country: ContactField,
    pub email: ContactField,
    pub first_name: ContactField,
    pub last_name: ContactField,
    pub phone: ContactField,
    pub postal_code: ContactField,
    pub state_or_province: ContactField,
    pub street_address: ContactField,
}

/// Contact details (v1 shape).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub fields: ContactFields,
    pub uuid: String,
}
