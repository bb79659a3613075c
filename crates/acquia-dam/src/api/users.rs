//! Users API.

use super::segment;
use crate::client::ApiClient;
use crate::credential::ApiVersion;
use crate::error::Result;
use crate::request::ApiRequest;
use crate::types::{Contact, User};

/// Users API client.
pub struct UsersApi {
    client: ApiClient,
}

impl UsersApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Get the user the access token belongs to.
    pub async fn current(&self) -> Result<User> {
        self.client
            .send_request(ApiRequest::get(ApiVersion::V2, "user"))
            .await
    }

    /// Get a user by ID.
    pub async fn get(&self, id: &str) -> Result<User> {
        let path = format!("user/{}", segment(id)?);
        self.client
            .send_request(ApiRequest::get(ApiVersion::V2, path))
            .await
    }

    /// Get the current user's contact details (v1).
    pub async fn contact(&self) -> Result<Contact> {
        self.client
            .send_request(ApiRequest::get(ApiVersion::V1, "user/address"))
            .await
    }
}
