//! Webhooks API.

use serde_json::json;

use super::{body_keys, patch_query, segment};
use crate::client::ApiClient;
use crate::credential::ApiVersion;
use crate::error::Result;
use crate::request::ApiRequest;
use crate::types::{
    AssetsWebhook, CreateAssetsWebhookParams, CreateAssetsWebhookResult,
    CreateWorkflowWebhookParams, EditAssetsWebhookParams, Page, Pagination, WorkflowEventType,
    WorkflowWebhook, WorkflowWebhooks,
};

/// Webhooks API client.
pub struct WebhooksApi {
    client: ApiClient,
}

impl WebhooksApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn configuration_path(id: &str) -> Result<String> {
        Ok(format!("webhooks/configurations/{}", segment(id)?))
    }

    /// Subscribe to an asset event.
    pub async fn create_assets_webhook(
        &self,
        params: &CreateAssetsWebhookParams,
    ) -> Result<CreateAssetsWebhookResult> {
        let request =
            ApiRequest::post(ApiVersion::V2, "webhooks/configurations").with_json(params)?;
        self.client.send_request(request).await
    }

    /// Subscribe to a workflow event.
    pub async fn create_workflow_webhook(
        &self,
        params: &CreateWorkflowWebhookParams,
    ) -> Result<WorkflowWebhook> {
        let request = ApiRequest::post(ApiVersion::V2, "workflow/webhooks").with_json(params)?;
        self.client.send_request(request).await
    }

    /// Delete an asset webhook.
    pub async fn delete_assets_webhook(&self, id: &str) -> Result<()> {
        self.client
            .execute(ApiRequest::delete(ApiVersion::V2, Self::configuration_path(id)?))
            .await
    }

    /// Remove the webhook for a workflow event.
    pub async fn delete_workflow_webhook(&self, event: WorkflowEventType) -> Result<()> {
        let request = ApiRequest::delete(ApiVersion::V2, "workflow/webhooks")
            .with_json(&json!({ "event": event }))?;
        self.client.execute(request).await
    }

    /// Edit an asset webhook.
    ///
    /// Without an explicit `patch`, every property set in `params` is
    /// patched.
    pub async fn edit_assets_webhook(&self, params: &EditAssetsWebhookParams) -> Result<()> {
        let mut request = ApiRequest::put(ApiVersion::V2, Self::configuration_path(&params.id)?)
            .with_json(params)?;
        let query = match &params.patch {
            Some(patch) => patch_query(patch.iter().map(|p| p.as_str())),
            None => patch_query(body_keys(&serde_json::to_value(params)?)),
        };
        request.query = Some(query);
        self.client.execute(request).await
    }

    /// Get an asset webhook.
    pub async fn get_assets_webhook(&self, id: &str) -> Result<AssetsWebhook> {
        self.client
            .send_request(ApiRequest::get(ApiVersion::V2, Self::configuration_path(id)?))
            .await
    }

    /// List asset webhooks.
    pub async fn list_assets_webhooks(&self, pagination: Pagination) -> Result<Page<AssetsWebhook>> {
        let request =
            ApiRequest::get(ApiVersion::V2, "webhooks/configurations").with_query(&pagination)?;
        self.client.send_request(request).await
    }

    /// List workflow webhooks.
    pub async fn list_workflow_webhooks(&self) -> Result<WorkflowWebhooks> {
        self.client
            .send_request(ApiRequest::get(ApiVersion::V2, "workflow/webhooks"))
            .await
    }

    /// Send a ping delivery to an asset webhook.
    pub async fn ping_assets_webhook(&self, id: &str) -> Result<()> {
        let path = format!("{}/ping", Self::configuration_path(id)?);
        self.client
            .execute(ApiRequest::get(ApiVersion::V2, path))
            .await
    }
}
