//! Workflow API.

use super::segment;
use crate::client::ApiClient;
use crate::credential::ApiVersion;
use crate::error::Result;
use crate::request::ApiRequest;
use crate::types::{
    AddDeliverableParams, AddDeliverableResult, CloseDeliverableParams, CreateProjectParams,
    CreateProjectResult, Deliverable, DeliverableExpand, Deliverables, Project, ProjectExpand,
    SupportingFile, UploadProofParams, UploadProofResult,
};

#[derive(serde::Serialize)]
struct ExpandQuery<'a, T> {
    #[serde(skip_serializing_if = "is_empty")]
    expand: &'a [T],
}

fn is_empty<T>(items: &&[T]) -> bool {
    items.is_empty()
}

/// Workflow API client.
pub struct WorkflowApi {
    client: ApiClient,
}

impl WorkflowApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn project_path(project_id: &str) -> Result<String> {
        Ok(format!("workflow/projects/{}", segment(project_id)?))
    }

    fn deliverable_path(project_id: &str, deliverable_id: &str) -> Result<String> {
        Ok(format!(
            "{}/deliverables/{}",
            Self::project_path(project_id)?,
            segment(deliverable_id)?
        ))
    }

    /// Add a deliverable to a project.
    pub async fn add_deliverable(
        &self,
        params: &AddDeliverableParams,
    ) -> Result<AddDeliverableResult> {
        let path = format!("{}/deliverables", Self::project_path(&params.project_id)?);
        let request = ApiRequest::post(ApiVersion::V2, path).with_json(params)?;
        self.client.send_request(request).await
    }

    /// Close a deliverable, optionally uploading its final file as an asset.
    pub async fn close_deliverable(&self, params: &CloseDeliverableParams) -> Result<()> {
        let path = format!(
            "{}/close",
            Self::deliverable_path(&params.project_id, &params.deliverable_id)?
        );
        let request = ApiRequest::put(ApiVersion::V2, path).with_json(params)?;
        self.client.execute(request).await
    }

    /// Create a project.
    pub async fn create_project(&self, params: &CreateProjectParams) -> Result<CreateProjectResult> {
        let request = ApiRequest::post(ApiVersion::V2, "workflow/projects").with_json(params)?;
        self.client.send_request(request).await
    }

    /// Delete a deliverable.
    pub async fn delete_deliverable(&self, project_id: &str, deliverable_id: &str) -> Result<()> {
        let path = Self::deliverable_path(project_id, deliverable_id)?;
        self.client
            .execute(ApiRequest::delete(ApiVersion::V2, path))
            .await
    }

    /// Delete a project.
    pub async fn delete_project(&self, project_id: &str) -> Result<()> {
        self.client
            .execute(ApiRequest::delete(ApiVersion::V2, Self::project_path(project_id)?))
            .await
    }

    /// Get a deliverable, expanding the given fields.
    pub async fn get_deliverable(
        &self,
        project_id: &str,
        deliverable_id: &str,
        expand: &[DeliverableExpand],
    ) -> Result<Deliverable> {
        let request = ApiRequest::get(
            ApiVersion::V2,
            Self::deliverable_path(project_id, deliverable_id)?,
        )
        .with_query(&ExpandQuery { expand })?;
        self.client.send_request(request).await
    }

    /// Get a project, expanding the given fields.
    pub async fn get_project(&self, project_id: &str, expand: &[ProjectExpand]) -> Result<Project> {
        let request = ApiRequest::get(ApiVersion::V2, Self::project_path(project_id)?)
            .with_query(&ExpandQuery { expand })?;
        self.client.send_request(request).await
    }

    /// List a project's deliverables.
    pub async fn list_deliverables(
        &self,
        project_id: &str,
        expand: &[DeliverableExpand],
    ) -> Result<Deliverables> {
        let path = format!("{}/deliverables", Self::project_path(project_id)?);
        let request = ApiRequest::get(ApiVersion::V2, path).with_query(&ExpandQuery { expand })?;
        self.client.send_request(request).await
    }

    /// List a project's supporting files.
    pub async fn list_supporting_files(&self, project_id: &str) -> Result<Vec<SupportingFile>> {
        let path = format!("{}/support-files", Self::project_path(project_id)?);
        self.client
            .send_request(ApiRequest::get(ApiVersion::V2, path))
            .await
    }

    /// Upload a proof for a deliverable from a URL.
    pub async fn upload_proof(&self, params: &UploadProofParams) -> Result<UploadProofResult> {
        let path = format!(
            "{}/proofs",
            Self::deliverable_path(&params.project_id, &params.deliverable_id)?
        );
        let request = ApiRequest::post(ApiVersion::V2, path).with_json(params)?;
        self.client.send_request(request).await
    }
}
