//! Workflow projects, deliverables and proofs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliverableExpand {
    DownloadLink,
    FileProperties,
    ProofUrl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectExpand {
    RequestFields,
}

/// A review stage of a deliverable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commenters: Option<Vec<String>>,
    pub due_date: DateTime<Utc>,
    pub name: String,
    pub reviewers: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddDeliverableParams {
    #[serde(skip)]
    pub project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub due_date: DateTime<Utc>,
    pub name: String,
    pub proof_provider: String,
    pub stages: Vec<Stage>,
    pub start_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CloseDeliverableParams {
    #[serde(skip)]
    pub project_id: String,
    #[serde(skip)]
    pub deliverable_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_profile: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateProjectParams {
    pub description: String,
    pub end_date: DateTime<Utc>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub project_manager: String,
    pub start_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workgroups: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadProofParams {
    #[serde(skip)]
    pub project_id: String,
    #[serde(skip)]
    pub deliverable_id: String,
    pub content_length: u64,
    pub filename: String,
    /// Where the DAM fetches the proof from.
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddDeliverableResult {
    pub deliverable_id: String,
    pub id: String,
    pub project_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProjectResult {
    pub project_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowUser {
    pub email_address: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliverableLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download: Option<String>,
    pub project: String,
    #[serde(rename = "self")]
    pub self_link: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliverableExpanded {
    pub download_link: bool,
    pub file_properties: bool,
    pub proof_url: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliverableFile {
    pub file_type: String,
    pub filename: String,
    pub sizes_in_bytes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofThumbnails {
    pub large: String,
    pub medium: String,
    pub small: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deliverable {
    #[serde(rename = "_links")]
    pub links: DeliverableLinks,
    pub deliverable_id: String,
    pub deliverable_manager: WorkflowUser,
    #[serde(default)]
    pub description: Option<String>,
    pub due_date: DateTime<Utc>,
    #[serde(default)]
    pub expanded: DeliverableExpanded,
    #[serde(default)]
    pub file_properties: Option<DeliverableFile>,
    pub id: String,
    pub name: String,
    pub proof_provider: WorkflowUser,
    #[serde(default)]
    pub proof_url: Option<String>,
    pub status: String,
    #[serde(default)]
    pub thumbnails: Option<ProofThumbnails>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deliverables {
    pub items: Vec<Deliverable>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectLinks {
    pub deliverables: String,
    #[serde(rename = "self")]
    pub self_link: String,
    pub support_files: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliverableSummary {
    pub due_date: DateTime<Utc>,
    pub id: String,
    pub name: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectExpanded {
    pub request_fields: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_links")]
    pub links: ProjectLinks,
    pub deliverables: Vec<DeliverableSummary>,
    pub description: String,
    pub due_date: DateTime<Utc>,
    #[serde(default)]
    pub expanded: ProjectExpanded,
    pub id: String,
    pub name: String,
    pub project_id: String,
    pub project_manager: WorkflowUser,
    pub start_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadProofResult {
    pub deliverable_id: String,
    pub id: String,
    pub project_id: String,
    pub status: String,
    pub thumbnails: ProofThumbnails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportingFileLinks {
    pub download: String,
    pub project: String,
    #[serde(rename = "self")]
    pub self_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportingFile {
    #[serde(rename = "_links")]
    pub links: SupportingFileLinks,
    pub format_type: String,
    pub id: String,
    pub name: String,
    pub size_in_bytes: u64,
    pub upload_date: DateTime<Utc>,
    pub uploader: WorkflowUser,
}
