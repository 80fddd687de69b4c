//! Project entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::review::ReviewStatus;

/// A final-year project submitted by a student.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique project identifier.
    pub id: Uuid,
    /// Project title.
    pub title: String,
    /// The student who submitted the project.
    pub submitted_by: Uuid,
    /// The supervisor responsible for reviewing it.
    pub supervisor: Uuid,
    /// URL of the hosted project document.
    pub document_url: String,
    /// Current review state.
    pub status: ReviewStatus,
    /// The proposal this project grew out of, if linked.
    pub proposal: Option<Uuid>,
    /// When the project was submitted.
    pub created_at: DateTime<Utc>,
    /// When the project was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A project row joined with its submitter and supervisor for listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    /// Unique project identifier.
    pub id: Uuid,
    /// Project title.
    pub title: String,
    /// URL of the hosted project document.
    pub document_url: String,
    /// Current review state.
    pub status: ReviewStatus,
    /// Submitting student's name.
    pub submitter_name: String,
    /// Submitting student's roll number.
    pub submitter_roll_number: String,
    /// Submitting student's email.
    pub submitter_email: String,
    /// Reviewing supervisor's name.
    pub supervisor_name: String,
    /// Reviewing supervisor's email.
    pub supervisor_email: String,
    /// Description of the linked proposal, if any.
    pub proposal_description: Option<String>,
    /// When the project was submitted.
    pub created_at: DateTime<Utc>,
    /// When the project was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Status counts over all projects, used for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectCounts {
    /// Total projects.
    pub total: i64,
    /// Projects awaiting review.
    pub pending: i64,
    /// Approved projects.
    pub approved: i64,
    /// Rejected projects.
    pub rejected: i64,
}

/// Data required to create a new project.
#[derive(Debug, Clone)]
pub struct CreateProject {
    /// Project title.
    pub title: String,
    /// The submitting student.
    pub submitted_by: Uuid,
    /// The reviewing supervisor.
    pub supervisor: Uuid,
    /// URL of the hosted project document.
    pub document_url: String,
    /// Linked proposal, if any.
    pub proposal: Option<Uuid>,
}
