//! Proposal entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::review::ReviewStatus;

/// A project proposal submitted by a student for supervisor review.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    /// Unique proposal identifier.
    pub id: Uuid,
    /// Proposal title.
    pub title: String,
    /// Proposal description.
    pub description: String,
    /// The student who submitted the proposal.
    pub submitted_by: Uuid,
    /// The supervisor responsible for reviewing it.
    pub supervisor: Uuid,
    /// Current review state.
    pub status: ReviewStatus,
    /// When the proposal was submitted.
    pub created_at: DateTime<Utc>,
    /// When the proposal was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A proposal row joined with its submitter for supervisor listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProposalDetails {
    /// Unique proposal identifier.
    pub id: Uuid,
    /// Proposal title.
    pub title: String,
    /// Proposal description.
    pub description: String,
    /// Current review state.
    pub status: ReviewStatus,
    /// Submitting student's name.
    pub submitter_name: String,
    /// Submitting student's roll number.
    pub submitter_roll_number: String,
    /// Submitting student's email.
    pub submitter_email: String,
    /// When the proposal was submitted.
    pub created_at: DateTime<Utc>,
    /// When the proposal was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new proposal.
#[derive(Debug, Clone)]
pub struct CreateProposal {
    /// Proposal title.
    pub title: String,
    /// Proposal description.
    pub description: String,
    /// The submitting student.
    pub submitted_by: Uuid,
    /// The reviewing supervisor.
    pub supervisor: Uuid,
}
