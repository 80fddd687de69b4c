//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use fyphub_entity::project::{ProjectCounts, ProjectDetails};
use fyphub_entity::review::ReviewStatus;
use fyphub_entity::user::{AdminProfile, StudentProfile, SupervisorProfile};

/// Standard response envelope.
///
/// Success responses carry `{statusCode, data, message, success}`; the
/// `success` flag is derived from the status code.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    /// HTTP status code, mirrored into the body.
    pub status_code: u16,
    /// Response payload.
    pub data: T,
    /// Human-readable message.
    pub message: String,
    /// Whether the request succeeded.
    pub success: bool,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a response envelope for the given status code.
    pub fn new(status_code: u16, data: T, message: impl Into<String>) -> Self {
        Self {
            status_code,
            data,
            message: message.into(),
            success: status_code < 400,
        }
    }
}

/// Admin login payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLoginData {
    /// Public admin projection.
    pub admin: AdminProfile,
    /// Issued access token.
    pub access_token: String,
    /// Issued refresh token.
    pub refresh_token: String,
}

/// Supervisor login payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupervisorLoginData {
    /// Public supervisor projection.
    pub supervisor: SupervisorProfile,
    /// Issued access token.
    pub access_token: String,
    /// Issued refresh token.
    pub refresh_token: String,
}

/// Student login payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentLoginData {
    /// Public student projection.
    pub student: StudentProfile,
    /// Issued access token.
    pub access_token: String,
    /// Issued refresh token.
    pub refresh_token: String,
}

/// Payload returned after creating a supervisor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupervisorCreated {
    /// Supervisor ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// Payload returned after creating a student.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentCreated {
    /// Student ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Roll number.
    pub roll_number: String,
}

/// Payload returned after submitting a proposal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalCreated {
    /// Proposal ID.
    pub id: Uuid,
    /// Proposal title.
    pub title: String,
    /// Initial review status.
    pub status: ReviewStatus,
    /// Submission time.
    pub submitted_at: DateTime<Utc>,
}

/// All projects plus dashboard counts (admin).
#[derive(Debug, Clone, Serialize)]
pub struct ProjectsOverview {
    /// All projects with submitter and supervisor details.
    pub projects: Vec<ProjectDetails>,
    /// Review-status counts.
    pub counts: ProjectCounts,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_keys_are_camel_case() {
        let envelope = ApiResponse::new(200, serde_json::json!({}), "ok");
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["success"], true);
        assert!(json.get("data").is_some());
        assert!(json.get("message").is_some());
    }

    #[test]
    fn test_success_flag_follows_status_code() {
        let envelope = ApiResponse::new(404, (), "missing");
        assert!(!envelope.success);
    }
}
