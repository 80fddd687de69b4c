//! Request DTOs with validation.

use serde::Deserialize;
use validator::Validate;

/// Login request body, shared by all three roles.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Login email.
    #[serde(default)]
    pub email: String,
    /// Plaintext password.
    #[serde(default)]
    pub password: String,
}

/// Create supervisor request (admin).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSupervisorRequest {
    /// Display name.
    #[validate(length(min = 1, message = "Name, email and password are required"))]
    pub name: String,
    /// Login email.
    #[validate(length(min = 1, message = "Name, email and password are required"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Name, email and password are required"))]
    pub password: String,
}

/// Update supervisor request (admin). `None` fields are left unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSupervisorRequest {
    /// New display name.
    pub name: Option<String>,
    /// New login email.
    pub email: Option<String>,
    /// New plaintext password.
    pub password: Option<String>,
}

/// Create student request (supervisor).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    /// Display name.
    #[validate(length(min = 1, message = "All fields are required"))]
    pub name: String,
    /// Login email.
    #[validate(length(min = 1, message = "All fields are required"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "All fields are required"))]
    pub password: String,
    /// Roll number.
    #[validate(length(min = 1, message = "All fields are required"))]
    pub roll_number: String,
}

/// Update student request (supervisor). `None` fields are left unchanged.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    /// New display name.
    pub name: Option<String>,
    /// New login email.
    pub email: Option<String>,
    /// New roll number.
    pub roll_number: Option<String>,
    /// New plaintext password.
    pub password: Option<String>,
}

/// Submit proposal request (student).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitProposalRequest {
    /// Proposal title.
    #[validate(length(min = 1, message = "Title and description are required"))]
    pub title: String,
    /// Proposal description.
    #[validate(length(min = 1, message = "Title and description are required"))]
    pub description: String,
}

/// Submit project request (student).
///
/// The project document is uploaded to external hosting by the client;
/// only the resulting URL is recorded here.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitProjectRequest {
    /// Project title.
    #[validate(length(min = 1, message = "Project title is required"))]
    pub title: String,
    /// URL of the hosted project document.
    pub document_url: Option<String>,
}

/// Review decision request (supervisor).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    /// Target status: `approved` or `rejected`.
    pub status: String,
}

/// Supervisor name search query.
#[derive(Debug, Clone, Deserialize)]
pub struct NameQuery {
    /// Name fragment to search for.
    pub name: Option<String>,
}

/// Project title search query.
#[derive(Debug, Clone, Deserialize)]
pub struct TitleQuery {
    /// Title fragment to search for.
    pub title: Option<String>,
}
