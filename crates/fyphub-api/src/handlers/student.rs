//! Student handlers — login, logout, proposal and project submission.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;

use fyphub_core::error::AppError;
use fyphub_entity::project::{CreateProject, Project};
use fyphub_entity::proposal::{CreateProposal, Proposal};
use fyphub_entity::user::{Profile, Role};

use crate::cookies;
use crate::dto::request::{LoginRequest, SubmitProjectRequest, SubmitProposalRequest};
use crate::dto::response::{ApiResponse, ProposalCreated, StudentLoginData};
use crate::dto::validate_request;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::rbac::require_student;
use crate::state::AppState;

/// POST /api/v1/student/login-student
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<StudentLoginData>>), ApiError> {
    let result = state
        .session_manager
        .login(Role::Student, &req.email, &req.password)
        .await?;

    let Profile::Student(student) = result.profile else {
        return Err(AppError::internal("Unexpected identity partition").into());
    };

    let data = StudentLoginData {
        student,
        access_token: result.tokens.access_token.clone(),
        refresh_token: result.tokens.refresh_token.clone(),
    };

    let jar = cookies::with_auth_cookies(jar, &result.tokens, state.config.server.secure_cookies);

    Ok((
        jar,
        Json(ApiResponse::new(200, data, "Student logged in successfully")),
    ))
}

/// POST /api/v1/student/student-logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
    jar: CookieJar,
) -> Result<(CookieJar, Json<ApiResponse<serde_json::Value>>), ApiError> {
    require_student(&auth)?;

    state.session_manager.logout(Role::Student, auth.id).await?;

    let jar = cookies::without_auth_cookies(jar, state.config.server.secure_cookies);

    Ok((
        jar,
        Json(ApiResponse::new(
            200,
            serde_json::json!({}),
            "Student logged out successfully",
        )),
    ))
}

/// POST /api/v1/student/submit-proposal
pub async fn submit_proposal(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<SubmitProposalRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ProposalCreated>>), ApiError> {
    require_student(&auth)?;
    validate_request(&req)?;

    let supervisor = student_supervisor(&auth)?;

    let proposal = state
        .proposal_repo
        .create(&CreateProposal {
            title: req.title,
            description: req.description,
            submitted_by: auth.id,
            supervisor,
        })
        .await?;

    let data = ProposalCreated {
        id: proposal.id,
        title: proposal.title,
        status: proposal.status,
        submitted_at: proposal.created_at,
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(201, data, "Proposal submitted successfully")),
    ))
}

/// GET /api/v1/student/get-student-proposals
pub async fn get_student_proposals(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Proposal>>>, ApiError> {
    require_student(&auth)?;

    let proposals = state.proposal_repo.find_by_student(auth.id).await?;

    Ok(Json(ApiResponse::new(
        200,
        proposals,
        "Proposals retrieved successfully",
    )))
}

/// POST /api/v1/student/submit-project
pub async fn submit_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<SubmitProjectRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Project>>), ApiError> {
    require_student(&auth)?;
    validate_request(&req)?;

    let document_url = match req.document_url.as_deref() {
        Some(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => return Err(AppError::validation("Project file is required").into()),
    };

    let supervisor = student_supervisor(&auth)?;

    let project = state
        .project_repo
        .create(&CreateProject {
            title: req.title,
            submitted_by: auth.id,
            supervisor,
            document_url,
            proposal: None,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(201, project, "Project submitted successfully")),
    ))
}

/// GET /api/v1/student/get-student-projects
pub async fn get_student_projects(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Project>>>, ApiError> {
    require_student(&auth)?;

    let projects = state.project_repo.find_by_student(auth.id).await?;

    Ok(Json(ApiResponse::new(
        200,
        projects,
        "Projects retrieved successfully",
    )))
}

/// The supervisor who added the authenticated student.
fn student_supervisor(auth: &AuthUser) -> Result<uuid::Uuid, AppError> {
    auth.profile
        .as_student()
        .map(|s| s.added_by)
        .ok_or_else(|| AppError::internal("Unexpected identity partition"))
}
