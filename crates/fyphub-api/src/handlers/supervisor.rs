//! Supervisor handlers — login, logout, student management, and
//! project/proposal review.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use fyphub_core::error::AppError;
use fyphub_entity::review::ReviewStatus;
use fyphub_entity::user::{CreateStudent, Profile, Role, Student, UpdateStudent};

use crate::cookies;
use crate::dto::request::{
    CreateStudentRequest, LoginRequest, UpdateStatusRequest, UpdateStudentRequest,
};
use crate::dto::response::{ApiResponse, StudentCreated, SupervisorLoginData};
use crate::dto::validate_request;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::rbac::require_supervisor;
use crate::state::AppState;

/// POST /api/v1/supervisor/login-supervisor
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<SupervisorLoginData>>), ApiError> {
    let result = state
        .session_manager
        .login(Role::Supervisor, &req.email, &req.password)
        .await?;

    let Profile::Supervisor(supervisor) = result.profile else {
        return Err(AppError::internal("Unexpected identity partition").into());
    };

    let data = SupervisorLoginData {
        supervisor,
        access_token: result.tokens.access_token.clone(),
        refresh_token: result.tokens.refresh_token.clone(),
    };

    let jar = cookies::with_auth_cookies(jar, &result.tokens, state.config.server.secure_cookies);

    Ok((
        jar,
        Json(ApiResponse::new(
            200,
            data,
            "Supervisor logged in successfully",
        )),
    ))
}

/// POST /api/v1/supervisor/logout-supervisor
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
    jar: CookieJar,
) -> Result<(CookieJar, Json<ApiResponse<serde_json::Value>>), ApiError> {
    require_supervisor(&auth)?;

    state
        .session_manager
        .logout(Role::Supervisor, auth.id)
        .await?;

    let jar = cookies::without_auth_cookies(jar, state.config.server.secure_cookies);

    Ok((
        jar,
        Json(ApiResponse::new(
            200,
            serde_json::json!({}),
            "Supervisor logged out successfully",
        )),
    ))
}

/// POST /api/v1/supervisor/add-student
pub async fn add_student(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<StudentCreated>>), ApiError> {
    require_supervisor(&auth)?;
    validate_request(&req)?;

    if state
        .student_repo
        .find_by_email_or_roll(&req.email, &req.roll_number)
        .await?
        .is_some()
    {
        return Err(
            AppError::conflict("Student with this email or roll number already exists").into(),
        );
    }

    let password_hash = state.password_hasher.hash_password(&req.password)?;
    let student = state
        .student_repo
        .create(&CreateStudent {
            name: req.name,
            email: req.email,
            roll_number: req.roll_number,
            password_hash,
            added_by: auth.id,
        })
        .await?;

    let data = StudentCreated {
        id: student.id,
        name: student.name,
        email: student.email,
        roll_number: student.roll_number,
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(201, data, "Student added successfully")),
    ))
}

/// GET /api/v1/supervisor/get-all-students
pub async fn get_all_students(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Student>>>, ApiError> {
    require_supervisor(&auth)?;

    let students = state.student_repo.find_by_supervisor(auth.id).await?;

    Ok(Json(ApiResponse::new(
        200,
        students,
        "Students retrieved successfully",
    )))
}

/// PATCH /api/v1/supervisor/update-student/{id}
pub async fn update_student(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStudentRequest>,
) -> Result<Json<ApiResponse<Student>>, ApiError> {
    require_supervisor(&auth)?;

    if req.name.is_none()
        && req.email.is_none()
        && req.roll_number.is_none()
        && req.password.is_none()
    {
        return Err(AppError::validation("No valid fields provided for update").into());
    }

    let password_hash = match req.password.as_deref() {
        Some(password) if !password.trim().is_empty() => {
            Some(state.password_hasher.hash_password(password)?)
        }
        _ => None,
    };

    let student = state
        .student_repo
        .update_scoped(
            id,
            auth.id,
            &UpdateStudent {
                name: req.name,
                email: req.email,
                roll_number: req.roll_number,
                password_hash,
            },
        )
        .await?
        .ok_or_else(|| AppError::not_found("Student not found or unauthorized"))?;

    Ok(Json(ApiResponse::new(
        200,
        student,
        "Student updated successfully",
    )))
}

/// DELETE /api/v1/supervisor/delete-student/{id}
pub async fn delete_student(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    require_supervisor(&auth)?;

    if !state.student_repo.delete_scoped(id, auth.id).await? {
        return Err(AppError::not_found("Student not found or unauthorized").into());
    }

    Ok(Json(ApiResponse::new(
        200,
        serde_json::Value::Null,
        "Student deleted successfully",
    )))
}

/// GET /api/v1/supervisor/items/{type}
///
/// Lists the projects or proposals submitted to the authenticated
/// supervisor.
pub async fn get_items(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(item_type): Path<String>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    require_supervisor(&auth)?;

    let data = match item_type.as_str() {
        "project" => {
            let projects = state.project_repo.find_by_supervisor(auth.id).await?;
            serde_json::to_value(projects).map_err(AppError::from)?
        }
        "proposal" => {
            let proposals = state.proposal_repo.find_by_supervisor(auth.id).await?;
            serde_json::to_value(proposals).map_err(AppError::from)?
        }
        _ => return Err(AppError::validation("Invalid type specified").into()),
    };

    Ok(Json(ApiResponse::new(
        200,
        data,
        format!("{item_type}s retrieved successfully"),
    )))
}

/// PATCH /api/v1/supervisor/items/{type}/{id}
///
/// Moves a pending project or proposal to `approved` or `rejected`.
pub async fn update_item_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((item_type, id)): Path<(String, Uuid)>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    require_supervisor(&auth)?;

    if item_type != "project" && item_type != "proposal" {
        return Err(AppError::validation("Invalid type specified").into());
    }

    let status = match req.status.as_str() {
        "approved" => ReviewStatus::Approved,
        "rejected" => ReviewStatus::Rejected,
        _ => return Err(AppError::validation("Invalid status specified").into()),
    };

    let data = match item_type.as_str() {
        "project" => state
            .project_repo
            .update_status_scoped(id, auth.id, status)
            .await?
            .map(|p| serde_json::to_value(p).map_err(AppError::from))
            .transpose()?,
        _ => state
            .proposal_repo
            .update_status_scoped(id, auth.id, status)
            .await?
            .map(|p| serde_json::to_value(p).map_err(AppError::from))
            .transpose()?,
    };

    let Some(data) = data else {
        return Err(AppError::not_found(format!("{item_type} not found or already processed")).into());
    };

    Ok(Json(ApiResponse::new(
        200,
        data,
        format!("{item_type} {status} successfully"),
    )))
}
