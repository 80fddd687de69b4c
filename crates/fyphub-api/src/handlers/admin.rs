//! Admin handlers — login, logout, supervisor management, project
//! oversight.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use fyphub_core::error::AppError;
use fyphub_entity::user::{CreateSupervisor, Profile, Role, Supervisor, UpdateSupervisor};

use crate::cookies;
use crate::dto::request::{
    CreateSupervisorRequest, LoginRequest, NameQuery, TitleQuery, UpdateSupervisorRequest,
};
use crate::dto::response::{
    AdminLoginData, ApiResponse, ProjectsOverview, SupervisorCreated,
};
use crate::dto::validate_request;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// POST /api/v1/admin/login-admin
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<AdminLoginData>>), ApiError> {
    let result = state
        .session_manager
        .login(Role::Admin, &req.email, &req.password)
        .await?;

    let Profile::Admin(admin) = result.profile else {
        return Err(AppError::internal("Unexpected identity partition").into());
    };

    let data = AdminLoginData {
        admin,
        access_token: result.tokens.access_token.clone(),
        refresh_token: result.tokens.refresh_token.clone(),
    };

    let jar = cookies::with_auth_cookies(jar, &result.tokens, state.config.server.secure_cookies);

    Ok((
        jar,
        Json(ApiResponse::new(200, data, "Admin logged in successfully")),
    ))
}

/// POST /api/v1/admin/admin-logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
    jar: CookieJar,
) -> Result<(CookieJar, Json<ApiResponse<serde_json::Value>>), ApiError> {
    require_admin(&auth)?;

    state.session_manager.logout(Role::Admin, auth.id).await?;

    let jar = cookies::without_auth_cookies(jar, state.config.server.secure_cookies);

    Ok((
        jar,
        Json(ApiResponse::new(
            200,
            serde_json::json!({}),
            "Admin logged out successfully",
        )),
    ))
}

/// POST /api/v1/admin/add-supervisor
pub async fn add_supervisor(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateSupervisorRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SupervisorCreated>>), ApiError> {
    require_admin(&auth)?;
    validate_request(&req)?;

    if state
        .supervisor_repo
        .find_by_email(&req.email)
        .await?
        .is_some()
    {
        return Err(AppError::conflict("Supervisor with this email already exists").into());
    }

    let password_hash = state.password_hasher.hash_password(&req.password)?;
    let supervisor = state
        .supervisor_repo
        .create(&CreateSupervisor {
            name: req.name,
            email: req.email,
            password_hash,
        })
        .await?;

    let data = SupervisorCreated {
        id: supervisor.id,
        name: supervisor.name,
        email: supervisor.email,
        created_at: supervisor.created_at,
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(201, data, "Supervisor added successfully")),
    ))
}

/// GET /api/v1/admin/get-all-supervisors
pub async fn get_all_supervisors(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Supervisor>>>, ApiError> {
    require_admin(&auth)?;

    let supervisors = state.supervisor_repo.find_all().await?;

    Ok(Json(ApiResponse::new(
        200,
        supervisors,
        "Supervisors retrieved successfully",
    )))
}

/// PATCH /api/v1/admin/supervisor/{id}
pub async fn update_supervisor(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateSupervisorRequest>,
) -> Result<Json<ApiResponse<Supervisor>>, ApiError> {
    require_admin(&auth)?;

    if state.supervisor_repo.find_by_id(id).await?.is_none() {
        return Err(AppError::not_found("Supervisor not found").into());
    }

    let password_hash = match req.password.as_deref() {
        Some(password) if !password.trim().is_empty() => {
            Some(state.password_hasher.hash_password(password)?)
        }
        _ => None,
    };

    let updated = state
        .supervisor_repo
        .update(
            id,
            &UpdateSupervisor {
                name: req.name,
                email: req.email,
                password_hash,
            },
        )
        .await?;

    Ok(Json(ApiResponse::new(
        200,
        updated,
        "Supervisor updated successfully",
    )))
}

/// DELETE /api/v1/admin/supervisor/{id}
pub async fn delete_supervisor(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    require_admin(&auth)?;

    if !state.supervisor_repo.delete(id).await? {
        return Err(AppError::not_found("Supervisor not found").into());
    }

    Ok(Json(ApiResponse::new(
        200,
        serde_json::Value::Null,
        "Supervisor deleted successfully",
    )))
}

/// GET /api/v1/admin/search-supervisors?name=
pub async fn search_supervisors(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<NameQuery>,
) -> Result<Json<ApiResponse<Vec<Supervisor>>>, ApiError> {
    require_admin(&auth)?;

    let name = query.name.unwrap_or_default();
    if name.trim().is_empty() {
        return Err(AppError::validation("Search query is required").into());
    }

    let supervisors = state.supervisor_repo.search_by_name(name.trim()).await?;
    let message = format!(
        "Found {} supervisors matching \"{}\"",
        supervisors.len(),
        name.trim()
    );

    Ok(Json(ApiResponse::new(200, supervisors, message)))
}

/// GET /api/v1/admin/get-all-projects
pub async fn get_all_projects(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<ProjectsOverview>>, ApiError> {
    require_admin(&auth)?;

    let projects = state.project_repo.find_all_detailed().await?;
    let counts = state.project_repo.counts().await?;

    Ok(Json(ApiResponse::new(
        200,
        ProjectsOverview { projects, counts },
        "All projects retrieved successfully",
    )))
}

/// GET /api/v1/admin/search-projects?title=
pub async fn search_projects(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<TitleQuery>,
) -> Result<Json<ApiResponse<Vec<fyphub_entity::project::ProjectDetails>>>, ApiError> {
    require_admin(&auth)?;

    let title = query.title.unwrap_or_default();
    if title.trim().is_empty() {
        return Err(AppError::validation("Project title query is required").into());
    }

    let projects = state.project_repo.search_by_title(title.trim()).await?;

    Ok(Json(ApiResponse::new(
        200,
        projects,
        "Projects found by title",
    )))
}
