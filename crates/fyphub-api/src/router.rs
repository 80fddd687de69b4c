//! Route definitions for the FypHub HTTP API.
//!
//! All routes are organized by role and mounted under `/api/v1`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .nest("/admin", admin_routes())
        .nest("/supervisor", supervisor_routes())
        .nest("/student", student_routes())
        .route("/health", get(handlers::health::health));

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Admin endpoints: auth, supervisor management, project oversight.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/login-admin", post(handlers::admin::login))
        .route("/admin-logout", post(handlers::admin::logout))
        .route("/add-supervisor", post(handlers::admin::add_supervisor))
        .route(
            "/get-all-supervisors",
            get(handlers::admin::get_all_supervisors),
        )
        .route(
            "/supervisor/{id}",
            patch(handlers::admin::update_supervisor).delete(handlers::admin::delete_supervisor),
        )
        .route(
            "/search-supervisors",
            get(handlers::admin::search_supervisors),
        )
        .route("/get-all-projects", get(handlers::admin::get_all_projects))
        .route("/search-projects", get(handlers::admin::search_projects))
}

/// Supervisor endpoints: auth, student management, submission review.
fn supervisor_routes() -> Router<AppState> {
    Router::new()
        .route("/login-supervisor", post(handlers::supervisor::login))
        .route("/logout-supervisor", post(handlers::supervisor::logout))
        .route("/add-student", post(handlers::supervisor::add_student))
        .route(
            "/get-all-students",
            get(handlers::supervisor::get_all_students),
        )
        .route(
            "/update-student/{id}",
            patch(handlers::supervisor::update_student),
        )
        .route(
            "/delete-student/{id}",
            delete(handlers::supervisor::delete_student),
        )
        .route("/items/{type}", get(handlers::supervisor::get_items))
        .route(
            "/items/{type}/{id}",
            patch(handlers::supervisor::update_item_status),
        )
}

/// Student endpoints: auth, proposal and project submission.
fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/login-student", post(handlers::student::login))
        .route("/student-logout", post(handlers::student::logout))
        .route("/submit-proposal", post(handlers::student::submit_proposal))
        .route(
            "/get-student-proposals",
            get(handlers::student::get_student_proposals),
        )
        .route("/submit-project", post(handlers::student::submit_project))
        .route(
            "/get-student-projects",
            get(handlers::student::get_student_projects),
        )
}
