//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use fyphub_auth::jwt::verifier::TokenVerifier;
use fyphub_auth::password::PasswordHasher;
use fyphub_auth::session::manager::SessionManager;
use fyphub_auth::store::RoleDirectory;
use fyphub_core::config::AppConfig;
use fyphub_database::repositories::{
    ProjectRepository, ProposalRepository, StudentRepository, SupervisorRepository,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,

    // ── Auth ─────────────────────────────────────────────────
    /// Session lifecycle manager.
    pub session_manager: Arc<SessionManager>,
    /// Stateless access token verifier.
    pub token_verifier: Arc<TokenVerifier>,
    /// Role-keyed identity partition stores.
    pub directory: Arc<RoleDirectory>,
    /// Password hasher (Argon2).
    pub password_hasher: Arc<PasswordHasher>,

    // ── Repositories ─────────────────────────────────────────
    /// Supervisor repository.
    pub supervisor_repo: Arc<SupervisorRepository>,
    /// Student repository.
    pub student_repo: Arc<StudentRepository>,
    /// Project repository.
    pub project_repo: Arc<ProjectRepository>,
    /// Proposal repository.
    pub proposal_repo: Arc<ProposalRepository>,
}
