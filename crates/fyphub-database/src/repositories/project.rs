//! Project repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use fyphub_core::error::{AppError, ErrorKind};
use fyphub_core::result::AppResult;
use fyphub_entity::project::{CreateProject, Project, ProjectCounts, ProjectDetails};
use fyphub_entity::review::ReviewStatus;

const DETAILS_SELECT: &str = "SELECT p.id, p.title, p.document_url, p.status, \
            s.name AS submitter_name, s.roll_number AS submitter_roll_number, \
            s.email AS submitter_email, \
            v.name AS supervisor_name, v.email AS supervisor_email, \
            pr.description AS proposal_description, \
            p.created_at, p.updated_at \
     FROM projects p \
     JOIN students s ON s.id = p.submitted_by \
     JOIN supervisors v ON v.id = p.supervisor \
     LEFT JOIN proposals pr ON pr.id = p.proposal";

/// Repository for project submissions.
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// Create a new project repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new project submission.
    pub async fn create(&self, data: &CreateProject) -> AppResult<Project> {
        sqlx::query_as::<_, Project>(
            "INSERT INTO projects (title, submitted_by, supervisor, document_url, proposal) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(data.submitted_by)
        .bind(data.supervisor)
        .bind(&data.document_url)
        .bind(data.proposal)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create project", e))
    }

    /// List all projects with submitter and supervisor details, newest
    /// first.
    pub async fn find_all_detailed(&self) -> AppResult<Vec<ProjectDetails>> {
        let query = format!("{DETAILS_SELECT} ORDER BY p.created_at DESC");
        sqlx::query_as::<_, ProjectDetails>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list projects", e))
    }

    /// Search projects by title (case-insensitive substring), newest first.
    pub async fn search_by_title(&self, title: &str) -> AppResult<Vec<ProjectDetails>> {
        let pattern = format!("%{title}%");
        let query = format!("{DETAILS_SELECT} WHERE p.title ILIKE $1 ORDER BY p.created_at DESC");
        sqlx::query_as::<_, ProjectDetails>(&query)
            .bind(&pattern)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search projects", e))
    }

    /// List projects assigned to the given supervisor, most recently
    /// updated first.
    pub async fn find_by_supervisor(&self, supervisor_id: Uuid) -> AppResult<Vec<ProjectDetails>> {
        let query = format!("{DETAILS_SELECT} WHERE p.supervisor = $1 ORDER BY p.updated_at DESC");
        sqlx::query_as::<_, ProjectDetails>(&query)
            .bind(supervisor_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list supervisor projects", e)
            })
    }

    /// List projects submitted by the given student, newest first.
    pub async fn find_by_student(&self, student_id: Uuid) -> AppResult<Vec<Project>> {
        sqlx::query_as::<_, Project>(
            "SELECT * FROM projects WHERE submitted_by = $1 ORDER BY created_at DESC",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list student projects", e)
        })
    }

    /// Review-status counts over all projects.
    pub async fn counts(&self) -> AppResult<ProjectCounts> {
        sqlx::query_as::<_, ProjectCounts>(
            "SELECT COUNT(*) AS total, \
                    COUNT(*) FILTER (WHERE status = 'pending') AS pending, \
                    COUNT(*) FILTER (WHERE status = 'approved') AS approved, \
                    COUNT(*) FILTER (WHERE status = 'rejected') AS rejected \
             FROM projects",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count projects", e))
    }

    /// Move a pending project owned by the given supervisor to a final
    /// status. Returns `None` when the project does not exist, belongs to
    /// another supervisor, or was already processed.
    pub async fn update_status_scoped(
        &self,
        id: Uuid,
        supervisor_id: Uuid,
        status: ReviewStatus,
    ) -> AppResult<Option<Project>> {
        sqlx::query_as::<_, Project>(
            "UPDATE projects SET status = $3, updated_at = NOW() \
             WHERE id = $1 AND supervisor = $2 AND status = 'pending' \
             RETURNING *",
        )
        .bind(id)
        .bind(supervisor_id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update project status", e)
        })
    }
}
