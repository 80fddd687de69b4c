//! Proposal repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use fyphub_core::error::{AppError, ErrorKind};
use fyphub_core::result::AppResult;
use fyphub_entity::proposal::{CreateProposal, Proposal, ProposalDetails};
use fyphub_entity::review::ReviewStatus;

/// Repository for project proposals.
#[derive(Debug, Clone)]
pub struct ProposalRepository {
    pool: PgPool,
}

impl ProposalRepository {
    /// Create a new proposal repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new proposal.
    pub async fn create(&self, data: &CreateProposal) -> AppResult<Proposal> {
        sqlx::query_as::<_, Proposal>(
            "INSERT INTO proposals (title, description, submitted_by, supervisor) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.submitted_by)
        .bind(data.supervisor)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create proposal", e))
    }

    /// List proposals submitted by the given student, newest first.
    pub async fn find_by_student(&self, student_id: Uuid) -> AppResult<Vec<Proposal>> {
        sqlx::query_as::<_, Proposal>(
            "SELECT * FROM proposals WHERE submitted_by = $1 ORDER BY created_at DESC",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list student proposals", e)
        })
    }

    /// List proposals assigned to the given supervisor with submitter
    /// details, most recently updated first.
    pub async fn find_by_supervisor(&self, supervisor_id: Uuid) -> AppResult<Vec<ProposalDetails>> {
        sqlx::query_as::<_, ProposalDetails>(
            "SELECT p.id, p.title, p.description, p.status, \
                    s.name AS submitter_name, s.roll_number AS submitter_roll_number, \
                    s.email AS submitter_email, \
                    p.created_at, p.updated_at \
             FROM proposals p \
             JOIN students s ON s.id = p.submitted_by \
             WHERE p.supervisor = $1 \
             ORDER BY p.updated_at DESC",
        )
        .bind(supervisor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list supervisor proposals", e)
        })
    }

    /// Move a pending proposal owned by the given supervisor to a final
    /// status. Returns `None` when the proposal does not exist, belongs to
    /// another supervisor, or was already processed.
    pub async fn update_status_scoped(
        &self,
        id: Uuid,
        supervisor_id: Uuid,
        status: ReviewStatus,
    ) -> AppResult<Option<Proposal>> {
        sqlx::query_as::<_, Proposal>(
            "UPDATE proposals SET status = $3, updated_at = NOW() \
             WHERE id = $1 AND supervisor = $2 AND status = 'pending' \
             RETURNING *",
        )
        .bind(id)
        .bind(supervisor_id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update proposal status", e)
        })
    }
}
