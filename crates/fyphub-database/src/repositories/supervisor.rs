//! Supervisor repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use fyphub_core::error::{AppError, ErrorKind};
use fyphub_core::result::AppResult;
use fyphub_entity::user::{CreateSupervisor, Supervisor, UpdateSupervisor};

/// Repository for the supervisor role partition.
#[derive(Debug, Clone)]
pub struct SupervisorRepository {
    pool: PgPool,
}

impl SupervisorRepository {
    /// Create a new supervisor repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a supervisor by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Supervisor>> {
        sqlx::query_as::<_, Supervisor>("SELECT * FROM supervisors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find supervisor by id", e)
            })
    }

    /// Find a supervisor by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Supervisor>> {
        sqlx::query_as::<_, Supervisor>("SELECT * FROM supervisors WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find supervisor by email", e)
            })
    }

    /// List all supervisors, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Supervisor>> {
        sqlx::query_as::<_, Supervisor>("SELECT * FROM supervisors ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list supervisors", e)
            })
    }

    /// Search supervisors by name (case-insensitive substring), sorted by
    /// name, capped at ten results.
    pub async fn search_by_name(&self, name: &str) -> AppResult<Vec<Supervisor>> {
        let pattern = format!("%{name}%");
        sqlx::query_as::<_, Supervisor>(
            "SELECT * FROM supervisors WHERE name ILIKE $1 ORDER BY name ASC LIMIT 10",
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search supervisors", e))
    }

    /// Create a new supervisor. Emails are stored lowercased.
    pub async fn create(&self, data: &CreateSupervisor) -> AppResult<Supervisor> {
        sqlx::query_as::<_, Supervisor>(
            "INSERT INTO supervisors (name, email, password_hash) \
             VALUES ($1, LOWER($2), $3) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("supervisors_email_key") =>
            {
                AppError::conflict("Supervisor with this email already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create supervisor", e),
        })
    }

    /// Update a supervisor's fields; unset fields are left unchanged.
    pub async fn update(&self, id: Uuid, data: &UpdateSupervisor) -> AppResult<Supervisor> {
        sqlx::query_as::<_, Supervisor>(
            "UPDATE supervisors SET name = COALESCE($2, name), \
                                    email = COALESCE(LOWER($3), email), \
                                    password_hash = COALESCE($4, password_hash), \
                                    updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update supervisor", e))?
        .ok_or_else(|| AppError::not_found("Supervisor not found"))
    }

    /// Delete a supervisor by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM supervisors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete supervisor", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Overwrite or clear the stored refresh token.
    pub async fn set_refresh_token(&self, id: Uuid, token: Option<&str>) -> AppResult<()> {
        sqlx::query("UPDATE supervisors SET refresh_token = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update refresh token", e)
            })?;
        Ok(())
    }
}
