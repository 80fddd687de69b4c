//! Admin repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use fyphub_core::error::{AppError, ErrorKind};
use fyphub_core::result::AppResult;
use fyphub_entity::user::Admin;

/// Repository for the admin role partition.
#[derive(Debug, Clone)]
pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    /// Create a new admin repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an admin by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Admin>> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find admin by id", e)
            })
    }

    /// Find an admin by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find admin by email", e)
            })
    }

    /// Create a new admin.
    pub async fn create(&self, email: &str, password_hash: &str) -> AppResult<Admin> {
        sqlx::query_as::<_, Admin>(
            "INSERT INTO admins (email, password_hash) VALUES ($1, $2) RETURNING *",
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("admins_email_key") => {
                AppError::conflict("Admin with this email already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create admin", e),
        })
    }

    /// Overwrite or clear the stored refresh token.
    pub async fn set_refresh_token(&self, id: Uuid, token: Option<&str>) -> AppResult<()> {
        sqlx::query("UPDATE admins SET refresh_token = $2, updated_at = NOW() WHERE id = $1")
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
