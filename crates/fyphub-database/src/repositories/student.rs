//! Student repository implementation.
//!
//! Mutating operations are scoped to the supervisor who added the student,
//! so a supervisor can never touch another supervisor's students.

use sqlx::PgPool;
use uuid::Uuid;

use fyphub_core::error::{AppError, ErrorKind};
use fyphub_core::result::AppResult;
use fyphub_entity::user::{CreateStudent, Student, UpdateStudent};

/// Repository for the student role partition.
#[derive(Debug, Clone)]
pub struct StudentRepository {
    pool: PgPool,
}

impl StudentRepository {
    /// Create a new student repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a student by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Student>> {
        sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find student by id", e)
            })
    }

    /// Find a student by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Student>> {
        sqlx::query_as::<_, Student>("SELECT * FROM students WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find student by email", e)
            })
    }

    /// Find a student matching either the email or the roll number, used
    /// for the pre-create uniqueness check.
    pub async fn find_by_email_or_roll(
        &self,
        email: &str,
        roll_number: &str,
    ) -> AppResult<Option<Student>> {
        sqlx::query_as::<_, Student>(
            "SELECT * FROM students WHERE LOWER(email) = LOWER($1) OR roll_number = $2",
        )
        .bind(email)
        .bind(roll_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check student uniqueness", e)
        })
    }

    /// List students added by the given supervisor, newest first.
    pub async fn find_by_supervisor(&self, supervisor_id: Uuid) -> AppResult<Vec<Student>> {
        sqlx::query_as::<_, Student>(
            "SELECT * FROM students WHERE added_by = $1 ORDER BY created_at DESC",
        )
        .bind(supervisor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list students", e))
    }

    /// Create a new student.
    pub async fn create(&self, data: &CreateStudent) -> AppResult<Student> {
        sqlx::query_as::<_, Student>(
            "INSERT INTO students (name, email, roll_number, password_hash, added_by) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.roll_number)
        .bind(&data.password_hash)
        .bind(data.added_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("students_email_key")
                    || db_err.constraint() == Some("students_roll_number_key") =>
            {
                AppError::conflict("Student with this email or roll number already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create student", e),
        })
    }

    /// Update a student owned by the given supervisor; unset fields are
    /// left unchanged. Returns `None` when the student does not exist or
    /// belongs to another supervisor.
    pub async fn update_scoped(
        &self,
        id: Uuid,
        supervisor_id: Uuid,
        data: &UpdateStudent,
    ) -> AppResult<Option<Student>> {
        sqlx::query_as::<_, Student>(
            "UPDATE students SET name = COALESCE($3, name), \
                                 email = COALESCE($4, email), \
                                 roll_number = COALESCE($5, roll_number), \
                                 password_hash = COALESCE($6, password_hash), \
                                 updated_at = NOW() \
             WHERE id = $1 AND added_by = $2 RETURNING *",
        )
        .bind(id)
        .bind(supervisor_id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.roll_number)
        .bind(&data.password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update student", e))
    }

    /// Delete a student owned by the given supervisor.
    pub async fn delete_scoped(&self, id: Uuid, supervisor_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1 AND added_by = $2")
            .bind(id)
            .bind(supervisor_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete student", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Overwrite or clear the stored refresh token.
    pub async fn set_refresh_token(&self, id: Uuid, token: Option<&str>) -> AppResult<()> {
        sqlx::query("UPDATE students SET refresh_token = $2, updated_at = NOW() WHERE id = $1")
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
