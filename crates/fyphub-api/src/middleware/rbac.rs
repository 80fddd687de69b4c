//! Role gates layered on top of the generic `AuthUser` extractor.
//!
//! A role mismatch is a 403, distinct from the 401 produced when token
//! verification itself fails.

use fyphub_core::error::AppError;
use fyphub_entity::user::Role;

use crate::extractors::AuthUser;

/// Checks that the authenticated identity is an admin.
pub fn require_admin(auth: &AuthUser) -> Result<(), AppError> {
    if auth.role != Role::Admin {
        return Err(AppError::forbidden("Forbidden: Admin access required"));
    }
    Ok(())
}

/// Checks that the authenticated identity is a supervisor.
pub fn require_supervisor(auth: &AuthUser) -> Result<(), AppError> {
    if auth.role != Role::Supervisor {
        return Err(AppError::forbidden("Forbidden: Supervisor access required"));
    }
    Ok(())
}

/// Checks that the authenticated identity is a student.
pub fn require_student(auth: &AuthUser) -> Result<(), AppError> {
    if auth.role != Role::Student {
        return Err(AppError::forbidden("Forbidden: Student access required"));
    }
    Ok(())
}

