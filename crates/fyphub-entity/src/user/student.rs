//! Student entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::Role;

/// A student account, created by the supervisor who manages them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Student {
    /// Unique student identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Login email, unique within the student partition.
    pub email: String,
    /// Roll number, unique within the student partition.
    pub roll_number: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// The single currently-valid refresh token, absent when logged out.
    #[serde(skip_serializing)]
    pub refresh_token: Option<String>,
    /// The supervisor who added this student.
    pub added_by: Uuid,
    /// When the student was created.
    pub created_at: DateTime<Utc>,
    /// When the student was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Public projection of a student, safe to return in responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    /// Student ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Roll number.
    pub roll_number: String,
    /// Role discriminator, always `student`.
    pub role: Role,
    /// The supervisor who added this student.
    pub added_by: Uuid,
}

impl From<&Student> for StudentProfile {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id,
            name: student.name.clone(),
            email: student.email.clone(),
            roll_number: student.roll_number.clone(),
            role: Role::Student,
            added_by: student.added_by,
        }
    }
}

/// Data required to create a new student.
#[derive(Debug, Clone)]
pub struct CreateStudent {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Roll number.
    pub roll_number: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// The supervisor creating this student.
    pub added_by: Uuid,
}

/// Data for updating an existing student. `None` fields are left
/// unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateStudent {
    /// New display name.
    pub name: Option<String>,
    /// New login email.
    pub email: Option<String>,
    /// New roll number.
    pub roll_number: Option<String>,
    /// New pre-hashed password.
    pub password_hash: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_uses_camel_case_keys() {
        let student = Student {
            id: Uuid::new_v4(),
            name: "Ali".to_string(),
            email: "a@b.com".to_string(),
            roll_number: "FA21-001".to_string(),
            password_hash: "hash".to_string(),
            refresh_token: None,
            added_by: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(StudentProfile::from(&student)).unwrap();
        assert_eq!(json["rollNumber"], "FA21-001");
        assert_eq!(json["role"], "student");
        assert!(json.get("addedBy").is_some());
    }
}
