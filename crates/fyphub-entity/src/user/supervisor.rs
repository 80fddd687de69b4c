//! Supervisor entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A supervisor account, created by an admin.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Supervisor {
    /// Unique supervisor identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Login email, unique within the supervisor partition (lowercased).
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// The single currently-valid refresh token, absent when logged out.
    #[serde(skip_serializing)]
    pub refresh_token: Option<String>,
    /// When the supervisor was created.
    pub created_at: DateTime<Utc>,
    /// When the supervisor was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Public projection of a supervisor, safe to return in responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SupervisorProfile {
    /// Supervisor ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
}

impl From<&Supervisor> for SupervisorProfile {
    fn from(supervisor: &Supervisor) -> Self {
        Self {
            id: supervisor.id,
            name: supervisor.name.clone(),
            email: supervisor.email.clone(),
        }
    }
}

/// Data required to create a new supervisor.
#[derive(Debug, Clone)]
pub struct CreateSupervisor {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
}

/// Data for updating an existing supervisor. `None` fields are left
/// unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateSupervisor {
    /// New display name.
    pub name: Option<String>,
    /// New login email.
    pub email: Option<String>,
    /// New pre-hashed password.
    pub password_hash: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_fields_never_serialized() {
        let supervisor = Supervisor {
            id: Uuid::new_v4(),
            name: "Dr. Khan".to_string(),
            email: "khan@fyp.com".to_string(),
            password_hash: "$argon2id$...".to_string(),
            refresh_token: Some("token".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&supervisor).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("refresh_token").is_none());
        assert!(json.get("email").is_some());
    }
}
