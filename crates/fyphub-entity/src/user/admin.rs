//! Admin entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An administrator account.
///
/// Admins are provisioned at startup (default account) or by other admins;
/// there is no self-registration.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Admin {
    /// Unique admin identifier.
    pub id: Uuid,
    /// Login email, unique within the admin partition.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// The single currently-valid refresh token, absent when logged out.
    #[serde(skip_serializing)]
    pub refresh_token: Option<String>,
    /// When the admin was created.
    pub created_at: DateTime<Utc>,
    /// When the admin was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Public projection of an admin, safe to return in responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    /// Admin ID.
    pub id: Uuid,
    /// Login email.
    pub email: String,
}

impl From<&Admin> for AdminProfile {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id,
            email: admin.email.clone(),
        }
    }
}
