//! Cross-partition identity union.

use serde::Serialize;
use uuid::Uuid;

use super::admin::{Admin, AdminProfile};
use super::role::Role;
use super::student::{Student, StudentProfile};
use super::supervisor::{Supervisor, SupervisorProfile};

/// A resolved identity from exactly one of the three role partitions.
///
/// The variant carries the full record; accessors expose the fields the
/// auth core reads, and [`Identity::profile`] produces the public
/// projection handed to response payloads and request context.
#[derive(Debug, Clone)]
pub enum Identity {
    /// An admin record.
    Admin(Admin),
    /// A supervisor record.
    Supervisor(Supervisor),
    /// A student record.
    Student(Student),
}

impl Identity {
    /// The record's unique identifier.
    pub fn id(&self) -> Uuid {
        match self {
            Self::Admin(a) => a.id,
            Self::Supervisor(s) => s.id,
            Self::Student(s) => s.id,
        }
    }

    /// The record's login email.
    pub fn email(&self) -> &str {
        match self {
            Self::Admin(a) => &a.email,
            Self::Supervisor(s) => &s.email,
            Self::Student(s) => &s.email,
        }
    }

    /// The partition this identity belongs to.
    pub fn role(&self) -> Role {
        match self {
            Self::Admin(_) => Role::Admin,
            Self::Supervisor(_) => Role::Supervisor,
            Self::Student(_) => Role::Student,
        }
    }

    /// The stored Argon2 password hash.
    pub fn password_hash(&self) -> &str {
        match self {
            Self::Admin(a) => &a.password_hash,
            Self::Supervisor(s) => &s.password_hash,
            Self::Student(s) => &s.password_hash,
        }
    }

    /// The stored refresh token, if any.
    pub fn refresh_token(&self) -> Option<&str> {
        match self {
            Self::Admin(a) => a.refresh_token.as_deref(),
            Self::Supervisor(s) => s.refresh_token.as_deref(),
            Self::Student(s) => s.refresh_token.as_deref(),
        }
    }

    /// The public projection of this identity, never containing the
    /// password hash or refresh token.
    pub fn profile(&self) -> Profile {
        match self {
            Self::Admin(a) => Profile::Admin(AdminProfile::from(a)),
            Self::Supervisor(s) => Profile::Supervisor(SupervisorProfile::from(s)),
            Self::Student(s) => Profile::Student(StudentProfile::from(s)),
        }
    }
}

/// Public projection of an [`Identity`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Profile {
    /// Admin projection.
    Admin(AdminProfile),
    /// Supervisor projection.
    Supervisor(SupervisorProfile),
    /// Student projection.
    Student(StudentProfile),
}

impl Profile {
    /// The student projection, if this is one.
    pub fn as_student(&self) -> Option<&StudentProfile> {
        match self {
            Self::Student(s) => Some(s),
            _ => None,
        }
    }
}
