//! Per-role identity store capability and role-keyed dispatch.

pub mod partitions;

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use fyphub_core::result::AppResult;
use fyphub_entity::user::{Identity, Role};

/// Credential-store capability over one role partition.
///
/// The auth core only ever reads the fields exposed through [`Identity`]
/// and writes the single refresh-token slot; everything else about the
/// backing records belongs to the domain layer.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Look up an identity by its unique email within this partition.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Identity>>;

    /// Look up an identity by ID within this partition.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Identity>>;

    /// Overwrite the identity's stored refresh token; `None` clears it.
    ///
    /// At most one refresh token is valid per identity, so storing a new
    /// value invalidates the prior one.
    async fn store_refresh_token(&self, id: Uuid, token: Option<&str>) -> AppResult<()>;
}

/// Role-keyed dispatch over the three partition stores.
///
/// Replaces string-keyed branching with an explicit, total mapping from
/// [`Role`] to the partition that owns it.
#[derive(Clone)]
pub struct RoleDirectory {
    admins: Arc<dyn IdentityStore>,
    supervisors: Arc<dyn IdentityStore>,
    students: Arc<dyn IdentityStore>,
}

impl RoleDirectory {
    /// Creates a directory from one store per partition.
    pub fn new(
        admins: Arc<dyn IdentityStore>,
        supervisors: Arc<dyn IdentityStore>,
        students: Arc<dyn IdentityStore>,
    ) -> Self {
        Self {
            admins,
            supervisors,
            students,
        }
    }

    /// Returns the partition store for the given role.
    pub fn partition(&self, role: Role) -> &dyn IdentityStore {
        match role {
            Role::Admin => self.admins.as_ref(),
            Role::Supervisor => self.supervisors.as_ref(),
            Role::Student => self.students.as_ref(),
        }
    }
}

impl std::fmt::Debug for RoleDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleDirectory").finish()
    }
}
