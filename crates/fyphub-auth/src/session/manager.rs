//! Session lifecycle manager — login and logout flows.

use std::sync::Arc;

use tracing::info;

use fyphub_core::error::AppError;
use fyphub_entity::user::{Profile, Role};
use uuid::Uuid;

use crate::jwt::issuer::{TokenIssuer, TokenPair};
use crate::password::PasswordHasher;
use crate::store::RoleDirectory;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// Generated token pair.
    pub tokens: TokenPair,
    /// Public projection of the authenticated identity.
    pub profile: Profile,
}

/// Manages the complete session lifecycle.
#[derive(Clone)]
pub struct SessionManager {
    /// Token issuance.
    issuer: Arc<TokenIssuer>,
    /// Role-keyed partition stores.
    directory: Arc<RoleDirectory>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager").finish()
    }
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(
        issuer: Arc<TokenIssuer>,
        directory: Arc<RoleDirectory>,
        hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            issuer,
            directory,
            hasher,
        }
    }

    /// Performs the complete login flow for one role partition:
    ///
    /// 1. Validate that email and password are present
    /// 2. Resolve the identity within the role's partition
    /// 3. Verify the password against the stored hash
    /// 4. Issue an access + refresh token pair
    /// 5. Overwrite the stored refresh token with the new value
    ///
    /// A failed login never writes a refresh token.
    pub async fn login(
        &self,
        role: Role,
        email: &str,
        password: &str,
    ) -> Result<LoginResult, AppError> {
        let email = email.trim();
        let password = password.trim();

        if email.is_empty() || password.is_empty() {
            return Err(AppError::validation("Email and password are required"));
        }

        let store = self.directory.partition(role);

        let identity = store
            .find_by_email(email)
            .await?
            .ok_or_else(|| Self::unknown_identity_error(role))?;

        let password_valid = self
            .hasher
            .verify_password(password, identity.password_hash())?;

        if !password_valid {
            return Err(Self::bad_password_error(role));
        }

        let tokens = self.issuer.issue_pair(&identity)?;

        store
            .store_refresh_token(identity.id(), Some(&tokens.refresh_token))
            .await?;

        info!(user_id = %identity.id(), role = %role, "Login successful");

        Ok(LoginResult {
            profile: identity.profile(),
            tokens,
        })
    }

    /// Clears the stored refresh token for an authenticated identity.
    ///
    /// Idempotent: clearing an already-absent token is not an error. The
    /// caller is responsible for clearing transport-level credentials in
    /// the same response.
    pub async fn logout(&self, role: Role, id: Uuid) -> Result<(), AppError> {
        self.directory
            .partition(role)
            .store_refresh_token(id, None)
            .await?;

        info!(user_id = %id, role = %role, "Logout completed");
        Ok(())
    }

    /// The identity-not-found error for a partition. Admin lookups
    /// deliberately collapse into the credential error so the response
    /// does not reveal whether the admin email exists.
    fn unknown_identity_error(role: Role) -> AppError {
        match role {
            Role::Admin => AppError::unauthorized("Invalid admin credentials"),
            Role::Supervisor => {
                AppError::not_found("Supervisor not found. Please contact admin")
            }
            Role::Student => {
                AppError::not_found("Student not found. Please contact your supervisor")
            }
        }
    }

    /// The password-mismatch error for a partition.
    fn bad_password_error(role: Role) -> AppError {
        match role {
            Role::Admin => AppError::unauthorized("Invalid admin credentials"),
            Role::Supervisor | Role::Student => AppError::unauthorized("Invalid credentials"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::IdentityStore;
    use async_trait::async_trait;
    use chrono::Utc;
    use fyphub_core::config::AuthConfig;
    use fyphub_core::error::ErrorKind;
    use fyphub_core::result::AppResult;
    use fyphub_entity::user::{Identity, Student, Supervisor};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory partition store for exercising the login/logout flows
    /// without a database.
    #[derive(Default)]
    struct MemoryStore {
        records: Mutex<HashMap<Uuid, Identity>>,
    }

    impl MemoryStore {
        fn insert(&self, identity: Identity) {
            self.records.lock().unwrap().insert(identity.id(), identity);
        }

        fn refresh_token_of(&self, id: Uuid) -> Option<String> {
            self.records
                .lock()
                .unwrap()
                .get(&id)
                .and_then(|i| i.refresh_token().map(String::from))
        }
    }

    #[async_trait]
    impl IdentityStore for MemoryStore {
        async fn find_by_email(&self, email: &str) -> AppResult<Option<Identity>> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .values()
                .find(|i| i.email().eq_ignore_ascii_case(email))
                .cloned())
        }

        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Identity>> {
            Ok(self.records.lock().unwrap().get(&id).cloned())
        }

        async fn store_refresh_token(&self, id: Uuid, token: Option<&str>) -> AppResult<()> {
            let mut records = self.records.lock().unwrap();
            if let Some(identity) = records.get_mut(&id) {
                let slot = match identity {
                    Identity::Admin(a) => &mut a.refresh_token,
                    Identity::Supervisor(s) => &mut s.refresh_token,
                    Identity::Student(s) => &mut s.refresh_token,
                };
                *slot = token.map(String::from);
            }
            Ok(())
        }
    }

    fn manager_with_stores() -> (SessionManager, Arc<MemoryStore>, Arc<MemoryStore>) {
        let config = AuthConfig {
            access_token_secret: "access-test-secret".to_string(),
            access_token_ttl_minutes: 15,
            refresh_token_secret: "refresh-test-secret".to_string(),
            refresh_token_ttl_days: 10,
        };

        let admins = Arc::new(MemoryStore::default());
        let supervisors = Arc::new(MemoryStore::default());
        let students = Arc::new(MemoryStore::default());

        let directory = Arc::new(RoleDirectory::new(
            admins,
            Arc::clone(&supervisors) as Arc<dyn IdentityStore>,
            Arc::clone(&students) as Arc<dyn IdentityStore>,
        ));

        let manager = SessionManager::new(
            Arc::new(TokenIssuer::new(&config)),
            directory,
            Arc::new(PasswordHasher::new()),
        );

        (manager, supervisors, students)
    }

    fn seeded_student(hasher: &PasswordHasher, email: &str, password: &str) -> Student {
        Student {
            id: Uuid::new_v4(),
            name: "Ali".to_string(),
            email: email.to_string(),
            roll_number: "FA21-001".to_string(),
            password_hash: hasher.hash_password(password).unwrap(),
            refresh_token: None,
            added_by: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_login_persists_new_refresh_token() {
        let (manager, _, students) = manager_with_stores();
        let hasher = PasswordHasher::new();
        let mut student = seeded_student(&hasher, "a@b.com", "pw123");
        student.refresh_token = Some("stale-token".to_string());
        let id = student.id;
        students.insert(Identity::Student(student));

        let result = manager.login(Role::Student, "a@b.com", "pw123").await.unwrap();

        let stored = students.refresh_token_of(id).unwrap();
        assert_eq!(stored, result.tokens.refresh_token);
        assert_ne!(stored, "stale-token");

        let profile = result.profile.as_student().unwrap();
        assert_eq!(profile.email, "a@b.com");
    }

    #[tokio::test]
    async fn test_login_wrong_password_leaves_no_state() {
        let (manager, _, students) = manager_with_stores();
        let hasher = PasswordHasher::new();
        let student = seeded_student(&hasher, "a@b.com", "pw123");
        let id = student.id;
        students.insert(Identity::Student(student));

        let err = manager
            .login(Role::Student, "a@b.com", "nope")
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Unauthorized);
        assert_eq!(err.message, "Invalid credentials");
        assert!(students.refresh_token_of(id).is_none());
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_role_specific() {
        let (manager, _, _) = manager_with_stores();

        let err = manager
            .login(Role::Supervisor, "nobody@fyp.com", "pw123")
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, "Supervisor not found. Please contact admin");

        let err = manager
            .login(Role::Admin, "nobody@fyp.com", "pw123")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
        assert_eq!(err.message, "Invalid admin credentials");
    }

    #[tokio::test]
    async fn test_login_empty_fields_rejected() {
        let (manager, _, _) = manager_with_stores();

        let err = manager.login(Role::Student, "  ", "pw").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Email and password are required");
    }

    #[tokio::test]
    async fn test_logout_clears_and_is_idempotent() {
        let (manager, supervisors, _) = manager_with_stores();
        let hasher = PasswordHasher::new();
        let supervisor = Supervisor {
            id: Uuid::new_v4(),
            name: "Dr. Khan".to_string(),
            email: "khan@fyp.com".to_string(),
            password_hash: hasher.hash_password("pw123").unwrap(),
            refresh_token: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let id = supervisor.id;
        supervisors.insert(Identity::Supervisor(supervisor));

        manager
            .login(Role::Supervisor, "khan@fyp.com", "pw123")
            .await
            .unwrap();
        assert!(supervisors.refresh_token_of(id).is_some());

        manager.logout(Role::Supervisor, id).await.unwrap();
        assert!(supervisors.refresh_token_of(id).is_none());

        // Clearing an already-absent token is not an error.
        manager.logout(Role::Supervisor, id).await.unwrap();
    }
}
