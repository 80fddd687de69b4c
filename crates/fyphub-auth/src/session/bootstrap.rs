//! One-time default admin provisioning.

use tracing::info;

use fyphub_core::config::BootstrapConfig;
use fyphub_core::result::AppResult;
use fyphub_database::repositories::AdminRepository;

use crate::password::PasswordHasher;

/// Creates the default admin account if the configured email is absent.
///
/// The caller decides what to do with a failure; at startup it is logged
/// and ignored, since a missing default admin is recoverable through the
/// normal admin-creation flow.
pub async fn ensure_default_admin(
    repo: &AdminRepository,
    hasher: &PasswordHasher,
    config: &BootstrapConfig,
) -> AppResult<()> {
    if repo.find_by_email(&config.admin_email).await?.is_some() {
        return Ok(());
    }

    let password_hash = hasher.hash_password(&config.admin_password)?;
    let admin = repo.create(&config.admin_email, &password_hash).await?;

    info!(admin_id = %admin.id, email = %admin.email, "Default admin created");
    Ok(())
}
