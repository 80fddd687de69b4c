//! Default admin provisioning configuration.

use serde::{Deserialize, Serialize};

/// Settings for the one-time admin bootstrap performed at startup.
///
/// If no admin exists with the configured email, one is created with the
/// configured password. A bootstrap failure is logged but never aborts
/// startup; a missing default admin is recoverable through the normal
/// admin-creation flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Email of the default admin account.
    #[serde(default = "default_admin_email")]
    pub admin_email: String,
    /// Initial password of the default admin account.
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            admin_email: default_admin_email(),
            admin_password: default_admin_password(),
        }
    }
}

fn default_admin_email() -> String {
    "admin@fyp.com".to_string()
}

fn default_admin_password() -> String {
    "admin123".to_string()
}
