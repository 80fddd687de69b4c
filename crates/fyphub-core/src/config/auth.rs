//! Token and credential configuration.

use serde::{Deserialize, Serialize};

/// Authentication configuration.
///
/// Access and refresh tokens are signed with two independent HMAC-SHA256
/// secrets so the short-lived bearer credential and the long-lived renewal
/// credential can be rotated separately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for access token signing.
    #[serde(default = "default_access_secret")]
    pub access_token_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_token_ttl_minutes: u64,
    /// Secret key for refresh token signing.
    #[serde(default = "default_refresh_secret")]
    pub refresh_token_secret: String,
    /// Refresh token TTL in days.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_token_ttl_days: u64,
}

fn default_access_secret() -> String {
    "CHANGE_ME_ACCESS_SECRET".to_string()
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_secret() -> String {
    "CHANGE_ME_REFRESH_SECRET".to_string()
}

fn default_refresh_ttl() -> u64 {
    10
}
