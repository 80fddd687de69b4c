//! JWT token creation with per-token-type signing secrets and TTLs.

use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};

use fyphub_core::config::AuthConfig;
use fyphub_core::error::AppError;
use fyphub_entity::user::Identity;

use super::claims::{AccessClaims, RefreshClaims};

/// Creates signed JWT access and refresh tokens.
///
/// The two token types use independent HMAC secrets and lifetimes so the
/// short-lived bearer credential and the long-lived renewal credential
/// can be rotated separately.
#[derive(Clone)]
pub struct TokenIssuer {
    /// HMAC secret key for access token signing.
    access_key: EncodingKey,
    /// HMAC secret key for refresh token signing.
    refresh_key: EncodingKey,
    /// Access token TTL in minutes.
    access_ttl_minutes: i64,
    /// Refresh token TTL in days.
    refresh_ttl_days: i64,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .field("refresh_ttl_days", &self.refresh_ttl_days)
            .finish()
    }
}

/// Result of a successful token pair generation.
#[derive(Debug, Clone)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Access token expiration timestamp.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration timestamp.
    pub refresh_expires_at: DateTime<Utc>,
}

impl TokenIssuer {
    /// Creates a new issuer from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            access_key: EncodingKey::from_secret(config.access_token_secret.as_bytes()),
            refresh_key: EncodingKey::from_secret(config.refresh_token_secret.as_bytes()),
            access_ttl_minutes: config.access_token_ttl_minutes as i64,
            refresh_ttl_days: config.refresh_token_ttl_days as i64,
        }
    }

    /// Generates an access + refresh token pair for the given identity.
    pub fn issue_pair(&self, identity: &Identity) -> Result<TokenPair, AppError> {
        let (access_token, access_expires_at) = self.issue_access_token(identity)?;
        let (refresh_token, refresh_expires_at) = self.issue_refresh_token(identity)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_expires_at,
            refresh_expires_at,
        })
    }

    /// Generates a standalone access token embedding id, email, and role.
    pub fn issue_access_token(
        &self,
        identity: &Identity,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::minutes(self.access_ttl_minutes);

        let claims = AccessClaims {
            sub: identity.id(),
            email: identity.email().to_string(),
            role: identity.role(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.access_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        Ok((token, exp))
    }

    /// Generates a standalone refresh token embedding the identity only.
    pub fn issue_refresh_token(
        &self,
        identity: &Identity,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::days(self.refresh_ttl_days);

        let claims = RefreshClaims {
            sub: identity.id(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.refresh_key)
            .map_err(|e| AppError::internal(format!("Failed to encode refresh token: {e}")))?;

        Ok((token, exp))
    }
}
