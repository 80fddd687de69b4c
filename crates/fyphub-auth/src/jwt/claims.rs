//! JWT claims structures for access and refresh tokens.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fyphub_entity::user::Role;

/// Claims payload embedded in every access token.
///
/// Carrying the role lets the authorization gate decide coarse-grained
/// access without a store lookup; roles are immutable, so the claim can
/// never go stale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject — the identity's ID.
    pub sub: Uuid,
    /// Login email at the time of issuance.
    pub email: String,
    /// Role partition the identity belongs to.
    pub role: Role,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// Claims payload embedded in every refresh token. Identity only; the
/// renewal flow re-resolves everything else from the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Subject — the identity's ID.
    pub sub: Uuid,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl AccessClaims {
    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_check() {
        let claims = AccessClaims {
            sub: Uuid::new_v4(),
            email: "a@b.com".to_string(),
            role: Role::Student,
            iat: Utc::now().timestamp() - 120,
            exp: Utc::now().timestamp() - 60,
        };
        assert!(claims.is_expired());
    }
}
