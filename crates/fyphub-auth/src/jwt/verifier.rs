//! Stateless JWT access token verification.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use fyphub_core::config::AuthConfig;
use fyphub_core::error::AppError;

use super::claims::AccessClaims;

/// Validates access tokens against the access-token secret.
///
/// Verification is a pure computation: signature, expiry, and claim shape
/// are checked without touching the store.
#[derive(Clone)]
pub struct TokenVerifier {
    /// HMAC secret key for access token verification.
    access_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenVerifier {
    /// Creates a new verifier from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            access_key: DecodingKey::from_secret(config.access_token_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    ///
    /// Checks:
    /// 1. Signature validity
    /// 2. Expiration
    /// 3. Required claims (`sub`, `email`, `role`) are present
    pub fn verify_access_token(&self, token: &str) -> Result<AccessClaims, AppError> {
        let token_data = decode::<AccessClaims>(token, &self.access_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::unauthorized("Token has expired")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::unauthorized("Invalid token signature")
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::unauthorized("Invalid token format")
                }
                jsonwebtoken::errors::ErrorKind::Json(_)
                | jsonwebtoken::errors::ErrorKind::MissingRequiredClaim(_) => {
                    AppError::unauthorized("Invalid token payload")
                }
                _ => AppError::unauthorized(format!("Token validation failed: {e}")),
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::issuer::TokenIssuer;
    use chrono::Utc;
    use fyphub_core::config::AuthConfig;
    use fyphub_entity::user::{Identity, Role, Supervisor};
    use uuid::Uuid;

    fn test_config() -> AuthConfig {
        AuthConfig {
            access_token_secret: "access-test-secret".to_string(),
            access_token_ttl_minutes: 15,
            refresh_token_secret: "refresh-test-secret".to_string(),
            refresh_token_ttl_days: 10,
        }
    }

    fn test_identity() -> Identity {
        Identity::Supervisor(Supervisor {
            id: Uuid::new_v4(),
            name: "Dr. Khan".to_string(),
            email: "khan@fyp.com".to_string(),
            password_hash: "hash".to_string(),
            refresh_token: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    }

    #[test]
    fn test_round_trip_recovers_id_and_role() {
        let config = test_config();
        let issuer = TokenIssuer::new(&config);
        let verifier = TokenVerifier::new(&config);
        let identity = test_identity();

        let (token, _) = issuer.issue_access_token(&identity).unwrap();
        let claims = verifier.verify_access_token(&token).unwrap();

        assert_eq!(claims.sub, identity.id());
        assert_eq!(claims.role, Role::Supervisor);
        assert_eq!(claims.email, identity.email());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = TokenIssuer::new(&test_config());
        let mut other = test_config();
        other.access_token_secret = "a-different-secret".to_string();
        let verifier = TokenVerifier::new(&other);

        let (token, _) = issuer.issue_access_token(&test_identity()).unwrap();
        let err = verifier.verify_access_token(&token).unwrap_err();
        assert_eq!(err.message, "Invalid token signature");
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = test_config();
        let verifier = TokenVerifier::new(&config);

        let claims = AccessClaims {
            sub: Uuid::new_v4(),
            email: "a@b.com".to_string(),
            role: Role::Student,
            iat: Utc::now().timestamp() - 3600,
            exp: Utc::now().timestamp() - 1800,
        };
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(config.access_token_secret.as_bytes()),
        )
        .unwrap();

        let err = verifier.verify_access_token(&token).unwrap_err();
        assert_eq!(err.message, "Token has expired");
    }

    #[test]
    fn test_missing_claims_rejected() {
        let config = test_config();
        let verifier = TokenVerifier::new(&config);

        // A payload without email/role claims must not pass as an access
        // token even when signed with the right secret.
        #[derive(serde::Serialize)]
        struct Partial {
            sub: Uuid,
            exp: i64,
        }
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &Partial {
                sub: Uuid::new_v4(),
                exp: Utc::now().timestamp() + 600,
            },
            &jsonwebtoken::EncodingKey::from_secret(config.access_token_secret.as_bytes()),
        )
        .unwrap();

        let err = verifier.verify_access_token(&token).unwrap_err();
        assert_eq!(err.message, "Invalid token payload");
    }

    #[test]
    fn test_refresh_token_not_accepted_as_access() {
        let config = test_config();
        let issuer = TokenIssuer::new(&config);
        let verifier = TokenVerifier::new(&config);

        let (refresh, _) = issuer.issue_refresh_token(&test_identity()).unwrap();
        assert!(verifier.verify_access_token(&refresh).is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        let verifier = TokenVerifier::new(&test_config());
        assert!(verifier.verify_access_token("not-a-jwt").is_err());
    }
}
