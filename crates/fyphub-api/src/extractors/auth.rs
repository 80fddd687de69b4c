//! `AuthUser` extractor — the authorization gate.
//!
//! Pulls the access token from the `accessToken` cookie or the
//! `Authorization` header, verifies it statelessly, resolves the live
//! identity from the token's role partition, and injects the request
//! context. Role enforcement is layered on top by the gates in
//! [`crate::middleware::rbac`].

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use fyphub_core::error::AppError;
use fyphub_entity::user::{Profile, Role};

use crate::cookies::ACCESS_TOKEN_COOKIE;
use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated identity available to handlers.
///
/// Secret fields never reach this context; only the public projection is
/// carried.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Identity ID.
    pub id: Uuid,
    /// Login email.
    pub email: String,
    /// Role partition.
    pub role: Role,
    /// Public projection of the resolved identity.
    pub profile: Profile,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Prefer the cookie-carried token, fall back to a bearer header.
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(ACCESS_TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .or_else(|| {
                parts
                    .headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.strip_prefix("Bearer "))
                    .map(String::from)
            })
            .ok_or_else(|| AppError::unauthorized("Unauthorized Access!"))?;

        let claims = state.token_verifier.verify_access_token(&token)?;

        // Resolve the live identity; a record deleted after issuance must
        // not pass the gate even though the token still verifies.
        let identity = state
            .directory
            .partition(claims.role)
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| AppError::unauthorized("User not found"))?;

        Ok(AuthUser {
            id: identity.id(),
            email: identity.email().to_string(),
            role: identity.role(),
            profile: identity.profile(),
        })
    }
}
