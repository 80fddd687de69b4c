//! Auth cookie issuance and clearing.
//!
//! Both tokens travel as HTTP-only cookies with a cross-site policy so
//! the browser frontend on another origin can send them; the `Secure`
//! attribute is driven by configuration and must be on in production.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use fyphub_auth::jwt::issuer::TokenPair;

/// Cookie carrying the access token.
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
/// Cookie carrying the refresh token.
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

/// Adds both auth cookies to the jar.
pub fn with_auth_cookies(jar: CookieJar, tokens: &TokenPair, secure: bool) -> CookieJar {
    jar.add(build_cookie(
        ACCESS_TOKEN_COOKIE,
        tokens.access_token.clone(),
        secure,
    ))
    .add(build_cookie(
        REFRESH_TOKEN_COOKIE,
        tokens.refresh_token.clone(),
        secure,
    ))
}

/// Removes both auth cookies from the jar.
pub fn without_auth_cookies(jar: CookieJar, secure: bool) -> CookieJar {
    jar.remove(build_cookie(ACCESS_TOKEN_COOKIE, String::new(), secure))
        .remove(build_cookie(REFRESH_TOKEN_COOKIE, String::new(), secure))
}

fn build_cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::None)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_attributes() {
        let cookie = build_cookie(ACCESS_TOKEN_COOKIE, "token".to_string(), true);
        let rendered = cookie.to_string();

        assert!(rendered.starts_with("accessToken=token"));
        assert!(rendered.contains("HttpOnly"));
        assert!(rendered.contains("Secure"));
        assert!(rendered.contains("SameSite=None"));
        assert!(rendered.contains("Path=/"));
    }

    #[test]
    fn test_insecure_cookie_for_local_development() {
        let cookie = build_cookie(REFRESH_TOKEN_COOKIE, "token".to_string(), false);
        assert!(!cookie.to_string().contains("Secure"));
    }
}
