//! Integration tests for the login/logout flows.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_student_login_sets_cookies_and_stores_refresh_token() {
    let app = helpers::TestApp::new();
    let student = app.seed_student("Ali", "a@b.com", "pw123");

    let response = app
        .request(
            "POST",
            "/api/v1/student/login-student",
            Some(serde_json::json!({ "email": "a@b.com", "password": "pw123" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["statusCode"], 200);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["message"], "Student logged in successfully");
    assert_eq!(response.body["data"]["student"]["email"], "a@b.com");
    assert_eq!(response.body["data"]["student"]["role"], "student");
    assert!(response.body["data"]["student"].get("passwordHash").is_none());

    let access_token = response.body["data"]["accessToken"].as_str().unwrap();
    let refresh_token = response.body["data"]["refreshToken"].as_str().unwrap();
    assert!(!access_token.is_empty());

    // Both cookies are set, HTTP-only.
    let cookies = response.set_cookies();
    assert!(cookies
        .iter()
        .any(|c| c.starts_with("accessToken=") && c.contains("HttpOnly")));
    assert!(cookies
        .iter()
        .any(|c| c.starts_with("refreshToken=") && c.contains("HttpOnly")));

    // The stored refresh token matches the issued one.
    let stored = app.students.refresh_token_of(student.id).unwrap();
    assert_eq!(stored, refresh_token);
}

#[tokio::test]
async fn test_login_replaces_previous_refresh_token() {
    let app = helpers::TestApp::new();
    let student = app.seed_student("Ali", "a@b.com", "pw123");

    app.students
        .store_refresh_token_sync(student.id, "stale-token");

    let body = app
        .login("/api/v1/student/login-student", "a@b.com", "pw123")
        .await;

    let stored = app.students.refresh_token_of(student.id).unwrap();
    assert_ne!(stored, "stale-token");
    assert_eq!(stored, body["data"]["refreshToken"].as_str().unwrap());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = helpers::TestApp::new();
    let student = app.seed_student("Ali", "a@b.com", "pw123");

    let response = app
        .request(
            "POST",
            "/api/v1/student/login-student",
            Some(serde_json::json!({ "email": "a@b.com", "password": "wrong" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid credentials");
    assert_eq!(response.body["success"], false);

    // A failed login never writes a refresh token.
    assert!(app.students.refresh_token_of(student.id).is_none());
}

#[tokio::test]
async fn test_login_unknown_identity_is_role_specific() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/supervisor/login-supervisor",
            Some(serde_json::json!({ "email": "nobody@fyp.com", "password": "pw" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body["message"],
        "Supervisor not found. Please contact admin"
    );

    // Admin lookups never reveal whether the email exists.
    let response = app
        .request(
            "POST",
            "/api/v1/admin/login-admin",
            Some(serde_json::json!({ "email": "nobody@fyp.com", "password": "pw" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid admin credentials");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/student/login-student",
            Some(serde_json::json!({ "email": "  ", "password": "" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Email and password are required");
}

#[tokio::test]
async fn test_logout_clears_refresh_token_and_cookies() {
    let app = helpers::TestApp::new();
    let supervisor = app.seed_supervisor("Dr. Khan", "khan@fyp.com", "pw123");

    let body = app
        .login("/api/v1/supervisor/login-supervisor", "khan@fyp.com", "pw123")
        .await;
    let token = body["data"]["accessToken"].as_str().unwrap().to_string();

    assert!(app.supervisors.refresh_token_of(supervisor.id).is_some());

    let response = app
        .request("POST", "/api/v1/supervisor/logout-supervisor", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["message"],
        "Supervisor logged out successfully"
    );

    // Stored token cleared, and the cookies are emptied in the same
    // response.
    assert!(app.supervisors.refresh_token_of(supervisor.id).is_none());
    let cookies = response.set_cookies();
    assert!(cookies.iter().any(|c| {
        c.starts_with("accessToken=") && (c.contains("Max-Age=0") || c.contains("Expires="))
    }));
    assert!(cookies.iter().any(|c| c.starts_with("refreshToken=")));

    // A second logout without credentials fails at the gate.
    let response = app
        .request("POST", "/api/v1/supervisor/logout-supervisor", None, None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Unauthorized Access!");
}

#[tokio::test]
async fn test_access_token_remains_valid_after_logout() {
    // The access token is verified statelessly, so within its lifetime it
    // still passes the gate after logout; only the refresh token is
    // revoked. This is the documented trade-off of stateless
    // verification.
    let app = helpers::TestApp::new();
    app.seed_student("Ali", "a@b.com", "pw123");

    let body = app
        .login("/api/v1/student/login-student", "a@b.com", "pw123")
        .await;
    let token = body["data"]["accessToken"].as_str().unwrap().to_string();

    let response = app
        .request("POST", "/api/v1/student/student-logout", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("POST", "/api/v1/student/student-logout", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_admin_login_success() {
    let app = helpers::TestApp::new();
    app.seed_admin("admin@fyp.com", "admin123");

    let body = app
        .login("/api/v1/admin/login-admin", "admin@fyp.com", "admin123")
        .await;

    assert_eq!(body["message"], "Admin logged in successfully");
    assert_eq!(body["data"]["admin"]["email"], "admin@fyp.com");
    assert!(body["data"]["accessToken"].as_str().is_some());
}
