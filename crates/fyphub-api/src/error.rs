//! Maps domain `AppError` to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use fyphub_core::error::{AppError, ErrorKind};

/// HTTP-boundary wrapper around [`AppError`].
///
/// Handlers and extractors return this so the domain error type stays
/// free of HTTP concerns; `?` lifts any `AppError` into it.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Standard API error response body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponse {
    /// HTTP status code, mirrored into the body.
    pub status_code: u16,
    /// Human-readable message.
    pub message: String,
    /// Always `false` for errors.
    pub success: bool,
    /// Always null for errors.
    pub data: Option<()>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Database | ErrorKind::Configuration | ErrorKind::Internal => {
                tracing::error!(error = %self.0, "Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ApiErrorResponse {
            status_code: status.as_u16(),
            message: self.0.message,
            success: false,
            data: None,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_maps_to_403() {
        let response =
            ApiError(AppError::forbidden("Forbidden: Admin access required")).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_error_body_shape() {
        let body = ApiErrorResponse {
            status_code: 401,
            message: "Unauthorized Access!".to_string(),
            success: false,
            data: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["statusCode"], 401);
        assert_eq!(json["success"], false);
        assert!(json["data"].is_null());
    }
}
