//! Request and response DTOs.

pub mod request;
pub mod response;

use validator::Validate;

use fyphub_core::error::AppError;

/// Runs derive-based validation and collapses any failure into a single
/// validation error carrying the first field message.
pub fn validate_request<T: Validate>(req: &T) -> Result<(), AppError> {
    req.validate().map_err(|errors| {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|field| field.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());
        AppError::validation(message)
    })
}
