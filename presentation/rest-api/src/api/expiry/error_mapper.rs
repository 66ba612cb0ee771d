use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::expiry::errors::ExpiryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ExpiryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ExpiryError::UnknownItem => (StatusCode::NOT_FOUND, "NotFound", "expiry.unknown_item"),
            ExpiryError::InvalidThreshold => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "expiry.invalid_threshold",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
