use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::expiry::errors::UrgencyError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for UrgencyError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            UrgencyError::InvalidRemainingDays => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(
                    "ValidationError",
                    "urgency.invalid_remaining_days",
                )),
            ),
        }
    }
}
