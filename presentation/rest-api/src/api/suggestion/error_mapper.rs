use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::grocery_list::errors::GroceryListError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for GroceryListError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = match &self {
            GroceryListError::TextEmpty => "grocery_list.text_empty",
            GroceryListError::IdEmpty => "grocery_list.id_empty",
        };

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("ValidationError", message)),
        )
    }
}
