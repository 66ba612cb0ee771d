use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::grocery_list::errors::GroceryListError;
use business::domain::grocery_list::model::GroceryListEntry;
use business::domain::suggestion::use_cases::get::{GetSuggestionsParams, GetSuggestionsUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::shelf_life::dto::ShelfLifeEntryResponse;
use crate::api::suggestion::dto::SuggestionsRequest;
use crate::api::tags::ApiTags;

pub struct SuggestionApi {
    get_use_case: Arc<dyn GetSuggestionsUseCase>,
    default_limit: usize,
}

impl SuggestionApi {
    pub fn new(get_use_case: Arc<dyn GetSuggestionsUseCase>, default_limit: usize) -> Self {
        Self {
            get_use_case,
            default_limit,
        }
    }
}

/// Suggestion API
///
/// Quick-add candidates for the grocery list.
#[OpenApi]
impl SuggestionApi {
    /// Suggest items to add
    ///
    /// Returns shelf-life entries that are not already on the supplied list,
    /// in table order. Completed entries count as listed.
    #[oai(path = "/suggestions", method = "post", tag = "ApiTags::Suggestions")]
    async fn suggest(&self, body: Json<SuggestionsRequest>) -> GetSuggestionsResponse {
        let request = body.0;
        let items: Result<Vec<GroceryListEntry>, GroceryListError> =
            request.items.into_iter().map(GroceryListEntry::try_from).collect();

        let items = match items {
            Ok(items) => items,
            Err(err) => {
                let (_, json) = err.into_error_response();
                return GetSuggestionsResponse::BadRequest(json);
            }
        };

        let limit = request.limit.unwrap_or(self.default_limit);
        let suggestions = self
            .get_use_case
            .execute(GetSuggestionsParams { items, limit });

        GetSuggestionsResponse::Ok(Json(
            suggestions.into_iter().map(|s| s.into()).collect(),
        ))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetSuggestionsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ShelfLifeEntryResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}
