use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::shelf_life::use_cases::list::ListShelfLifeUseCase;
use business::domain::shelf_life::use_cases::lookup::{
    LookupShelfLifeParams, LookupShelfLifeUseCase,
};

use crate::api::error::ErrorResponse;
use crate::api::shelf_life::dto::ShelfLifeEntryResponse;
use crate::api::tags::ApiTags;

pub struct ShelfLifeApi {
    list_use_case: Arc<dyn ListShelfLifeUseCase>,
    lookup_use_case: Arc<dyn LookupShelfLifeUseCase>,
}

impl ShelfLifeApi {
    pub fn new(
        list_use_case: Arc<dyn ListShelfLifeUseCase>,
        lookup_use_case: Arc<dyn LookupShelfLifeUseCase>,
    ) -> Self {
        Self {
            list_use_case,
            lookup_use_case,
        }
    }
}

/// Shelf-life reference API
///
/// Read-only access to the built-in shelf-life table.
#[OpenApi]
impl ShelfLifeApi {
    /// List the shelf-life table
    ///
    /// Returns every entry in suggestion order.
    #[oai(path = "/shelf-life", method = "get", tag = "ApiTags::ShelfLife")]
    async fn list(&self) -> Json<Vec<ShelfLifeEntryResponse>> {
        Json(
            self.list_use_case
                .execute()
                .into_iter()
                .map(|e| e.into())
                .collect(),
        )
    }

    /// Look up one item
    ///
    /// Case-insensitive exact match on the item name; partial names do not
    /// match.
    #[oai(path = "/shelf-life/:name", method = "get", tag = "ApiTags::ShelfLife")]
    async fn lookup(&self, name: Path<String>) -> LookupShelfLifeResponse {
        match self
            .lookup_use_case
            .execute(LookupShelfLifeParams { name: name.0 })
        {
            Some(entry) => LookupShelfLifeResponse::Ok(Json(entry.into())),
            None => LookupShelfLifeResponse::NotFound(Json(ErrorResponse::new(
                "NotFound",
                "shelf_life.not_found",
            ))),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum LookupShelfLifeResponse {
    #[oai(status = 200)]
    Ok(Json<ShelfLifeEntryResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}
