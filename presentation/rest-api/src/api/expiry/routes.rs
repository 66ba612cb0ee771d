use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::expiry::errors::ExpiryError;
use business::domain::expiry::use_cases::calendar::{
    GetExpiryCalendarParams, GetExpiryCalendarUseCase,
};
use business::domain::expiry::use_cases::estimate::{EstimateExpiryParams, EstimateExpiryUseCase};
use business::domain::expiry::use_cases::expiring_soon::{
    GetExpiringSoonParams, GetExpiringSoonUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::expiry::dto::{
    ExpiringSoonRequest, ExpiryCalendarDayResponse, ExpiryCalendarRequest, ExpiryEstimateResponse,
    PantryItemRequest,
};
use crate::api::tags::ApiTags;

pub struct ExpiryApi {
    estimate_use_case: Arc<dyn EstimateExpiryUseCase>,
    expiring_soon_use_case: Arc<dyn GetExpiringSoonUseCase>,
    calendar_use_case: Arc<dyn GetExpiryCalendarUseCase>,
    default_threshold_days: f64,
}

impl ExpiryApi {
    pub fn new(
        estimate_use_case: Arc<dyn EstimateExpiryUseCase>,
        expiring_soon_use_case: Arc<dyn GetExpiringSoonUseCase>,
        calendar_use_case: Arc<dyn GetExpiryCalendarUseCase>,
        default_threshold_days: f64,
    ) -> Self {
        Self {
            estimate_use_case,
            expiring_soon_use_case,
            calendar_use_case,
            default_threshold_days,
        }
    }
}

/// Expiry API
///
/// Remaining shelf life, "expiring soon" list and expiry calendar for
/// pantry items supplied by the client.
#[OpenApi]
impl ExpiryApi {
    /// Estimate remaining shelf life
    ///
    /// Looks the item up in the shelf-life table and computes the days left
    /// since its purchase date, clamped at zero.
    #[oai(path = "/expiry/estimate", method = "post", tag = "ApiTags::Expiry")]
    async fn estimate(&self, body: Json<PantryItemRequest>) -> EstimateExpiryResponse {
        let params = EstimateExpiryParams {
            name: body.0.name,
            purchase_date: body.0.purchase_date,
        };

        match self.estimate_use_case.execute(params) {
            Ok(estimate) => EstimateExpiryResponse::Ok(Json(estimate.into())),
            Err(err @ ExpiryError::UnknownItem) => {
                EstimateExpiryResponse::NotFound(err.into_error_response().1)
            }
            Err(err) => EstimateExpiryResponse::BadRequest(err.into_error_response().1),
        }
    }

    /// List items expiring soon
    ///
    /// Returns the items with at most `threshold_days` left, most urgent
    /// first. Items missing from the shelf-life table are left out.
    #[oai(path = "/expiry/expiring-soon", method = "post", tag = "ApiTags::Expiry")]
    async fn expiring_soon(&self, body: Json<ExpiringSoonRequest>) -> ExpiringSoonResponse {
        let request = body.0;
        let params = GetExpiringSoonParams {
            items: request.items.into_iter().map(|i| i.into()).collect(),
            threshold_days: request.threshold_days.unwrap_or(self.default_threshold_days),
        };

        match self.expiring_soon_use_case.execute(params) {
            Ok(estimates) => ExpiringSoonResponse::Ok(Json(
                estimates.into_iter().map(|e| e.into()).collect(),
            )),
            Err(err) => {
                let (_, json) = err.into_error_response();
                ExpiringSoonResponse::BadRequest(json)
            }
        }
    }

    /// Expiry calendar
    ///
    /// Groups items by the day they are expected to spoil, earliest first.
    #[oai(path = "/expiry/calendar", method = "post", tag = "ApiTags::Expiry")]
    async fn calendar(
        &self,
        body: Json<ExpiryCalendarRequest>,
    ) -> Json<Vec<ExpiryCalendarDayResponse>> {
        let params = GetExpiryCalendarParams {
            items: body.0.items.into_iter().map(|i| i.into()).collect(),
        };

        Json(
            self.calendar_use_case
                .execute(params)
                .into_iter()
                .map(|day| day.into())
                .collect(),
        )
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum EstimateExpiryResponse {
    #[oai(status = 200)]
    Ok(Json<ExpiryEstimateResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ExpiringSoonResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ExpiryEstimateResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}
