use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::expiry::urgency::UrgencyTier;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::urgency::dto::UrgencyResponse;

/// Urgency classification API
pub struct UrgencyApi;

#[OpenApi]
impl UrgencyApi {
    /// Classify remaining days
    ///
    /// Maps a remaining-days value onto its urgency tier and color. Values
    /// sitting exactly on a tier bound resolve to the more urgent tier.
    #[oai(path = "/urgency", method = "get", tag = "ApiTags::Urgency")]
    async fn classify(
        &self,
        /// Days of shelf life left (finite, not negative)
        remaining_days: Query<f64>,
    ) -> ClassifyUrgencyResponse {
        match UrgencyTier::try_from_remaining_days(remaining_days.0) {
            Ok(tier) => {
                ClassifyUrgencyResponse::Ok(Json(UrgencyResponse::new(remaining_days.0, tier)))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                ClassifyUrgencyResponse::BadRequest(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClassifyUrgencyResponse {
    #[oai(status = 200)]
    Ok(Json<UrgencyResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}
