use chrono::{DateTime, Utc};

use crate::domain::expiry::errors::ExpiryError;
use crate::domain::expiry::model::ExpiryEstimate;

pub struct EstimateExpiryParams {
    pub name: String,
    pub purchase_date: DateTime<Utc>,
}

pub trait EstimateExpiryUseCase: Send + Sync {
    fn execute(&self, params: EstimateExpiryParams) -> Result<ExpiryEstimate, ExpiryError>;
}
