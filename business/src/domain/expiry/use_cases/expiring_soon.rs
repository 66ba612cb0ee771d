use crate::domain::expiry::errors::ExpiryError;
use crate::domain::expiry::model::{ExpiryEstimate, PantryItem};

pub struct GetExpiringSoonParams {
    pub items: Vec<PantryItem>,
    pub threshold_days: f64,
}

pub trait GetExpiringSoonUseCase: Send + Sync {
    fn execute(&self, params: GetExpiringSoonParams) -> Result<Vec<ExpiryEstimate>, ExpiryError>;
}
