use poem_openapi::Object;

use business::domain::expiry::urgency::UrgencyTier;

use crate::api::expiry::dto::UrgencyTierDto;

#[derive(Debug, Clone, Object)]
pub struct UrgencyResponse {
    /// Remaining days that were classified
    pub remaining_days: f64,
    /// Urgency tier
    pub tier: UrgencyTierDto,
    /// Hex color for the tier
    pub color: String,
    /// 6 for the most urgent tier down to 0
    pub severity: u8,
}

impl UrgencyResponse {
    pub fn new(remaining_days: f64, tier: UrgencyTier) -> Self {
        Self {
            remaining_days,
            tier: tier.into(),
            color: tier.color().to_string(),
            severity: tier.severity(),
        }
    }
}
