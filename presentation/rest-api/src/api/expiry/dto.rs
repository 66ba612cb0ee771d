use chrono::{DateTime, NaiveDate, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::expiry::calendar::ExpiryCalendarDay;
use business::domain::expiry::model::{ExpiryEstimate, PantryItem};
use business::domain::expiry::urgency::UrgencyTier;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Enum)]
pub enum UrgencyTierDto {
    #[oai(rename = "critical")]
    Critical,
    #[oai(rename = "urgent")]
    Urgent,
    #[oai(rename = "soon")]
    Soon,
    #[oai(rename = "moderate")]
    Moderate,
    #[oai(rename = "low")]
    Low,
    #[oai(rename = "minimal")]
    Minimal,
    #[oai(rename = "none")]
    None,
}

impl From<UrgencyTier> for UrgencyTierDto {
    fn from(tier: UrgencyTier) -> Self {
        match tier {
            UrgencyTier::Critical => UrgencyTierDto::Critical,
            UrgencyTier::Urgent => UrgencyTierDto::Urgent,
            UrgencyTier::Soon => UrgencyTierDto::Soon,
            UrgencyTier::Moderate => UrgencyTierDto::Moderate,
            UrgencyTier::Low => UrgencyTierDto::Low,
            UrgencyTier::Minimal => UrgencyTierDto::Minimal,
            UrgencyTier::None => UrgencyTierDto::None,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PantryItemRequest {
    /// Item name, matched case-insensitively against the shelf-life table
    pub name: String,
    /// When the item was bought
    pub purchase_date: DateTime<Utc>,
}

impl From<PantryItemRequest> for PantryItem {
    fn from(request: PantryItemRequest) -> Self {
        PantryItem::new(request.name, request.purchase_date)
    }
}

#[derive(Debug, Clone, Object)]
pub struct ExpiringSoonRequest {
    /// Items currently held
    #[oai(default)]
    pub items: Vec<PantryItemRequest>,
    /// Remaining-days cutoff (default from server configuration)
    #[oai(skip_serializing_if_is_none)]
    pub threshold_days: Option<f64>,
}

#[derive(Debug, Clone, Object)]
pub struct ExpiryCalendarRequest {
    /// Items currently held
    #[oai(default)]
    pub items: Vec<PantryItemRequest>,
}

#[derive(Debug, Clone, Object)]
pub struct ExpiryEstimateResponse {
    /// Canonical item name from the shelf-life table
    pub name: String,
    /// Human-readable shelf-life range
    pub expiry_label: String,
    /// Baseline shelf life in days
    pub expiry_days: u32,
    /// When the item was bought
    #[oai(skip_serializing_if_is_none)]
    pub purchase_date: Option<DateTime<Utc>>,
    /// Days left before spoilage, never negative
    #[oai(skip_serializing_if_is_none)]
    pub remaining_expiry_days: Option<f64>,
    /// Urgency tier derived from the remaining days
    #[oai(skip_serializing_if_is_none)]
    pub urgency: Option<UrgencyTierDto>,
    /// Hex color for the urgency tier
    #[oai(skip_serializing_if_is_none)]
    pub color: Option<String>,
    /// Purchase date plus baseline shelf life
    #[oai(skip_serializing_if_is_none)]
    pub expected_expiration_date: Option<DateTime<Utc>>,
}

impl From<ExpiryEstimate> for ExpiryEstimateResponse {
    fn from(estimate: ExpiryEstimate) -> Self {
        let tier = estimate.urgency_tier();
        let expected_expiration_date = estimate.expected_expiration_date();
        Self {
            name: estimate.name,
            expiry_label: estimate.expiry_label,
            expiry_days: estimate.expiry_days,
            purchase_date: estimate.purchase_date,
            remaining_expiry_days: estimate.remaining_expiry_days,
            urgency: tier.map(|t| t.into()),
            color: tier.map(|t| t.color().to_string()),
            expected_expiration_date,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ExpiryCalendarDayResponse {
    /// Calendar day (UTC)
    pub date: NaiveDate,
    /// Items expected to spoil on that day
    pub items: Vec<ExpiryEstimateResponse>,
}

impl From<ExpiryCalendarDay> for ExpiryCalendarDayResponse {
    fn from(day: ExpiryCalendarDay) -> Self {
        Self {
            date: day.date,
            items: day.items.into_iter().map(|e| e.into()).collect(),
        }
    }
}
