use serde::{Deserialize, Serialize};

use super::errors::UrgencyError;

/// Severity tiers for remaining shelf life, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyTier {
    /// 2 days or less.
    Critical,
    /// 5 days or less.
    Urgent,
    /// 7 days or less.
    Soon,
    /// 14 days or less.
    Moderate,
    /// 30 days or less.
    Low,
    /// 90 days or less.
    Minimal,
    /// More than 90 days.
    None,
}

/// Upper bounds (inclusive) of each tier, checked in ascending order.
const TIER_BOUNDS: [(f64, UrgencyTier); 6] = [
    (2.0, UrgencyTier::Critical),
    (5.0, UrgencyTier::Urgent),
    (7.0, UrgencyTier::Soon),
    (14.0, UrgencyTier::Moderate),
    (30.0, UrgencyTier::Low),
    (90.0, UrgencyTier::Minimal),
];

impl UrgencyTier {
    /// Classifies a remaining-days value. Ties at a bound resolve to the
    /// more urgent tier.
    pub fn from_remaining_days(remaining_days: f64) -> Self {
        for (bound, tier) in TIER_BOUNDS {
            if remaining_days <= bound {
                return tier;
            }
        }
        UrgencyTier::None
    }

    /// Checked variant for untrusted input: rejects negative and non-finite
    /// values instead of classifying them.
    pub fn try_from_remaining_days(remaining_days: f64) -> Result<Self, UrgencyError> {
        if !remaining_days.is_finite() || remaining_days < 0.0 {
            return Err(UrgencyError::InvalidRemainingDays);
        }
        Ok(Self::from_remaining_days(remaining_days))
    }

    /// Hex color used by clients to render the tier.
    pub fn color(&self) -> &'static str {
        match self {
            UrgencyTier::Critical => "#D32F2F",
            UrgencyTier::Urgent => "#F4511E",
            UrgencyTier::Soon => "#FB8C00",
            UrgencyTier::Moderate => "#FDD835",
            UrgencyTier::Low => "#C0CA33",
            UrgencyTier::Minimal => "#7CB342",
            UrgencyTier::None => "#43A047",
        }
    }

    /// 6 for the most urgent tier down to 0 for no urgency.
    pub fn severity(&self) -> u8 {
        match self {
            UrgencyTier::Critical => 6,
            UrgencyTier::Urgent => 5,
            UrgencyTier::Soon => 4,
            UrgencyTier::Moderate => 3,
            UrgencyTier::Low => 2,
            UrgencyTier::Minimal => 1,
            UrgencyTier::None => 0,
        }
    }
}

impl std::fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrgencyTier::Critical => write!(f, "critical"),
            UrgencyTier::Urgent => write!(f, "urgent"),
            UrgencyTier::Soon => write!(f, "soon"),
            UrgencyTier::Moderate => write!(f, "moderate"),
            UrgencyTier::Low => write!(f, "low"),
            UrgencyTier::Minimal => write!(f, "minimal"),
            UrgencyTier::None => write!(f, "none"),
        }
    }
}
