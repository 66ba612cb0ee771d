use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::shelf_life::model::ShelfLifeEntry;

use super::calculator::{expected_expiration_date, remaining_expiry_days};
use super::urgency::UrgencyTier;

/// An item the user holds, with the moment it was acquired.
///
/// `purchase_date` is the only timestamp remaining-life computations start
/// from; expiration timestamps are never used in its place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    pub name: String,
    pub purchase_date: DateTime<Utc>,
}

impl PantryItem {
    pub fn new(name: impl Into<String>, purchase_date: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            purchase_date,
        }
    }
}

/// Shelf-life estimate derived from a table entry, optionally anchored to an
/// acquisition date. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiryEstimate {
    pub name: String,
    pub expiry_label: String,
    pub expiry_days: u32,
    pub purchase_date: Option<DateTime<Utc>>,
    /// Always `>= 0`.
    pub remaining_expiry_days: Option<f64>,
}

impl ExpiryEstimate {
    /// Estimate without an acquisition date.
    pub fn from_entry(entry: &ShelfLifeEntry) -> Self {
        Self {
            name: entry.name.clone(),
            expiry_label: entry.expiry_label.clone(),
            expiry_days: entry.expiry_days,
            purchase_date: None,
            remaining_expiry_days: None,
        }
    }

    /// Estimate anchored to `purchase_date`, evaluated at `now`.
    pub fn purchased_at(
        entry: &ShelfLifeEntry,
        purchase_date: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            purchase_date: Some(purchase_date),
            remaining_expiry_days: Some(remaining_expiry_days(
                purchase_date,
                f64::from(entry.expiry_days),
                now,
            )),
            ..Self::from_entry(entry)
        }
    }

    pub fn urgency_tier(&self) -> Option<UrgencyTier> {
        self.remaining_expiry_days
            .map(UrgencyTier::from_remaining_days)
    }

    pub fn expected_expiration_date(&self) -> Option<DateTime<Utc>> {
        self.purchase_date
            .and_then(|date| expected_expiration_date(date, self.expiry_days))
    }
}
