use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::shelf_life::model::ShelfLifeEntry;

use super::aggregator::estimate_known_items;
use super::model::{ExpiryEstimate, PantryItem};

/// Items expected to spoil on one calendar day (UTC).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiryCalendarDay {
    pub date: NaiveDate,
    pub items: Vec<ExpiryEstimate>,
}

/// Groups known items by expected expiration day, earliest day first.
pub fn build_calendar(
    entries: &[ShelfLifeEntry],
    items: &[PantryItem],
    now: DateTime<Utc>,
) -> Vec<ExpiryCalendarDay> {
    let mut days: BTreeMap<NaiveDate, Vec<ExpiryEstimate>> = BTreeMap::new();

    for estimate in estimate_known_items(entries, items, now) {
        if let Some(expires_at) = estimate.expected_expiration_date() {
            days.entry(expires_at.date_naive()).or_default().push(estimate);
        }
    }

    days.into_iter()
        .map(|(date, items)| ExpiryCalendarDay { date, items })
        .collect()
}
