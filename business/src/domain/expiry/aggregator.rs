use chrono::{DateTime, Utc};

use crate::domain::shelf_life::lookup::find_entry;
use crate::domain::shelf_life::model::ShelfLifeEntry;

use super::model::{ExpiryEstimate, PantryItem};

/// Remaining-days cutoff for the "expiring soon" view.
pub const DEFAULT_EXPIRING_SOON_THRESHOLD_DAYS: f64 = 7.0;

/// Estimates every item that has a shelf-life entry, in input order.
///
/// Items without a match are skipped.
pub fn estimate_known_items(
    entries: &[ShelfLifeEntry],
    items: &[PantryItem],
    now: DateTime<Utc>,
) -> Vec<ExpiryEstimate> {
    items
        .iter()
        .filter_map(|item| {
            find_entry(entries, &item.name)
                .map(|entry| ExpiryEstimate::purchased_at(entry, item.purchase_date, now))
        })
        .collect()
}

/// Items with at most `threshold_days` of shelf life left, most urgent first.
///
/// Ties keep input order. Items without a shelf-life entry are dropped
/// silently.
pub fn expiring_soon(
    entries: &[ShelfLifeEntry],
    items: &[PantryItem],
    threshold_days: f64,
    now: DateTime<Utc>,
) -> Vec<ExpiryEstimate> {
    let mut soon: Vec<(f64, ExpiryEstimate)> = estimate_known_items(entries, items, now)
        .into_iter()
        .filter_map(|estimate| {
            estimate
                .remaining_expiry_days
                .filter(|days| *days <= threshold_days)
                .map(|days| (days, estimate))
        })
        .collect();

    soon.sort_by(|(a_days, _), (b_days, _)| a_days.total_cmp(b_days));

    soon.into_iter().map(|(_, estimate)| estimate).collect()
}
