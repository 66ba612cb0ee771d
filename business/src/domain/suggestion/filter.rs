use std::collections::HashSet;

use crate::domain::shared::text::normalize_name;
use crate::domain::shelf_life::model::ShelfLifeEntry;

/// Number of quick-add suggestions offered when the caller does not ask
/// for a specific amount.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 6;

/// Returns up to `limit` entries whose names are not already listed.
///
/// `present` holds the texts already on the grocery list. Matching is on the
/// normalized name; output keeps the order of `entries`.
pub fn filter_suggestions<I, S>(
    entries: &[ShelfLifeEntry],
    present: I,
    limit: usize,
) -> Vec<ShelfLifeEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let listed: HashSet<String> = present
        .into_iter()
        .map(|text| normalize_name(text.as_ref()))
        .collect();

    entries
        .iter()
        .filter(|entry| !listed.contains(&entry.key()))
        .take(limit)
        .cloned()
        .collect()
}
