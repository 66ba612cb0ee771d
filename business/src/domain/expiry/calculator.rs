use chrono::{DateTime, Duration, Utc};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Fractional days elapsed between `since` and `now`.
///
/// Negative when `since` lies in the future.
pub fn elapsed_days(since: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - since).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// Days of shelf life left for an item acquired at `purchase_date`.
///
/// Elapsed time is kept fractional and subtracted unrounded. The result is
/// clamped at zero, so an expired item and one expiring right now both
/// report `0`.
pub fn remaining_expiry_days(
    purchase_date: DateTime<Utc>,
    expiry_days: f64,
    now: DateTime<Utc>,
) -> f64 {
    (expiry_days - elapsed_days(purchase_date, now)).max(0.0)
}

/// Instant at which an item acquired at `purchase_date` is expected to spoil.
///
/// `None` only when the date falls outside chrono's representable range.
pub fn expected_expiration_date(
    purchase_date: DateTime<Utc>,
    expiry_days: u32,
) -> Option<DateTime<Utc>> {
    purchase_date.checked_add_signed(Duration::days(i64::from(expiry_days)))
}
