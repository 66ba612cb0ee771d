use chrono::{DateTime, Utc};

/// Source of the current instant.
///
/// Remaining-life computations read "now" through this port so they can be
/// driven by a fixed instant in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation backed by `Utc::now()`.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
