use std::env;

use business::domain::expiry::aggregator::DEFAULT_EXPIRING_SOON_THRESHOLD_DAYS;
use business::domain::suggestion::filter::DEFAULT_SUGGESTION_LIMIT;

/// Defaults applied when a request leaves a tuning knob unset.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub suggestion_limit: usize,
    pub expiring_soon_threshold_days: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            expiring_soon_threshold_days: DEFAULT_EXPIRING_SOON_THRESHOLD_DAYS,
        }
    }
}

impl EngineConfig {
    /// Load engine defaults from environment variables
    ///
    /// Environment variables:
    /// - SUGGESTION_LIMIT: Suggestions returned per request (default: 6)
    /// - EXPIRING_SOON_THRESHOLD_DAYS: Remaining-days cutoff (default: 7)
    ///
    /// Values that do not parse, or are out of range, fall back to the default.
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("SUGGESTION_LIMIT").ok().as_deref(),
            env::var("EXPIRING_SOON_THRESHOLD_DAYS").ok().as_deref(),
        )
    }

    fn from_values(suggestion_limit: Option<&str>, threshold_days: Option<&str>) -> Self {
        let defaults = Self::default();

        let suggestion_limit = suggestion_limit
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|limit| *limit > 0)
            .unwrap_or(defaults.suggestion_limit);

        let expiring_soon_threshold_days = threshold_days
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|days| days.is_finite() && *days >= 0.0)
            .unwrap_or(defaults.expiring_soon_threshold_days);

        Self {
            suggestion_limit,
            expiring_soon_threshold_days,
        }
    }
}
