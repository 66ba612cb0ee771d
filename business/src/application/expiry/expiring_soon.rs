use std::sync::Arc;

use crate::domain::expiry::aggregator::expiring_soon;
use crate::domain::expiry::errors::ExpiryError;
use crate::domain::expiry::model::ExpiryEstimate;
use crate::domain::expiry::use_cases::expiring_soon::{
    GetExpiringSoonParams, GetExpiringSoonUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::shared::clock::Clock;
use crate::domain::shelf_life::catalog::ShelfLifeCatalog;

pub struct GetExpiringSoonUseCaseImpl {
    pub catalog: Arc<dyn ShelfLifeCatalog>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

impl GetExpiringSoonUseCase for GetExpiringSoonUseCaseImpl {
    fn execute(&self, params: GetExpiringSoonParams) -> Result<Vec<ExpiryEstimate>, ExpiryError> {
        if !params.threshold_days.is_finite() || params.threshold_days < 0.0 {
            return Err(ExpiryError::InvalidThreshold);
        }

        self.logger.info(&format!(
            "Checking {} pantry items for expiry within {} days",
            params.items.len(),
            params.threshold_days
        ));

        let soon = expiring_soon(
            self.catalog.entries(),
            &params.items,
            params.threshold_days,
            self.clock.now(),
        );

        self.logger
            .info(&format!("Found {} items expiring soon", soon.len()));
        Ok(soon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::expiry::aggregator::DEFAULT_EXPIRING_SOON_THRESHOLD_DAYS;
    use crate::domain::expiry::model::PantryItem;
    use crate::domain::shelf_life::catalog::StaticShelfLifeCatalog;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use mockall::mock;

    mock! {
        pub FixedClock {}

        impl Clock for FixedClock {
            fn now(&self) -> DateTime<Utc>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 10, 7, 45, 0).unwrap()
    }

    fn fixed_clock() -> Arc<dyn Clock> {
        let mut clock = MockFixedClock::new();
        clock.expect_now().returning(now);
        Arc::new(clock)
    }

    fn use_case() -> GetExpiringSoonUseCaseImpl {
        GetExpiringSoonUseCaseImpl {
            catalog: Arc::new(StaticShelfLifeCatalog),
            clock: fixed_clock(),
            logger: mock_logger(),
        }
    }

    #[test]
    fn should_return_items_within_default_threshold() {
        let result = use_case().execute(GetExpiringSoonParams {
            items: vec![
                PantryItem::new("Bread", now() - Duration::days(2)),
                PantryItem::new("Flour", now() - Duration::days(2)),
                PantryItem::new("Spinach", now() - Duration::days(4)),
            ],
            threshold_days: DEFAULT_EXPIRING_SOON_THRESHOLD_DAYS,
        });

        let soon = result.unwrap();
        let names: Vec<&str> = soon.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Spinach", "Bread"]);
    }

    #[test]
    fn should_silently_skip_unknown_items() {
        let result = use_case().execute(GetExpiringSoonParams {
            items: vec![PantryItem::new("Homemade soup", now() - Duration::days(20))],
            threshold_days: DEFAULT_EXPIRING_SOON_THRESHOLD_DAYS,
        });

        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn should_use_custom_threshold() {
        let result = use_case().execute(GetExpiringSoonParams {
            items: vec![PantryItem::new("Carrots", now())],
            threshold_days: 30.0,
        });

        assert_eq!(result.unwrap().len(), 1);
    }

    #[test]
    fn should_reject_negative_threshold() {
        let result = use_case().execute(GetExpiringSoonParams {
            items: vec![],
            threshold_days: -1.0,
        });

        assert!(matches!(result.unwrap_err(), ExpiryError::InvalidThreshold));
    }

    #[test]
    fn should_reject_non_finite_threshold() {
        let result = use_case().execute(GetExpiringSoonParams {
            items: vec![],
            threshold_days: f64::NAN,
        });

        assert!(matches!(result.unwrap_err(), ExpiryError::InvalidThreshold));
    }
}
