use std::sync::Arc;

use crate::domain::expiry::errors::ExpiryError;
use crate::domain::expiry::model::ExpiryEstimate;
use crate::domain::expiry::use_cases::estimate::{EstimateExpiryParams, EstimateExpiryUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::clock::Clock;
use crate::domain::shelf_life::catalog::ShelfLifeCatalog;
use crate::domain::shelf_life::lookup::find_entry;

pub struct EstimateExpiryUseCaseImpl {
    pub catalog: Arc<dyn ShelfLifeCatalog>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

impl EstimateExpiryUseCase for EstimateExpiryUseCaseImpl {
    fn execute(&self, params: EstimateExpiryParams) -> Result<ExpiryEstimate, ExpiryError> {
        self.logger
            .info(&format!("Estimating expiry for: {}", params.name));

        let entry = match find_entry(self.catalog.entries(), &params.name) {
            Some(entry) => entry,
            None => {
                self.logger
                    .warn(&format!("No shelf-life entry for: {}", params.name));
                return Err(ExpiryError::UnknownItem);
            }
        };

        let estimate = ExpiryEstimate::purchased_at(entry, params.purchase_date, self.clock.now());

        if let (Some(days), Some(tier)) =
            (estimate.remaining_expiry_days, estimate.urgency_tier())
        {
            self.logger.info(&format!(
                "{} has {:.1} days left ({})",
                estimate.name, days, tier
            ));
        }
        Ok(estimate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::expiry::urgency::UrgencyTier;
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
        Utc.with_ymd_and_hms(2024, 1, 20, 10, 0, 0).unwrap()
    }

    fn fixed_clock() -> Arc<dyn Clock> {
        let mut clock = MockFixedClock::new();
        clock.expect_now().returning(now);
        Arc::new(clock)
    }

    #[test]
    fn should_estimate_remaining_days_from_purchase_date() {
        let use_case = EstimateExpiryUseCaseImpl {
            catalog: Arc::new(StaticShelfLifeCatalog),
            clock: fixed_clock(),
            logger: mock_logger(),
        };

        let result = use_case.execute(EstimateExpiryParams {
            name: "eggs".to_string(),
            purchase_date: now() - Duration::days(8),
        });

        let estimate = result.unwrap();
        assert_eq!(estimate.name, "Eggs");
        assert_eq!(estimate.expiry_label, "3-5 weeks");
        assert_eq!(estimate.remaining_expiry_days, Some(20.0));
        assert_eq!(estimate.urgency_tier(), Some(UrgencyTier::Low));
    }

    #[test]
    fn should_floor_at_zero_when_item_long_expired() {
        let use_case = EstimateExpiryUseCaseImpl {
            catalog: Arc::new(StaticShelfLifeCatalog),
            clock: fixed_clock(),
            logger: mock_logger(),
        };

        let result = use_case.execute(EstimateExpiryParams {
            name: "Milk".to_string(),
            purchase_date: now() - Duration::days(10),
        });

        let estimate = result.unwrap();
        assert_eq!(estimate.remaining_expiry_days, Some(0.0));
        assert_eq!(estimate.urgency_tier(), Some(UrgencyTier::Critical));
    }

    #[test]
    fn should_log_days_left_with_tier_name() {
        let mut logger = MockLog::new();
        logger
            .expect_info()
            .withf(|message| message.starts_with("Estimating"))
            .times(1)
            .returning(|_| ());
        logger
            .expect_info()
            .withf(|message| message == "Milk has 0.0 days left (critical)")
            .times(1)
            .returning(|_| ());

        let use_case = EstimateExpiryUseCaseImpl {
            catalog: Arc::new(StaticShelfLifeCatalog),
            clock: fixed_clock(),
            logger: Arc::new(logger),
        };

        let result = use_case.execute(EstimateExpiryParams {
            name: "milk".to_string(),
            purchase_date: now() - Duration::days(10),
        });

        assert!(result.is_ok());
    }

    #[test]
    fn should_return_error_when_item_unknown() {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().times(1).returning(|_| ());

        let use_case = EstimateExpiryUseCaseImpl {
            catalog: Arc::new(StaticShelfLifeCatalog),
            clock: Arc::new(MockFixedClock::new()),
            logger: Arc::new(logger),
        };

        let result = use_case.execute(EstimateExpiryParams {
            name: "Caviar".to_string(),
            purchase_date: now(),
        });

        assert!(matches!(result.unwrap_err(), ExpiryError::UnknownItem));
    }
}
