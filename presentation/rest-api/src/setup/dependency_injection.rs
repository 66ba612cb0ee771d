use std::sync::Arc;

use logger::TracingLogger;

use business::application::expiry::calendar::GetExpiryCalendarUseCaseImpl;
use business::application::expiry::estimate::EstimateExpiryUseCaseImpl;
use business::application::expiry::expiring_soon::GetExpiringSoonUseCaseImpl;
use business::application::shelf_life::list::ListShelfLifeUseCaseImpl;
use business::application::shelf_life::lookup::LookupShelfLifeUseCaseImpl;
use business::application::suggestion::get::GetSuggestionsUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::shared::clock::{Clock, SystemClock};
use business::domain::shelf_life::catalog::{ShelfLifeCatalog, StaticShelfLifeCatalog};

use crate::api::expiry::routes::ExpiryApi;
use crate::api::health::routes::HealthApi;
use crate::api::shelf_life::routes::ShelfLifeApi;
use crate::api::suggestion::routes::SuggestionApi;
use crate::api::urgency::routes::UrgencyApi;
use crate::config::engine_config::EngineConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub shelf_life_api: ShelfLifeApi,
    pub suggestion_api: SuggestionApi,
    pub expiry_api: ExpiryApi,
    pub urgency_api: UrgencyApi,
}

impl DependencyContainer {
    pub fn new(engine: &EngineConfig) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let catalog: Arc<dyn ShelfLifeCatalog> = Arc::new(StaticShelfLifeCatalog);

        logger.info(&format!(
            "Loaded shelf-life table with {} entries",
            catalog.entries().len()
        ));

        // Shelf-life use cases
        let list_use_case = Arc::new(ListShelfLifeUseCaseImpl {
            catalog: catalog.clone(),
            logger: logger.clone(),
        });
        let lookup_use_case = Arc::new(LookupShelfLifeUseCaseImpl {
            catalog: catalog.clone(),
            logger: logger.clone(),
        });

        // Suggestion use cases
        let suggestions_use_case = Arc::new(GetSuggestionsUseCaseImpl {
            catalog: catalog.clone(),
            logger: logger.clone(),
        });

        // Expiry use cases
        let estimate_use_case = Arc::new(EstimateExpiryUseCaseImpl {
            catalog: catalog.clone(),
            clock: clock.clone(),
            logger: logger.clone(),
        });
        let expiring_soon_use_case = Arc::new(GetExpiringSoonUseCaseImpl {
            catalog: catalog.clone(),
            clock: clock.clone(),
            logger: logger.clone(),
        });
        let calendar_use_case = Arc::new(GetExpiryCalendarUseCaseImpl {
            catalog: catalog.clone(),
            clock: clock.clone(),
            logger,
        });

        Self {
            health_api: HealthApi::new(clock, catalog),
            shelf_life_api: ShelfLifeApi::new(list_use_case, lookup_use_case),
            suggestion_api: SuggestionApi::new(suggestions_use_case, engine.suggestion_limit),
            expiry_api: ExpiryApi::new(
                estimate_use_case,
                expiring_soon_use_case,
                calendar_use_case,
                engine.expiring_soon_threshold_days,
            ),
            urgency_api: UrgencyApi,
        }
    }
}
