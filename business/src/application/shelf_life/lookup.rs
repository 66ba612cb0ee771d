use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::shelf_life::catalog::ShelfLifeCatalog;
use crate::domain::shelf_life::lookup::find_entry;
use crate::domain::shelf_life::model::ShelfLifeEntry;
use crate::domain::shelf_life::use_cases::lookup::{LookupShelfLifeParams, LookupShelfLifeUseCase};

pub struct LookupShelfLifeUseCaseImpl {
    pub catalog: Arc<dyn ShelfLifeCatalog>,
    pub logger: Arc<dyn Logger>,
}

impl LookupShelfLifeUseCase for LookupShelfLifeUseCaseImpl {
    fn execute(&self, params: LookupShelfLifeParams) -> Option<ShelfLifeEntry> {
        self.logger
            .debug(&format!("Looking up shelf life for: {}", params.name));

        let found = find_entry(self.catalog.entries(), &params.name).cloned();
        if found.is_none() {
            self.logger
                .debug(&format!("No shelf-life entry for: {}", params.name));
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shelf_life::catalog::{InMemoryShelfLifeCatalog, StaticShelfLifeCatalog};
    use mockall::mock;

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

    #[test]
    fn should_return_entry_when_name_in_table() {
        let use_case = LookupShelfLifeUseCaseImpl {
            catalog: Arc::new(StaticShelfLifeCatalog),
            logger: mock_logger(),
        };

        let result = use_case.execute(LookupShelfLifeParams {
            name: "BANANAS".to_string(),
        });

        let entry = result.unwrap();
        assert_eq!(entry.name, "Bananas");
        assert_eq!(entry.expiry_label, "2-7 days");
    }

    #[test]
    fn should_return_none_when_name_unknown() {
        let use_case = LookupShelfLifeUseCaseImpl {
            catalog: Arc::new(StaticShelfLifeCatalog),
            logger: mock_logger(),
        };

        let result = use_case.execute(LookupShelfLifeParams {
            name: "Dragon fruit".to_string(),
        });

        assert!(result.is_none());
    }

    #[test]
    fn should_search_the_injected_catalog() {
        let use_case = LookupShelfLifeUseCaseImpl {
            catalog: Arc::new(InMemoryShelfLifeCatalog::new(vec![ShelfLifeEntry::new(
                "Kefir",
                "2-3 weeks",
                18,
            )])),
            logger: mock_logger(),
        };

        assert!(
            use_case
                .execute(LookupShelfLifeParams {
                    name: "Milk".to_string()
                })
                .is_none()
        );
        assert_eq!(
            use_case
                .execute(LookupShelfLifeParams {
                    name: "kefir".to_string()
                })
                .map(|e| e.expiry_days),
            Some(18)
        );
    }
}
