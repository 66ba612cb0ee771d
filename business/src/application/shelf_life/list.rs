use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::shelf_life::catalog::ShelfLifeCatalog;
use crate::domain::shelf_life::model::ShelfLifeEntry;
use crate::domain::shelf_life::use_cases::list::ListShelfLifeUseCase;

pub struct ListShelfLifeUseCaseImpl {
    pub catalog: Arc<dyn ShelfLifeCatalog>,
    pub logger: Arc<dyn Logger>,
}

impl ListShelfLifeUseCase for ListShelfLifeUseCaseImpl {
    fn execute(&self) -> Vec<ShelfLifeEntry> {
        let entries = self.catalog.entries().to_vec();
        self.logger
            .info(&format!("Listing {} shelf-life entries", entries.len()));
        entries
    }
}
