use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::shelf_life::catalog::ShelfLifeCatalog;
use crate::domain::shelf_life::model::ShelfLifeEntry;
use crate::domain::suggestion::filter::filter_suggestions;
use crate::domain::suggestion::use_cases::get::{GetSuggestionsParams, GetSuggestionsUseCase};

pub struct GetSuggestionsUseCaseImpl {
    pub catalog: Arc<dyn ShelfLifeCatalog>,
    pub logger: Arc<dyn Logger>,
}

impl GetSuggestionsUseCase for GetSuggestionsUseCaseImpl {
    fn execute(&self, params: GetSuggestionsParams) -> Vec<ShelfLifeEntry> {
        self.logger.info(&format!(
            "Building suggestions for a list of {} items with limit: {}",
            params.items.len(),
            params.limit
        ));

        // Completed entries still count as listed
        let suggestions = filter_suggestions(
            self.catalog.entries(),
            params.items.iter().map(|item| item.text.as_str()),
            params.limit,
        );

        self.logger
            .info(&format!("Built {} suggestions", suggestions.len()));
        suggestions
    }
}
