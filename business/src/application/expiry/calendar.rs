use std::sync::Arc;

use crate::domain::expiry::calendar::{ExpiryCalendarDay, build_calendar};
use crate::domain::expiry::use_cases::calendar::{
    GetExpiryCalendarParams, GetExpiryCalendarUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::shared::clock::Clock;
use crate::domain::shelf_life::catalog::ShelfLifeCatalog;

pub struct GetExpiryCalendarUseCaseImpl {
    pub catalog: Arc<dyn ShelfLifeCatalog>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

impl GetExpiryCalendarUseCase for GetExpiryCalendarUseCaseImpl {
    fn execute(&self, params: GetExpiryCalendarParams) -> Vec<ExpiryCalendarDay> {
        self.logger.info(&format!(
            "Building expiry calendar for {} pantry items",
            params.items.len()
        ));

        let calendar = build_calendar(self.catalog.entries(), &params.items, self.clock.now());

        self.logger
            .info(&format!("Calendar spans {} days", calendar.len()));
        calendar
    }
}
