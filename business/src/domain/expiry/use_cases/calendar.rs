use crate::domain::expiry::calendar::ExpiryCalendarDay;
use crate::domain::expiry::model::PantryItem;

pub struct GetExpiryCalendarParams {
    pub items: Vec<PantryItem>,
}

pub trait GetExpiryCalendarUseCase: Send + Sync {
    fn execute(&self, params: GetExpiryCalendarParams) -> Vec<ExpiryCalendarDay>;
}
