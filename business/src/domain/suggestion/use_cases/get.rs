use crate::domain::grocery_list::model::GroceryListEntry;
use crate::domain::shelf_life::model::ShelfLifeEntry;

pub struct GetSuggestionsParams {
    pub items: Vec<GroceryListEntry>,
    pub limit: usize,
}

pub trait GetSuggestionsUseCase: Send + Sync {
    fn execute(&self, params: GetSuggestionsParams) -> Vec<ShelfLifeEntry>;
}
