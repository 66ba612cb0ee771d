use crate::domain::shelf_life::model::ShelfLifeEntry;

pub struct LookupShelfLifeParams {
    pub name: String,
}

pub trait LookupShelfLifeUseCase: Send + Sync {
    fn execute(&self, params: LookupShelfLifeParams) -> Option<ShelfLifeEntry>;
}
