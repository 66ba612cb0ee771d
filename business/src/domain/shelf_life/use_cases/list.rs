use crate::domain::shelf_life::model::ShelfLifeEntry;

pub trait ListShelfLifeUseCase: Send + Sync {
    fn execute(&self) -> Vec<ShelfLifeEntry>;
}
