#[derive(Debug, thiserror::Error)]
pub enum GroceryListError {
    #[error("grocery_list.text_empty")]
    TextEmpty,
    #[error("grocery_list.id_empty")]
    IdEmpty,
}
