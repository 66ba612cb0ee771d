use poem_openapi::Object;

use business::domain::grocery_list::errors::GroceryListError;
use business::domain::grocery_list::model::GroceryListEntry;

#[derive(Debug, Clone, Object)]
pub struct GroceryListEntryRequest {
    /// Client-side entry identifier, generated when absent
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<String>,
    /// Free-form item name as typed by the user
    pub text: String,
    /// Whether the entry has been checked off
    #[oai(default)]
    pub completed: bool,
}

impl TryFrom<GroceryListEntryRequest> for GroceryListEntry {
    type Error = GroceryListError;

    fn try_from(request: GroceryListEntryRequest) -> Result<Self, Self::Error> {
        let Some(id) = request.id else {
            let mut entry = GroceryListEntry::new(request.text)?;
            if request.completed {
                entry.toggle();
            }
            return Ok(entry);
        };
        GroceryListEntry::from_parts(id, request.text, request.completed)
    }
}

#[derive(Debug, Clone, Object)]
pub struct SuggestionsRequest {
    /// Current grocery list
    #[oai(default)]
    pub items: Vec<GroceryListEntryRequest>,
    /// Maximum number of suggestions (default from server configuration)
    #[oai(skip_serializing_if_is_none)]
    pub limit: Option<usize>,
}
