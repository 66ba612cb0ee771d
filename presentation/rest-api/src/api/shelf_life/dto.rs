use poem_openapi::Object;

use business::domain::shelf_life::model::ShelfLifeEntry;

#[derive(Debug, Clone, Object)]
pub struct ShelfLifeEntryResponse {
    /// Canonical item name
    pub name: String,
    /// Human-readable shelf-life range, e.g. "3-5 weeks"
    pub expiry_label: String,
    /// Estimated days until spoilage
    pub expiry_days: u32,
}

impl From<ShelfLifeEntry> for ShelfLifeEntryResponse {
    fn from(entry: ShelfLifeEntry) -> Self {
        Self {
            name: entry.name,
            expiry_label: entry.expiry_label,
            expiry_days: entry.expiry_days,
        }
    }
}
