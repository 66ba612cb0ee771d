use super::model::ShelfLifeEntry;
use super::table::shelf_life_table;

/// Port supplying the candidate shelf-life entries, in suggestion order.
pub trait ShelfLifeCatalog: Send + Sync {
    fn entries(&self) -> &[ShelfLifeEntry];
}

/// Catalog backed by the built-in table.
pub struct StaticShelfLifeCatalog;

impl ShelfLifeCatalog for StaticShelfLifeCatalog {
    fn entries(&self) -> &[ShelfLifeEntry] {
        shelf_life_table()
    }
}

/// Catalog over caller-provided entries.
pub struct InMemoryShelfLifeCatalog {
    entries: Vec<ShelfLifeEntry>,
}

impl InMemoryShelfLifeCatalog {
    pub fn new(entries: Vec<ShelfLifeEntry>) -> Self {
        Self { entries }
    }
}

impl ShelfLifeCatalog for InMemoryShelfLifeCatalog {
    fn entries(&self) -> &[ShelfLifeEntry] {
        &self.entries
    }
}
