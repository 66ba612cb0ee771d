use serde::{Deserialize, Serialize};

use crate::domain::shared::text::normalize_name;

/// Reference record mapping an item name to its expected spoilage window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfLifeEntry {
    /// Canonical item name, matched case-insensitively.
    pub name: String,
    /// Human-readable range, e.g. "3-5 weeks".
    pub expiry_label: String,
    /// Point estimate used for computation.
    pub expiry_days: u32,
}

impl ShelfLifeEntry {
    pub fn new(name: impl Into<String>, expiry_label: impl Into<String>, expiry_days: u32) -> Self {
        Self {
            name: name.into(),
            expiry_label: expiry_label.into(),
            expiry_days,
        }
    }

    /// Normalized lookup key for this entry.
    pub fn key(&self) -> String {
        normalize_name(&self.name)
    }
}
