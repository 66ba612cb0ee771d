use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::GroceryListError;

/// An entry on the user's grocery list.
///
/// The list itself is owned by the caller; the engine only reads `text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryListEntry {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

impl GroceryListEntry {
    /// Creates a fresh, not yet completed entry with a generated id.
    pub fn new(text: impl Into<String>) -> Result<Self, GroceryListError> {
        let text = text.into();
        let text = text.trim();
        if text.is_empty() {
            return Err(GroceryListError::TextEmpty);
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            completed: false,
        })
    }

    /// Rebuilds an entry supplied by the caller, keeping its id and state.
    pub fn from_parts(
        id: impl Into<String>,
        text: impl Into<String>,
        completed: bool,
    ) -> Result<Self, GroceryListError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(GroceryListError::IdEmpty);
        }
        let text = text.into();
        if text.trim().is_empty() {
            return Err(GroceryListError::TextEmpty);
        }

        Ok(Self {
            id,
            text,
            completed,
        })
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_entry_when_text_valid() {
        let entry = GroceryListEntry::new("  Oat milk ").unwrap();

        assert_eq!(entry.text, "Oat milk");
        assert!(!entry.completed);
        assert!(Uuid::parse_str(&entry.id).is_ok());
    }

    #[test]
    fn should_generate_distinct_ids() {
        let first = GroceryListEntry::new("Milk").unwrap();
        let second = GroceryListEntry::new("Milk").unwrap();

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn should_reject_when_text_only_whitespace() {
        let result = GroceryListEntry::new("   ");

        assert!(matches!(result.unwrap_err(), GroceryListError::TextEmpty));
    }

    #[test]
    fn should_keep_caller_fields_when_rebuilt_from_parts() {
        let entry = GroceryListEntry::from_parts("1700000000000", "Eggs", true).unwrap();

        assert_eq!(entry.id, "1700000000000");
        assert_eq!(entry.text, "Eggs");
        assert!(entry.completed);
    }

    #[test]
    fn should_reject_from_parts_when_id_empty() {
        let result = GroceryListEntry::from_parts("", "Eggs", false);

        assert!(matches!(result.unwrap_err(), GroceryListError::IdEmpty));
    }

    #[test]
    fn should_reject_from_parts_when_text_empty() {
        let result = GroceryListEntry::from_parts("a1", " ", false);

        assert!(matches!(result.unwrap_err(), GroceryListError::TextEmpty));
    }

    #[test]
    fn should_flip_completed_on_toggle() {
        let mut entry = GroceryListEntry::new("Bread").unwrap();

        entry.toggle();
        assert!(entry.completed);
        entry.toggle();
        assert!(!entry.completed);
    }

    #[test]
    fn should_deserialize_caller_payload() {
        let entry: GroceryListEntry =
            serde_json::from_str(r#"{"id":"42","text":"milk","completed":false}"#).unwrap();

        assert_eq!(entry.text, "milk");
    }
}
