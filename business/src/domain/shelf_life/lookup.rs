use crate::domain::shared::text::normalize_name;

use super::model::ShelfLifeEntry;

/// Finds the entry whose name matches `name` case-insensitively.
///
/// Exact match on the normalized key only: no substring or fuzzy matching,
/// so "egg" does not resolve to "Eggs".
pub fn find_entry<'a>(entries: &'a [ShelfLifeEntry], name: &str) -> Option<&'a ShelfLifeEntry> {
    let key = normalize_name(name);
    if key.is_empty() {
        return None;
    }
    entries.iter().find(|entry| entry.key() == key)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::domain::shelf_life::table::shelf_life_table;

    #[test]
    fn should_find_entry_when_case_differs() {
        let entry = find_entry(shelf_life_table(), "mIlK").unwrap();

        assert_eq!(entry.name, "Milk");
    }

    #[test]
    fn should_find_entry_when_surrounded_by_whitespace() {
        let entry = find_entry(shelf_life_table(), "  ground beef ").unwrap();

        assert_eq!(entry.name, "Ground Beef");
    }

    #[test]
    fn should_not_match_partial_names() {
        assert!(find_entry(shelf_life_table(), "egg").is_none());
        assert!(find_entry(shelf_life_table(), "chicken").is_none());
        assert!(find_entry(shelf_life_table(), "milkshake").is_none());
    }

    #[test]
    fn should_return_none_when_name_empty() {
        assert!(find_entry(shelf_life_table(), "").is_none());
        assert!(find_entry(shelf_life_table(), "   ").is_none());
    }

    #[test]
    fn should_return_none_when_entries_empty() {
        assert!(find_entry(&[], "Milk").is_none());
    }

    #[test]
    fn should_find_every_table_entry_by_its_own_name() {
        for entry in shelf_life_table() {
            assert_eq!(find_entry(shelf_life_table(), &entry.name), Some(entry));
            assert_eq!(
                find_entry(shelf_life_table(), &entry.name.to_uppercase()),
                Some(entry)
            );
        }
    }

    proptest! {
        #[test]
        fn should_only_match_table_names(name in "[a-zA-Z ]{0,20}") {
            let key = normalize_name(&name);
            let expected = shelf_life_table().iter().find(|e| e.key() == key && !key.is_empty());

            prop_assert_eq!(find_entry(shelf_life_table(), &name), expected);
        }
    }
}
