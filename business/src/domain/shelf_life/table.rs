//! Built-in shelf-life reference data.
//!
//! Estimates assume typical household storage (fridge for perishables,
//! pantry for dry goods). Table order is significant: suggestions are
//! offered in this order.

use once_cell::sync::Lazy;

use super::model::ShelfLifeEntry;

/// (name, human-readable range, point estimate in days)
const RAW_TABLE: &[(&str, &str, u32)] = &[
    ("Milk", "1 week", 7),
    ("Eggs", "3-5 weeks", 28),
    ("Bread", "5-7 days", 6),
    ("Butter", "1-3 months", 60),
    ("Cheddar Cheese", "3-4 weeks", 25),
    ("Yogurt", "1-2 weeks", 10),
    ("Chicken Breast", "1-2 days", 2),
    ("Ground Beef", "1-2 days", 2),
    ("Bacon", "1 week", 7),
    ("Salmon", "1-2 days", 2),
    ("Apples", "4-6 weeks", 35),
    ("Bananas", "2-7 days", 5),
    ("Oranges", "3-4 weeks", 25),
    ("Strawberries", "3-7 days", 5),
    ("Blueberries", "1-2 weeks", 10),
    ("Grapes", "1-2 weeks", 10),
    ("Lemons", "3-4 weeks", 25),
    ("Avocados", "3-4 days", 4),
    ("Tomatoes", "1 week", 7),
    ("Lettuce", "7-10 days", 8),
    ("Spinach", "3-7 days", 5),
    ("Carrots", "3-4 weeks", 25),
    ("Broccoli", "3-5 days", 4),
    ("Cucumbers", "1 week", 7),
    ("Bell Peppers", "1-2 weeks", 10),
    ("Onions", "1-2 months", 45),
    ("Garlic", "3-6 months", 120),
    ("Potatoes", "3-5 weeks", 28),
    ("Mushrooms", "7-10 days", 8),
    ("Cream Cheese", "2 weeks", 14),
    ("Sour Cream", "1-3 weeks", 14),
    ("Heavy Cream", "1 month", 30),
    ("Tofu", "3-5 days", 4),
    ("Ham", "3-5 days", 4),
    ("Hot Dogs", "2 weeks", 14),
    ("Orange Juice", "7-10 days", 8),
    ("Tortillas", "1 week", 7),
    ("Rice", "4-5 years", 1642),
    ("Pasta", "1-2 years", 547),
    ("Flour", "6-8 months", 210),
    ("Sugar", "2 years", 730),
    ("Peanut Butter", "6-9 months", 240),
    ("Cereal", "6-8 months", 210),
    ("Canned Beans", "2-5 years", 1095),
    ("Ketchup", "6 months", 180),
    ("Mayonnaise", "2 months", 60),
    ("Mustard", "1 year", 365),
    ("Jam", "6 months", 180),
    ("Frozen Peas", "8 months", 240),
    ("Ice Cream", "2-3 months", 75),
];

static SHELF_LIFE_TABLE: Lazy<Vec<ShelfLifeEntry>> = Lazy::new(|| {
    RAW_TABLE
        .iter()
        .map(|(name, label, days)| ShelfLifeEntry::new(*name, *label, *days))
        .collect()
});

/// The built-in table, in suggestion order.
pub fn shelf_life_table() -> &'static [ShelfLifeEntry] {
    &SHELF_LIFE_TABLE
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn should_start_with_milk() {
        let first = &shelf_life_table()[0];

        assert_eq!(first.name, "Milk");
        assert_eq!(first.expiry_days, 7);
    }

    #[test]
    fn should_have_unique_case_insensitive_names() {
        let keys: HashSet<String> = shelf_life_table().iter().map(|e| e.key()).collect();

        assert_eq!(keys.len(), shelf_life_table().len());
    }

    #[test]
    fn should_have_non_empty_names_and_labels() {
        for entry in shelf_life_table() {
            assert!(!entry.name.trim().is_empty());
            assert!(!entry.expiry_label.trim().is_empty());
            assert_eq!(entry.name, entry.name.trim());
        }
    }

    #[test]
    fn should_have_positive_expiry_days() {
        assert!(shelf_life_table().iter().all(|e| e.expiry_days > 0));
    }

    #[test]
    fn should_hold_more_entries_than_default_suggestion_limit() {
        assert!(shelf_life_table().len() > 6);
    }
}
