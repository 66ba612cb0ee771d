/// Normalizes a free-text item name into its lookup key.
///
/// Trims surrounding whitespace and lower-cases ASCII letters only; other
/// characters are kept as typed.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}
