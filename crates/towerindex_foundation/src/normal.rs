//! Normal forms for names.
//!
//! Alias normal form is the internal matching key: lowercase, trimmed, with
//! whitespace runs collapsed to a single `_`. Index normal form is the
//! user-facing spelling: underscores become spaces and every word is
//! title-cased.

/// Converts a raw token to alias normal form.
///
/// ```
/// use towerindex_foundation::to_alias_normal_form;
/// assert_eq!(to_alias_normal_form("  Dart   Monkey "), "dart_monkey");
/// ```
#[must_use]
pub fn to_alias_normal_form(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Converts an alias-normal string to index normal form.
///
/// ```
/// use towerindex_foundation::to_index_normal_form;
/// assert_eq!(to_index_normal_form("super_monkey_fan_club"), "Super Monkey Fan Club");
/// ```
#[must_use]
pub fn to_index_normal_form(alias: &str) -> String {
    to_title_case(&alias.replace('_', " "))
}

/// Upper-cases the first letter of every space-separated word and
/// lower-cases the rest.
#[must_use]
pub fn to_title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
