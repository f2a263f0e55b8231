// src/models/category.rs

//! Fixed category table of the notice board.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Category labels and their board codes, in display order.
///
/// Labels are matched exactly. "파란학기" is an alias of "파란학기제".
pub const CATEGORIES: &[(&str, u32)] = &[
    ("학사", 1),
    ("비교과", 2),
    ("장학", 3),
    ("학술", 4),
    ("입학", 5),
    ("취업", 6),
    ("사무", 7),
    ("기타", 8),
    ("행사", 166),
    ("파란학기제", 167),
    ("파란학기", 167),
    ("학사일정", 168),
];

static CATEGORY_CODES: LazyLock<HashMap<&'static str, u32>> =
    LazyLock::new(|| CATEGORIES.iter().copied().collect());

/// Look up the board code for a category label.
pub fn category_code(label: &str) -> Option<u32> {
    CATEGORY_CODES.get(label).copied()
}

/// Look up the first label registered for a board code.
pub fn category_label(code: u32) -> Option<&'static str> {
    CATEGORIES
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(label, _)| *label)
}

/// Iterate over all category entries in table order.
pub fn categories() -> impl Iterator<Item = (&'static str, u32)> {
    CATEGORIES.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(category_code("학사"), Some(1));
        assert_eq!(category_code("기타"), Some(8));
        assert_eq!(category_code("행사"), Some(166));
        assert_eq!(category_code("학사일정"), Some(168));
    }

    #[test]
    fn test_alias_shares_code() {
        assert_eq!(category_code("파란학기제"), category_code("파란학기"));
        assert_eq!(category_label(167), Some("파란학기제"));
    }

    #[test]
    fn test_unknown_and_near_miss_labels() {
        assert_eq!(category_code("학사 "), None);
        assert_eq!(category_code("academic"), None);
        assert_eq!(category_code(""), None);
        assert_eq!(category_label(9), None);
    }

    #[test]
    fn test_table_size() {
        assert_eq!(categories().count(), 12);
    }
}
