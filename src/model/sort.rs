//! Sorting entries by a source field

use super::column::SortDirection;
use super::entry::{Entry, FieldValue};
use std::cmp::Ordering;

/// Primitive comparison of two (possibly absent) field values.
///
/// Absent values order before present ones, numbers before text.
pub fn compare_values(a: Option<FieldValue<'_>>, b: Option<FieldValue<'_>>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => match (a, b) {
            (FieldValue::Number(x), FieldValue::Number(y)) => x.cmp(&y),
            (FieldValue::Text(x), FieldValue::Text(y)) => x.cmp(y),
            (FieldValue::Number(_), FieldValue::Text(_)) => Ordering::Less,
            (FieldValue::Text(_), FieldValue::Number(_)) => Ordering::Greater,
        },
    }
}

/// Return a copy of `items` sorted by `field_name`.
///
/// The sort is stable in both directions: equal keys keep their previous
/// relative order.
pub fn copy_and_sort(items: &[Entry], field_name: &str, direction: SortDirection) -> Vec<Entry> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_values(a.field(field_name), b.field(field_name));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entry::sample_entry;

    fn entry(id: &str, status: &str, last_modified: i64) -> Entry {
        Entry {
            status: status.to_string(),
            last_modified,
            ..sample_entry(id)
        }
    }

    fn ids(items: &[Entry]) -> Vec<&str> {
        items.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_sort_by_number() {
        let items = vec![entry("a", "Draft", 2), entry("b", "Final", 1)];

        let asc = copy_and_sort(&items, "lastModified", SortDirection::Ascending);
        assert_eq!(ids(&asc), vec!["b", "a"]);

        let desc = copy_and_sort(&items, "lastModified", SortDirection::Descending);
        assert_eq!(ids(&desc), vec!["a", "b"]);
    }

    #[test]
    fn test_sort_by_text() {
        let items = vec![
            entry("a", "Review", 1),
            entry("b", "Draft", 2),
            entry("c", "Final", 3),
        ];
        let asc = copy_and_sort(&items, "status", SortDirection::Ascending);
        assert_eq!(ids(&asc), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let items = vec![entry("a", "Draft", 2), entry("b", "Final", 1)];
        let _ = copy_and_sort(&items, "lastModified", SortDirection::Ascending);
        assert_eq!(ids(&items), vec!["a", "b"]);
    }

    #[test]
    fn test_ties_keep_relative_order() {
        let items = vec![
            entry("a", "Draft", 5),
            entry("b", "Final", 5),
            entry("c", "Draft", 1),
            entry("d", "Draft", 5),
        ];

        let asc = copy_and_sort(&items, "lastModified", SortDirection::Ascending);
        assert_eq!(ids(&asc), vec!["c", "a", "b", "d"]);

        let desc = copy_and_sort(&items, "lastModified", SortDirection::Descending);
        assert_eq!(ids(&desc), vec!["a", "b", "d", "c"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let items = vec![
            entry("a", "Review", 3),
            entry("b", "Draft", 1),
            entry("c", "Final", 2),
        ];
        let once = copy_and_sort(&items, "status", SortDirection::Ascending);
        let twice = copy_and_sort(&once, "status", SortDirection::Ascending);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_reversed_extremes() {
        let items = vec![
            entry("a", "Review", 30),
            entry("b", "Draft", 10),
            entry("c", "Final", 20),
        ];
        let asc = copy_and_sort(&items, "lastModified", SortDirection::Ascending);
        let desc = copy_and_sort(&items, "lastModified", SortDirection::Descending);
        assert_eq!(asc.first(), desc.last());
        assert_eq!(asc.last(), desc.first());
    }

    #[test]
    fn test_unknown_field_keeps_order() {
        // Every value is absent, so all keys tie.
        let items = vec![entry("b", "Final", 1), entry("a", "Draft", 2)];
        let asc = copy_and_sort(&items, "thumbnail", SortDirection::Ascending);
        assert_eq!(ids(&asc), vec!["b", "a"]);
        let desc = copy_and_sort(&items, "thumbnail", SortDirection::Descending);
        assert_eq!(ids(&desc), vec!["b", "a"]);
    }

    #[test]
    fn test_absent_values_order_first() {
        assert_eq!(
            compare_values(None, Some(FieldValue::Text(""))),
            Ordering::Less
        );
        assert_eq!(
            compare_values(Some(FieldValue::Number(i64::MIN)), None),
            Ordering::Greater
        );
        assert_eq!(compare_values(None, None), Ordering::Equal);
    }

    #[test]
    fn test_text_comparison_is_case_sensitive() {
        // Byte order: uppercase sorts before lowercase.
        assert_eq!(
            compare_values(Some(FieldValue::Text("Zeta")), Some(FieldValue::Text("alpha"))),
            Ordering::Less
        );
    }
}
