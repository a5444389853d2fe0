use crate::error::{InventoryError, InventoryResult};

/// Position of a product inside the record store, as shown to the front-end.
pub type RowIndex = usize;

/// Reads a row selection sent by a front-end. Anything that is not a
/// non-negative row number means no row was chosen.
pub fn parse_row_index(selection: &str) -> InventoryResult<RowIndex> {
    selection
        .trim()
        .parse::<RowIndex>()
        .map_err(|_| InventoryError::NoSelection {
            selection: selection.to_string(),
        })
}

/// Markers that select every category in a category-filtered listing.
pub const ALL_CATEGORIES_MARKERS: [&str; 2] = ["ALL", "TÜMÜ"];

/// Marker offered first in the category filter options.
pub const ALL_CATEGORIES_MARKER: &str = "TÜMÜ";

/// Upper-cases a taxonomy name after trimming surrounding whitespace.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_uppercase()
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Whether a category selection means "every category".
pub fn is_all_categories(selected: &str) -> bool {
    let selected = normalize_name(selected);
    ALL_CATEGORIES_MARKERS.iter().any(|marker| *marker == selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  nike "), "NIKE");
        assert_eq!(normalize_name("ayakkabı"), "AYAKKABI");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn test_parse_row_index() {
        assert_eq!(parse_row_index("0").unwrap(), 0);
        assert_eq!(parse_row_index(" 12 ").unwrap(), 12);
        for selection in ["-1", "", "abc", "1.5"] {
            let err = parse_row_index(selection).unwrap_err();
            assert!(matches!(err, InventoryError::NoSelection { .. }));
            assert_eq!(err.kind(), crate::error::ErrorKind::InvalidIndex);
        }
    }

    #[test]
    fn test_all_categories_markers() {
        assert!(is_all_categories("ALL"));
        assert!(is_all_categories("all"));
        assert!(is_all_categories("Tümü"));
        assert!(is_all_categories("TÜMÜ"));
        assert!(!is_all_categories("SHOE"));
        assert!(!is_all_categories(""));
    }
}
