use log::debug;

use crate::logic::ColorKeyAssigner;
use crate::model::{is_all_categories, normalize_name, Product, ProductRow, RowIndex, SearchCriteria};
use crate::store::RecordStore;

/// Builds render-ready rows from the record store.
///
/// Every projection goes through one annotation routine, so color keys and
/// low-stock flags are computed the same way everywhere. Rows keep store order.
#[derive(Debug, Default)]
pub struct ViewEngine {
    colors: ColorKeyAssigner,
}

impl ViewEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn colors(&self) -> &ColorKeyAssigner {
        &self.colors
    }

    /// Every product.
    pub fn list_all(&mut self, records: &RecordStore) -> Vec<ProductRow> {
        self.project(records, |_| true)
    }

    /// Products in `selected` (compared upper-cased), or every product when
    /// `selected` is an all-categories marker.
    pub fn list_by_category(&mut self, records: &RecordStore, selected: &str) -> Vec<ProductRow> {
        if is_all_categories(selected) {
            return self.list_all(records);
        }
        let selected = normalize_name(selected);
        self.project(records, |product| product.category.to_uppercase() == selected)
    }

    /// Products matching every provided search option.
    pub fn search(&mut self, records: &RecordStore, criteria: &SearchCriteria) -> Vec<ProductRow> {
        self.project(records, |product| criteria.matches(product))
    }

    /// Annotated row for the product stored at `index`.
    pub fn row(&mut self, records: &RecordStore, index: RowIndex) -> Option<ProductRow> {
        let product = records.get(index)?;
        Some(self.annotate(index, product))
    }

    fn project(
        &mut self,
        records: &RecordStore,
        keep: impl Fn(&Product) -> bool,
    ) -> Vec<ProductRow> {
        let rows: Vec<ProductRow> = records
            .all()
            .iter()
            .enumerate()
            .filter(|(_, product)| keep(*product))
            .map(|(index, product)| self.annotate(index, product))
            .collect();
        debug!("Projected {} of {} product(s)", rows.len(), records.len());
        rows
    }

    fn annotate(&mut self, index: RowIndex, product: &Product) -> ProductRow {
        ProductRow {
            index,
            product: product.clone(),
            color: self.colors.color_for(&product.brand, &product.category),
            low_stock: product.is_low_stock(),
        }
    }
}

/// Informational message for an empty category listing.
pub fn empty_category_message(selected: &str) -> String {
    format!("No products found for category '{}'", normalize_name(selected))
}

pub const EMPTY_SEARCH_MESSAGE: &str = "No products match the search criteria";

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> RecordStore {
        RecordStore::from_products(vec![
            Product::new("A1", "NIKE", "SHOE", "Air", "50", "100", "x"),
            Product::new("B2", "puma", "Bag", "Duffel", "10000", "40", ""),
            Product::new("C3", "Nike", "shoe", "Pegasus", "12a", "90", ""),
            Product::new("D4", "ADIDAS", "HAT", "Cap", "", "15", ""),
        ])
    }

    fn codes(rows: &[ProductRow]) -> Vec<&str> {
        rows.iter().map(|row| row.product.code.as_str()).collect()
    }

    #[test]
    fn test_list_all_annotates_every_row_in_order() {
        let records = store();
        let mut views = ViewEngine::new();
        let rows = views.list_all(&records);

        assert_eq!(codes(&rows), vec!["A1", "B2", "C3", "D4"]);
        assert_eq!(
            rows.iter().map(|row| row.low_stock).collect::<Vec<_>>(),
            vec![true, false, false, false]
        );
        assert_eq!(rows.iter().map(|row| row.index).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        // NIKE/SHOE and Nike/shoe share a key.
        assert_eq!(rows[0].color, rows[2].color);
        assert_eq!(views.colors().len(), 3);
    }

    #[test]
    fn test_colors_are_stable_across_projections() {
        let records = store();
        let mut views = ViewEngine::new();
        let listed = views.list_all(&records);
        let searched = views.search(&records, &SearchCriteria::default().code("b2"));
        let filtered = views.list_by_category(&records, "bag");

        assert_eq!(searched[0].color, listed[1].color);
        assert_eq!(filtered[0].color, listed[1].color);
    }

    #[test]
    fn test_list_by_category_is_case_insensitive() {
        let records = store();
        let mut views = ViewEngine::new();
        let rows = views.list_by_category(&records, "Shoe");
        assert_eq!(codes(&rows), vec!["A1", "C3"]);
        assert_eq!(rows[1].index, 2);
    }

    #[test]
    fn test_list_by_category_ignores_surrounding_whitespace() {
        let records = store();
        let mut views = ViewEngine::new();
        let rows = views.list_by_category(&records, " shoe ");
        assert_eq!(codes(&rows), vec!["A1", "C3"]);
        assert_eq!(views.list_by_category(&records, " all ").len(), 4);
    }

    #[test]
    fn test_list_by_category_all_markers() {
        let records = store();
        let mut views = ViewEngine::new();
        assert_eq!(views.list_by_category(&records, "TÜMÜ").len(), 4);
        assert_eq!(views.list_by_category(&records, "all").len(), 4);
    }

    #[test]
    fn test_list_by_unknown_category_is_empty() {
        let records = store();
        let mut views = ViewEngine::new();
        assert!(views.list_by_category(&records, "SOCKS").is_empty());
        assert_eq!(
            empty_category_message("socks"),
            "No products found for category 'SOCKS'"
        );
    }

    #[test]
    fn test_search_filters_by_substring() {
        let records = store();
        let mut views = ViewEngine::new();

        let rows = views.search(&records, &SearchCriteria::default().brand("nik"));
        assert_eq!(codes(&rows), vec!["A1", "C3"]);

        let rows = views.search(&records, &SearchCriteria::default().brand("nike").stock("12"));
        assert_eq!(codes(&rows), vec!["C3"]);
        assert!(!rows[0].low_stock);

        let rows = views.search(&records, &SearchCriteria::default().category("zzz"));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_search_without_criteria_returns_everything() {
        // Blank options are ignored rather than treated as a pass-through
        // listing; a non-blank option narrows the result.
        let records = store();
        let mut views = ViewEngine::new();
        let criteria = SearchCriteria::default().code("").brand(" ");
        assert_eq!(views.search(&records, &criteria).len(), 4);
        assert_eq!(
            views.search(&records, &SearchCriteria::default().code("A1")).len(),
            1
        );
    }

    #[test]
    fn test_row_for_index() {
        let records = store();
        let mut views = ViewEngine::new();
        let row = views.row(&records, 3).unwrap();
        assert_eq!(row.product.code, "D4");
        assert!(views.row(&records, 4).is_none());
    }
}
