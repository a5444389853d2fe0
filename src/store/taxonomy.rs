use itertools::Itertools;
use log::info;

use crate::error::{InventoryError, InventoryResult};
use crate::model::{normalize_name, TaxonomyFile, TaxonomyKind, ALL_CATEGORIES_MARKER};

/// User-managed brand and category names, kept upper-cased and unique per kind.
///
/// Removing an entry does not touch any product; the session cascades the
/// removal into the record store.
#[derive(Debug, Clone, Default)]
pub struct TaxonomyStore {
    brands: Vec<String>,
    categories: Vec<String>,
}

impl TaxonomyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the sidecar contents, upper-casing values and dropping blanks and repeats.
    pub fn from_file(file: TaxonomyFile) -> Self {
        Self {
            brands: normalize_all(file.brands),
            categories: normalize_all(file.categories),
        }
    }

    pub fn to_file(&self) -> TaxonomyFile {
        TaxonomyFile {
            brands: self.brands.clone(),
            categories: self.categories.clone(),
        }
    }

    /// Adds a brand and returns its normalized name.
    pub fn add_brand(&mut self, name: &str) -> InventoryResult<String> {
        self.add(TaxonomyKind::Brand, name)
    }

    pub fn add_category(&mut self, name: &str) -> InventoryResult<String> {
        self.add(TaxonomyKind::Category, name)
    }

    /// Removes a brand and returns the stored name, which is what records are cascaded on.
    pub fn remove_brand(&mut self, name: &str) -> InventoryResult<String> {
        self.remove(TaxonomyKind::Brand, name)
    }

    pub fn remove_category(&mut self, name: &str) -> InventoryResult<String> {
        self.remove(TaxonomyKind::Category, name)
    }

    pub fn list_brands(&self) -> &[String] {
        &self.brands
    }

    pub fn list_categories(&self) -> &[String] {
        &self.categories
    }

    pub fn contains(&self, kind: TaxonomyKind, name: &str) -> bool {
        let name = normalize_name(name);
        self.entries(kind).iter().any(|entry| *entry == name)
    }

    /// Choices for a category-filtered listing: the all-categories marker, then every category.
    pub fn category_filter_options(&self) -> Vec<String> {
        std::iter::once(ALL_CATEGORIES_MARKER.to_string())
            .chain(self.categories.iter().cloned())
            .collect()
    }

    fn add(&mut self, kind: TaxonomyKind, name: &str) -> InventoryResult<String> {
        let name = normalize_name(name);
        if name.is_empty() {
            return Err(InventoryError::Validation { field: field_name(kind) });
        }
        if self.contains(kind, &name) {
            return Err(InventoryError::DuplicateEntry { kind, name });
        }
        info!("Created {} '{}'", kind, name);
        self.entries_mut(kind).push(name.clone());
        Ok(name)
    }

    fn remove(&mut self, kind: TaxonomyKind, name: &str) -> InventoryResult<String> {
        let wanted = normalize_name(name);
        let entries = self.entries_mut(kind);
        match entries.iter().position(|entry| *entry == wanted) {
            Some(position) => {
                let removed = entries.remove(position);
                info!("Removed {} '{}'", kind, removed);
                Ok(removed)
            }
            None => Err(InventoryError::NotFound { kind, name: wanted }),
        }
    }

    fn entries(&self, kind: TaxonomyKind) -> &Vec<String> {
        match kind {
            TaxonomyKind::Brand => &self.brands,
            TaxonomyKind::Category => &self.categories,
        }
    }

    fn entries_mut(&mut self, kind: TaxonomyKind) -> &mut Vec<String> {
        match kind {
            TaxonomyKind::Brand => &mut self.brands,
            TaxonomyKind::Category => &mut self.categories,
        }
    }
}

fn field_name(kind: TaxonomyKind) -> &'static str {
    match kind {
        TaxonomyKind::Brand => "brand",
        TaxonomyKind::Category => "category",
    }
}

fn normalize_all(names: Vec<String>) -> Vec<String> {
    names
        .iter()
        .map(|name| normalize_name(name))
        .filter(|name| !name.is_empty())
        .unique()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_add_normalizes_to_uppercase() {
        let mut taxonomy = TaxonomyStore::new();
        assert_eq!(taxonomy.add_brand(" nike ").unwrap(), "NIKE");
        assert_eq!(taxonomy.add_category("Shoe").unwrap(), "SHOE");
        assert_eq!(taxonomy.list_brands(), &["NIKE".to_string()]);
        assert_eq!(taxonomy.list_categories(), &["SHOE".to_string()]);
    }

    #[test]
    fn test_add_rejects_duplicates_after_normalization() {
        let mut taxonomy = TaxonomyStore::new();
        taxonomy.add_brand("NIKE").unwrap();
        let err = taxonomy.add_brand("nike").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateEntry);
        assert_eq!(taxonomy.list_brands().len(), 1);

        // Same name in the other taxonomy is fine.
        taxonomy.add_category("nike").unwrap();
    }

    #[test]
    fn test_add_rejects_blank() {
        let mut taxonomy = TaxonomyStore::new();
        let err = taxonomy.add_category("   ").unwrap_err();
        assert!(matches!(err, InventoryError::Validation { field: "category" }));
        assert!(taxonomy.list_categories().is_empty());
    }

    #[test]
    fn test_remove_missing_entry_is_not_found() {
        let mut taxonomy = TaxonomyStore::new();
        taxonomy.add_brand("NIKE").unwrap();
        let err = taxonomy.remove_brand("PUMA").unwrap_err();
        assert!(matches!(
            err,
            InventoryError::NotFound { kind: TaxonomyKind::Brand, ref name } if name == "PUMA"
        ));
        let err = taxonomy.remove_category("NIKE").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_remove_keeps_order_of_remaining_entries() {
        let mut taxonomy = TaxonomyStore::new();
        for brand in ["NIKE", "PUMA", "ADIDAS"] {
            taxonomy.add_brand(brand).unwrap();
        }
        assert_eq!(taxonomy.remove_brand("puma").unwrap(), "PUMA");
        assert_eq!(taxonomy.list_brands(), &["NIKE".to_string(), "ADIDAS".to_string()]);
        assert!(!taxonomy.contains(TaxonomyKind::Brand, "PUMA"));
    }

    #[test]
    fn test_from_file_uppercases_and_dedupes() {
        let taxonomy = TaxonomyStore::from_file(TaxonomyFile {
            brands: vec!["nike".into(), "NIKE".into(), "".into(), "puma".into()],
            categories: vec!["shoe".into()],
        });
        assert_eq!(taxonomy.list_brands(), &["NIKE".to_string(), "PUMA".to_string()]);
        assert_eq!(taxonomy.to_file().categories, vec!["SHOE".to_string()]);
    }

    #[test]
    fn test_category_filter_options_lead_with_marker() {
        let mut taxonomy = TaxonomyStore::new();
        taxonomy.add_category("SHOE").unwrap();
        taxonomy.add_category("BAG").unwrap();
        assert_eq!(taxonomy.category_filter_options(), vec!["TÜMÜ", "SHOE", "BAG"]);
    }
}
