use log::{info, warn};

use crate::error::{InventoryError, InventoryResult};
use crate::model::{is_blank, Product, RowIndex};

/// Ordered collection of products with unique codes.
///
/// Insertion order is the only ordering; no projection re-sorts it.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    products: Vec<Product>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from loaded rows. Rows with a blank code or name, or
    /// repeating an earlier code, are skipped.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut store = Self::new();
        for (row, product) in products.into_iter().enumerate() {
            if let Err(e) = store.add(product) {
                warn!("Skipping inventory row {}: {}", row + 1, e);
            }
        }
        store
    }

    pub fn add(&mut self, product: Product) -> InventoryResult<()> {
        validate(&product)?;
        if self.position_of(&product.code).is_some() {
            return Err(InventoryError::DuplicateCode { code: product.code });
        }
        self.products.push(product);
        Ok(())
    }

    /// Replaces the product at `index`, keeping its position.
    pub fn update(&mut self, index: RowIndex, product: Product) -> InventoryResult<()> {
        self.check_index(index)?;
        validate(&product)?;
        if matches!(self.position_of(&product.code), Some(other) if other != index) {
            return Err(InventoryError::DuplicateCode { code: product.code });
        }
        self.products[index] = product;
        Ok(())
    }

    pub fn delete_at(&mut self, index: RowIndex) -> InventoryResult<Product> {
        self.check_index(index)?;
        Ok(self.products.remove(index))
    }

    /// Removes every product whose stored brand equals `brand` exactly.
    pub fn delete_where_brand(&mut self, brand: &str) -> usize {
        let removed = self.retain(|product| product.brand != brand);
        info!("Removed {} product(s) with brand '{}'", removed, brand);
        removed
    }

    /// Removes every product whose stored category equals `category` exactly.
    pub fn delete_where_category(&mut self, category: &str) -> usize {
        let removed = self.retain(|product| product.category != category);
        info!("Removed {} product(s) with category '{}'", removed, category);
        removed
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, index: RowIndex) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn position_of(&self, code: &str) -> Option<RowIndex> {
        self.products.iter().position(|product| product.code == code)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn retain(&mut self, keep: impl Fn(&Product) -> bool) -> usize {
        let before = self.products.len();
        self.products.retain(|product| keep(product));
        before - self.products.len()
    }

    fn check_index(&self, index: RowIndex) -> InventoryResult<()> {
        if index < self.products.len() {
            Ok(())
        } else {
            Err(InventoryError::InvalidIndex {
                index,
                len: self.products.len(),
            })
        }
    }
}

fn validate(product: &Product) -> InventoryResult<()> {
    if is_blank(&product.code) {
        return Err(InventoryError::Validation { field: "code" });
    }
    if is_blank(&product.name) {
        return Err(InventoryError::Validation { field: "name" });
    }
    Ok(())
}
