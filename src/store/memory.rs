use parking_lot::Mutex;

use crate::error::PersistenceError;
use crate::model::{Product, TaxonomyFile};
use crate::store::InventoryGateway;

/// Gateway that keeps the last saved state in memory. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    products: Mutex<Vec<Product>>,
    taxonomy: Mutex<TaxonomyFile>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from existing state, as if it had been loaded from disk.
    pub fn with_state(products: Vec<Product>, taxonomy: TaxonomyFile) -> Self {
        Self {
            products: Mutex::new(products),
            taxonomy: Mutex::new(taxonomy),
        }
    }

    pub fn saved_products(&self) -> Vec<Product> {
        self.products.lock().clone()
    }

    pub fn saved_taxonomy(&self) -> TaxonomyFile {
        self.taxonomy.lock().clone()
    }
}

impl InventoryGateway for MemoryGateway {
    fn load_products(&self) -> Result<Vec<Product>, PersistenceError> {
        Ok(self.saved_products())
    }

    fn save_products(&self, products: &[Product]) -> Result<(), PersistenceError> {
        *self.products.lock() = products.to_vec();
        Ok(())
    }

    fn load_taxonomy(&self) -> Result<TaxonomyFile, PersistenceError> {
        Ok(self.saved_taxonomy())
    }

    fn save_taxonomy(&self, taxonomy: &TaxonomyFile) -> Result<(), PersistenceError> {
        *self.taxonomy.lock() = taxonomy.clone();
        Ok(())
    }
}
