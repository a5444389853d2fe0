use crate::error::PersistenceError;
use crate::model::{Product, TaxonomyFile};

/// Moves the session's state to and from durable storage.
///
/// Loads treat a missing backing file as empty state. Saves overwrite the
/// whole backing file.
pub trait InventoryGateway: Send + Sync {
    fn load_products(&self) -> Result<Vec<Product>, PersistenceError>;
    fn save_products(&self, products: &[Product]) -> Result<(), PersistenceError>;
    fn load_taxonomy(&self) -> Result<TaxonomyFile, PersistenceError>;
    fn save_taxonomy(&self, taxonomy: &TaxonomyFile) -> Result<(), PersistenceError>;
}
