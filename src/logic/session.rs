use log::{info, warn};

use crate::error::{InventoryError, InventoryResult, PersistenceError};
use crate::logic::{empty_category_message, ViewEngine, EMPTY_SEARCH_MESSAGE};
use crate::model::{
    CascadeSummary, Listing, Product, ProductRow, RowIndex, SearchCriteria, TaxonomyKind,
};
use crate::store::{InventoryGateway, RecordStore, TaxonomyStore};

/// Which files a mutation has to rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Records,
    Taxonomy,
    Both,
}

/// One user's working session over the inventory.
///
/// Owns the record store, the taxonomy, the view engine (and with it the color
/// cache) and the gateway. Every successful mutation rewrites the affected
/// file; if that write fails the mutation is rolled back and the error returned.
#[derive(Debug)]
pub struct InventorySession<G: InventoryGateway> {
    records: RecordStore,
    taxonomy: TaxonomyStore,
    views: ViewEngine,
    gateway: G,
}

impl<G: InventoryGateway> InventorySession<G> {
    /// Loads products and taxonomy through `gateway`.
    pub fn open(gateway: G) -> InventoryResult<Self> {
        let records = RecordStore::from_products(gateway.load_products()?);
        let taxonomy = TaxonomyStore::from_file(gateway.load_taxonomy()?);
        info!(
            "Opened inventory: {} product(s), {} brand(s), {} category(ies)",
            records.len(),
            taxonomy.list_brands().len(),
            taxonomy.list_categories().len()
        );
        Ok(Self {
            records,
            taxonomy,
            views: ViewEngine::new(),
            gateway,
        })
    }

    pub fn add_product(&mut self, product: Product) -> InventoryResult<ProductRow> {
        let code = product.code.clone();
        self.commit(Scope::Records, |records, _| records.add(product))?;
        info!("Added product '{}'", code);
        self.row(self.records.len() - 1)
    }

    pub fn update_product(&mut self, index: RowIndex, product: Product) -> InventoryResult<ProductRow> {
        self.commit(Scope::Records, |records, _| records.update(index, product))?;
        info!("Updated product at row {}", index);
        self.row(index)
    }

    pub fn delete_product(&mut self, index: RowIndex) -> InventoryResult<Product> {
        let removed = self.commit(Scope::Records, |records, _| records.delete_at(index))?;
        info!("Deleted product '{}' from row {}", removed.code, index);
        Ok(removed)
    }

    pub fn create_brand(&mut self, name: &str) -> InventoryResult<String> {
        self.commit(Scope::Taxonomy, |_, taxonomy| taxonomy.add_brand(name))
    }

    pub fn create_category(&mut self, name: &str) -> InventoryResult<String> {
        self.commit(Scope::Taxonomy, |_, taxonomy| taxonomy.add_category(name))
    }

    /// Removes the brand and every product whose brand field is exactly that name.
    pub fn delete_brand(&mut self, name: &str) -> InventoryResult<CascadeSummary> {
        self.commit(Scope::Both, |records, taxonomy| {
            let name = taxonomy.remove_brand(name)?;
            let removed_products = records.delete_where_brand(&name);
            Ok(CascadeSummary {
                kind: TaxonomyKind::Brand,
                name,
                removed_products,
            })
        })
    }

    /// Removes the category and every product whose category field is exactly that name.
    pub fn delete_category(&mut self, name: &str) -> InventoryResult<CascadeSummary> {
        self.commit(Scope::Both, |records, taxonomy| {
            let name = taxonomy.remove_category(name)?;
            let removed_products = records.delete_where_category(&name);
            Ok(CascadeSummary {
                kind: TaxonomyKind::Category,
                name,
                removed_products,
            })
        })
    }

    pub fn list_products(&mut self) -> Vec<ProductRow> {
        self.views.list_all(&self.records)
    }

    pub fn list_by_category(&mut self, selected: &str) -> Listing {
        let rows = self.views.list_by_category(&self.records, selected);
        Listing::with_empty_message(rows, || empty_category_message(selected))
    }

    pub fn search(&mut self, criteria: &SearchCriteria) -> Listing {
        let rows = self.views.search(&self.records, criteria);
        Listing::with_empty_message(rows, || EMPTY_SEARCH_MESSAGE.to_string())
    }

    pub fn brands(&self) -> &[String] {
        self.taxonomy.list_brands()
    }

    pub fn categories(&self) -> &[String] {
        self.taxonomy.list_categories()
    }

    pub fn category_filter_options(&self) -> Vec<String> {
        self.taxonomy.category_filter_options()
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    pub fn taxonomy(&self) -> &TaxonomyStore {
        &self.taxonomy
    }

    pub fn views(&self) -> &ViewEngine {
        &self.views
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    fn row(&mut self, index: RowIndex) -> InventoryResult<ProductRow> {
        self.views
            .row(&self.records, index)
            .ok_or(InventoryError::InvalidIndex {
                index,
                len: self.records.len(),
            })
    }

    fn commit<T>(
        &mut self,
        scope: Scope,
        op: impl FnOnce(&mut RecordStore, &mut TaxonomyStore) -> InventoryResult<T>,
    ) -> InventoryResult<T> {
        let records_before = self.records.clone();
        let taxonomy_before = self.taxonomy.clone();

        let result = op(&mut self.records, &mut self.taxonomy)
            .and_then(|value| self.persist(scope).map(|()| value).map_err(InventoryError::from));

        if let Err(e) = &result {
            self.records = records_before;
            self.taxonomy = taxonomy_before;
            if let InventoryError::Persistence(_) = e {
                warn!("Rolled back change after failed write: {}", e);
                // A partial write may already have landed; put the files back in step.
                if let Err(restore) = self.persist(scope) {
                    warn!("Could not restore inventory files: {}", restore);
                }
            }
        }
        result
    }

    fn persist(&self, scope: Scope) -> Result<(), PersistenceError> {
        if matches!(scope, Scope::Records | Scope::Both) {
            self.gateway.save_products(self.records.all())?;
        }
        if matches!(scope, Scope::Taxonomy | Scope::Both) {
            self.gateway.save_taxonomy(&self.taxonomy.to_file())?;
        }
        Ok(())
    }
}
