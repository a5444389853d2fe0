use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::StorageConfig;
use crate::error::PersistenceError;
use crate::model::{Product, TaxonomyFile, PRODUCT_COLUMNS};
use crate::store::InventoryGateway;

/// Gateway backed by a CSV inventory file and a JSON taxonomy sidecar.
#[derive(Debug, Clone)]
pub struct FileGateway {
    records_path: PathBuf,
    taxonomy_path: PathBuf,
}

impl FileGateway {
    pub fn new(records_path: impl Into<PathBuf>, taxonomy_path: impl Into<PathBuf>) -> Self {
        Self {
            records_path: records_path.into(),
            taxonomy_path: taxonomy_path.into(),
        }
    }

    pub fn from_config(storage: &StorageConfig) -> Self {
        Self::new(storage.records_path(), storage.taxonomy_path())
    }

    pub fn records_path(&self) -> &Path {
        &self.records_path
    }

    pub fn taxonomy_path(&self) -> &Path {
        &self.taxonomy_path
    }
}

impl InventoryGateway for FileGateway {
    fn load_products(&self) -> Result<Vec<Product>, PersistenceError> {
        let path = &self.records_path;
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No inventory file at {}, starting empty", path.display());
                return Ok(Vec::new());
            }
            Err(source) => return Err(io_error(path, source)),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let mut products = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|source| csv_error(path, source))?;
            products.push(Product::from_row(record.iter()));
        }
        debug!("Loaded {} product(s) from {}", products.len(), path.display());
        Ok(products)
    }

    fn save_products(&self, products: &[Product]) -> Result<(), PersistenceError> {
        let path = &self.records_path;
        ensure_parent(path)?;

        let mut writer = csv::Writer::from_path(path).map_err(|source| csv_error(path, source))?;
        writer
            .write_record(PRODUCT_COLUMNS)
            .map_err(|source| csv_error(path, source))?;
        for product in products {
            writer
                .write_record(product.to_row())
                .map_err(|source| csv_error(path, source))?;
        }
        writer.flush().map_err(|source| io_error(path, source))?;
        debug!("Saved {} product(s) to {}", products.len(), path.display());
        Ok(())
    }

    fn load_taxonomy(&self) -> Result<TaxonomyFile, PersistenceError> {
        let path = &self.taxonomy_path;
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No taxonomy file at {}, starting empty", path.display());
                return Ok(TaxonomyFile::default());
            }
            Err(source) => return Err(io_error(path, source)),
        };
        serde_json::from_str(&contents).map_err(|source| PersistenceError::Json {
            path: path.clone(),
            source,
        })
    }

    fn save_taxonomy(&self, taxonomy: &TaxonomyFile) -> Result<(), PersistenceError> {
        let path = &self.taxonomy_path;
        ensure_parent(path)?;
        let contents =
            serde_json::to_string_pretty(taxonomy).map_err(|source| PersistenceError::Json {
                path: path.clone(),
                source,
            })?;
        std::fs::write(path, contents).map_err(|source| io_error(path, source))
    }
}

fn ensure_parent(path: &Path) -> Result<(), PersistenceError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|source| io_error(parent, source))
        }
        _ => Ok(()),
    }
}

fn io_error(path: &Path, source: std::io::Error) -> PersistenceError {
    PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn csv_error(path: &Path, source: csv::Error) -> PersistenceError {
    PersistenceError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn gateway(dir: &Path) -> FileGateway {
        FileGateway::new(dir.join("inventory.csv"), dir.join("brands_and_categories.json"))
    }

    #[test]
    fn test_missing_files_load_as_empty() {
        let dir = tempdir().unwrap();
        let gateway = gateway(dir.path());
        assert!(gateway.load_products().unwrap().is_empty());
        assert_eq!(gateway.load_taxonomy().unwrap(), TaxonomyFile::default());
    }

    #[test]
    fn test_products_round_trip_in_order() {
        let dir = tempdir().unwrap();
        let gateway = gateway(dir.path());
        let products = vec![
            Product::new("A1", "NIKE", "SHOE", "Air", "50", "100", "x"),
            Product::new("B2", "PUMA", "BAG", "Duffel, large", "lots", "", "says \"hi\""),
            Product::new("C3", "", "", "Çanta", "0012", "9.99", "line\nbreak"),
        ];

        gateway.save_products(&products).unwrap();
        assert_eq!(gateway.load_products().unwrap(), products);
    }

    #[test]
    fn test_file_has_header_row_in_column_order() {
        let dir = tempdir().unwrap();
        let gateway = gateway(dir.path());
        gateway
            .save_products(&[Product::new("A1", "NIKE", "SHOE", "Air", "50", "100", "x")])
            .unwrap();

        let contents = std::fs::read_to_string(gateway.records_path()).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("code,brand,category,name,stock_quantity,unit_price,description")
        );
        assert_eq!(lines.next(), Some("A1,NIKE,SHOE,Air,50,100,x"));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let dir = tempdir().unwrap();
        let gateway = gateway(dir.path());
        std::fs::write(
            gateway.records_path(),
            "code,brand,category,name,stock_quantity,unit_price,description\nA1,NIKE,SHOE,Air\n",
        )
        .unwrap();

        let products = gateway.load_products().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Air");
        assert_eq!(products[0].stock_quantity, "");
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let dir = tempdir().unwrap();
        let gateway = gateway(dir.path());
        gateway
            .save_products(&[
                Product::new("A1", "NIKE", "SHOE", "Air", "50", "100", "x"),
                Product::new("B2", "PUMA", "BAG", "Bag", "5", "10", ""),
            ])
            .unwrap();
        gateway.save_products(&[]).unwrap();
        assert!(gateway.load_products().unwrap().is_empty());
    }

    #[test]
    fn test_taxonomy_round_trip_and_nested_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("data").join("shop");
        let gateway = gateway(&nested);
        let taxonomy = TaxonomyFile {
            brands: vec!["NIKE".into(), "PUMA".into()],
            categories: vec!["SHOE".into()],
        };

        gateway.save_taxonomy(&taxonomy).unwrap();
        assert_eq!(gateway.load_taxonomy().unwrap(), taxonomy);
    }

    #[test]
    fn test_malformed_taxonomy_is_an_error() {
        let dir = tempdir().unwrap();
        let gateway = gateway(dir.path());
        std::fs::write(gateway.taxonomy_path(), "{not json").unwrap();
        let err = gateway.load_taxonomy().unwrap_err();
        assert!(matches!(err, PersistenceError::Json { .. }));
    }
}
