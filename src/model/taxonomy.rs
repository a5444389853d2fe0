use serde::{Deserialize, Serialize};

/// Which taxonomy an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxonomyKind {
    Brand,
    Category,
}

impl std::fmt::Display for TaxonomyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TaxonomyKind::Brand => write!(f, "brand"),
            TaxonomyKind::Category => write!(f, "category"),
        }
    }
}

/// On-disk shape of the taxonomy sidecar file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyFile {
    #[serde(default)]
    pub brands: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Result of removing a taxonomy entry together with the records that used it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeSummary {
    pub kind: TaxonomyKind,
    pub name: String,
    pub removed_products: usize,
}
