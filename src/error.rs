//! Error types for the inventory session.
//!
//! Every failure a front-end can trigger maps to one [`InventoryError`]
//! variant, and every variant carries a stable machine-readable code
//! ([`InventoryError::kind`]) so callers can choose a message without
//! inspecting the display text.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::{RowIndex, TaxonomyKind};

/// Failures reading or writing the inventory files.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed inventory file {}: {}", .path.display(), .source)]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed taxonomy file {}: {}", .path.display(), .source)]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors surfaced to the front-end. None of them end the session.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A required field was blank.
    #[error("{field} must not be blank")]
    Validation { field: &'static str },

    #[error("product code '{code}' already exists")]
    DuplicateCode { code: String },

    #[error("{kind} '{name}' already exists")]
    DuplicateEntry { kind: TaxonomyKind, name: String },

    #[error("{kind} '{name}' not found")]
    NotFound { kind: TaxonomyKind, name: String },

    /// No product at the addressed row.
    #[error("no product at row {index} (store holds {len})")]
    InvalidIndex { index: RowIndex, len: usize },

    /// The row selection is not a row number at all, e.g. `-1` for "nothing selected".
    #[error("no product selected ('{selection}')")]
    NoSelection { selection: String },

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Stable error codes, one per [`InventoryError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    DuplicateCode,
    DuplicateEntry,
    NotFound,
    InvalidIndex,
    Persistence,
}

impl ErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::DuplicateCode => "duplicate_code",
            ErrorKind::DuplicateEntry => "duplicate_entry",
            ErrorKind::NotFound => "not_found",
            ErrorKind::InvalidIndex => "invalid_index",
            ErrorKind::Persistence => "persistence",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl InventoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InventoryError::Validation { .. } => ErrorKind::Validation,
            InventoryError::DuplicateCode { .. } => ErrorKind::DuplicateCode,
            InventoryError::DuplicateEntry { .. } => ErrorKind::DuplicateEntry,
            InventoryError::NotFound { .. } => ErrorKind::NotFound,
            InventoryError::InvalidIndex { .. } | InventoryError::NoSelection { .. } => {
                ErrorKind::InvalidIndex
            }
            InventoryError::Persistence(_) => ErrorKind::Persistence,
        }
    }
}

pub type InventoryResult<T> = Result<T, InventoryError>;
