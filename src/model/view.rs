use serde::{Deserialize, Serialize};

use crate::model::{Product, RgbColor, RowIndex};

/// A product annotated for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRow {
    /// Position in the record store; use it to address update and delete.
    pub index: RowIndex,
    pub product: Product,
    pub color: RgbColor,
    pub low_stock: bool,
}

/// Rows of a filtered projection, with a note for the user when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub rows: Vec<ProductRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Listing {
    /// Attaches `message` only when `rows` is empty.
    pub fn with_empty_message(rows: Vec<ProductRow>, message: impl FnOnce() -> String) -> Self {
        let message = if rows.is_empty() { Some(message()) } else { None };
        Self { rows, message }
    }
}

/// Options for a multi-field product search.
///
/// Each provided, non-blank option is matched case-insensitively as a
/// substring of the corresponding product field. All provided options must match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<String>,
}

impl SearchCriteria {
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn stock(mut self, stock: impl Into<String>) -> Self {
        self.stock = Some(stock.into());
        self
    }

    /// Whether the product satisfies every provided option.
    pub fn matches(&self, product: &Product) -> bool {
        [
            (&self.code, &product.code),
            (&self.brand, &product.brand),
            (&self.category, &product.category),
            (&self.stock, &product.stock_quantity),
        ]
        .into_iter()
        .all(|(needle, field)| match needle.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(needle) => field.to_lowercase().contains(&needle.to_lowercase()),
        })
    }

    pub fn is_empty(&self) -> bool {
        [&self.code, &self.brand, &self.category, &self.stock]
            .into_iter()
            .all(|option| option.as_deref().map_or(true, |value| value.trim().is_empty()))
    }
}
