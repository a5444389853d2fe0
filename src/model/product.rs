use serde::{Deserialize, Serialize};

/// Column headers of the tabular inventory file, in storage order.
pub const PRODUCT_COLUMNS: [&str; 7] = [
    "code",
    "brand",
    "category",
    "name",
    "stock_quantity",
    "unit_price",
    "description",
];

/// A single inventory record.
///
/// `stock_quantity` and `unit_price` are kept as the text the user typed.
/// Stock is only read as a number when it is made entirely of digits (see
/// [`Product::is_low_stock`]); price is never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub stock_quantity: String,
    #[serde(default)]
    pub unit_price: String,
    #[serde(default)]
    pub description: String,
}

/// Stock strictly below this value is flagged as low.
pub const LOW_STOCK_THRESHOLD: u64 = 10_000;

impl Product {
    pub fn new(
        code: impl Into<String>,
        brand: impl Into<String>,
        category: impl Into<String>,
        name: impl Into<String>,
        stock_quantity: impl Into<String>,
        unit_price: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            brand: brand.into(),
            category: category.into(),
            name: name.into(),
            stock_quantity: stock_quantity.into(),
            unit_price: unit_price.into(),
            description: description.into(),
        }
    }

    /// Fields in [`PRODUCT_COLUMNS`] order.
    pub fn to_row(&self) -> [&str; 7] {
        [
            self.code.as_str(),
            self.brand.as_str(),
            self.category.as_str(),
            self.name.as_str(),
            self.stock_quantity.as_str(),
            self.unit_price.as_str(),
            self.description.as_str(),
        ]
    }

    /// Builds a product from positional fields; missing trailing fields are empty.
    pub fn from_row<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut fields = fields.into_iter().map(str::to_string);
        let mut next = || fields.next().unwrap_or_default();
        Self {
            code: next(),
            brand: next(),
            category: next(),
            name: next(),
            stock_quantity: next(),
            unit_price: next(),
            description: next(),
        }
    }

    /// True iff the stock is non-empty, all ASCII digits, and below [`LOW_STOCK_THRESHOLD`].
    pub fn is_low_stock(&self) -> bool {
        is_low_stock(&self.stock_quantity)
    }
}

pub fn is_low_stock(stock: &str) -> bool {
    if stock.is_empty() || !stock.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    // Digit strings too long for u64 are far above the threshold.
    match stock.parse::<u64>() {
        Ok(value) => value < LOW_STOCK_THRESHOLD,
        Err(_) => false,
    }
}
