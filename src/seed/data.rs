use crate::error::InventoryResult;
use crate::logic::InventorySession;
use crate::model::Product;
use crate::store::InventoryGateway;
use log::info;

const BRANDS: [&str; 3] = ["NIKE", "ADIDAS", "PUMA"];
const CATEGORIES: [&str; 3] = ["SHOE", "BAG", "HAT"];

fn demo_products() -> Vec<Product> {
    vec![
        Product::new("NK-001", "NIKE", "SHOE", "Air Zoom", "50", "100", "Running shoe"),
        Product::new("NK-002", "NIKE", "BAG", "Brasilia", "12000", "35", "Training duffel"),
        Product::new("AD-001", "ADIDAS", "SHOE", "Samba", "9999", "90", "Indoor classic"),
        Product::new("AD-002", "ADIDAS", "HAT", "Trefoil Cap", "on order", "20", ""),
        Product::new("PM-001", "PUMA", "SHOE", "Suede", "25000", "75", "Lifestyle"),
    ]
}

/// Fills an empty session with a few brands, categories and products.
///
/// Returns `false` without touching anything when the session already holds data.
pub fn load_seed_data<G: InventoryGateway>(session: &mut InventorySession<G>) -> InventoryResult<bool> {
    if !session.records().is_empty()
        || !session.brands().is_empty()
        || !session.categories().is_empty()
    {
        info!("Inventory not empty, skipping seed data");
        return Ok(false);
    }

    for brand in BRANDS {
        session.create_brand(brand)?;
    }
    for category in CATEGORIES {
        session.create_category(category)?;
    }
    for product in demo_products() {
        session.add_product(product)?;
    }
    info!(
        "Seeded {} brand(s), {} category(ies), {} product(s)",
        BRANDS.len(),
        CATEGORIES.len(),
        session.records().len()
    );
    Ok(true)
}
