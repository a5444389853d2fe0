use axum::{
    routing::{delete, get, put},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::api::handlers::{self, AppState};
use crate::store::InventoryGateway;

pub fn create_router<G: InventoryGateway + 'static>() -> Router<AppState<G>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Products
        .route(
            "/products",
            get(handlers::list_products::<G>).post(handlers::add_product::<G>),
        )
        .route(
            "/products/:index",
            put(handlers::update_product::<G>).delete(handlers::delete_product::<G>),
        )
        .route(
            "/products/category/:category",
            get(handlers::list_products_by_category::<G>),
        )
        .route("/products/search", get(handlers::search_products::<G>))
        // Brands
        .route(
            "/brands",
            get(handlers::list_brands::<G>).post(handlers::create_brand::<G>),
        )
        .route("/brands/:name", delete(handlers::delete_brand::<G>))
        // Categories
        .route(
            "/categories",
            get(handlers::list_categories::<G>).post(handlers::create_category::<G>),
        )
        .route(
            "/categories/filter-options",
            get(handlers::category_filter_options::<G>),
        )
        .route("/categories/:name", delete(handlers::delete_category::<G>))
        // Front-ends may be served from another origin.
        .layer(CorsLayer::permissive())
}
