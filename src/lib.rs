pub mod api;
pub mod config;
pub mod error;
pub mod logic;
pub mod model;
pub mod seed;
pub mod store;

// Export API types
pub use api::handlers;
pub use api::routes;

pub use error::{ErrorKind, InventoryError, InventoryResult, PersistenceError};

pub use logic::{ColorKeyAssigner, InventorySession, ViewEngine};

// Export all model types
pub use model::*;

pub use seed::load_seed_data;

// Export store types
pub use store::{FileGateway, InventoryGateway, MemoryGateway, RecordStore, TaxonomyStore};

/// Serves the session's HTTP surface on an already bound listener.
pub async fn serve<G: InventoryGateway + 'static>(
    listener: tokio::net::TcpListener,
    session: InventorySession<G>,
) -> anyhow::Result<()> {
    let app = api::routes::create_router::<G>().with_state(api::handlers::app_state(session));
    axum::serve(listener, app).await?;
    Ok(())
}
