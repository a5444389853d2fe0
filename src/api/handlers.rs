use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    Json as RequestJson,
};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{ErrorKind, InventoryError};
use crate::logic::InventorySession;
use crate::model::{parse_row_index, CascadeSummary, Listing, Product, ProductRow, SearchCriteria};
use crate::store::InventoryGateway;

/// The single session shared by every request. The lock is never held across an await.
pub type AppState<G> = Arc<Mutex<InventorySession<G>>>;

pub fn app_state<G: InventoryGateway>(session: InventorySession<G>) -> AppState<G> {
    Arc::new(Mutex::new(session))
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ListResponse<T> {
    fn new(items: Vec<T>) -> Self {
        let total = items.len();
        Self {
            items,
            total,
            message: None,
        }
    }
}

impl From<Listing> for ListResponse<ProductRow> {
    fn from(listing: Listing) -> Self {
        Self {
            message: listing.message,
            ..Self::new(listing.rows)
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}

impl ErrorResponse {
    pub fn new(error: &InventoryError) -> Self {
        Self {
            error: error.to_string(),
            kind: error.kind().code().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NewTaxonomyEntry {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TaxonomyEntryResponse {
    pub name: String,
}

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::DuplicateCode | ErrorKind::DuplicateEntry => StatusCode::CONFLICT,
        ErrorKind::NotFound | ErrorKind::InvalidIndex => StatusCode::NOT_FOUND,
        ErrorKind::Persistence => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(error: InventoryError) -> (StatusCode, Json<ErrorResponse>) {
    (status_for(error.kind()), Json(ErrorResponse::new(&error)))
}

// Products

pub async fn list_products<G: InventoryGateway>(
    State(state): State<AppState<G>>,
) -> Json<ListResponse<ProductRow>> {
    let rows = state.lock().list_products();
    Json(ListResponse::new(rows))
}

pub async fn add_product<G: InventoryGateway>(
    State(state): State<AppState<G>>,
    RequestJson(product): RequestJson<Product>,
) -> Result<(StatusCode, Json<ProductRow>), (StatusCode, Json<ErrorResponse>)> {
    match state.lock().add_product(product) {
        Ok(row) => Ok((StatusCode::CREATED, Json(row))),
        Err(e) => Err(error_response(e)),
    }
}

pub async fn update_product<G: InventoryGateway>(
    State(state): State<AppState<G>>,
    Path(selection): Path<String>,
    RequestJson(product): RequestJson<Product>,
) -> ApiResult<ProductRow> {
    parse_row_index(&selection)
        .and_then(|index| state.lock().update_product(index, product))
        .map(Json)
        .map_err(error_response)
}

pub async fn delete_product<G: InventoryGateway>(
    State(state): State<AppState<G>>,
    Path(selection): Path<String>,
) -> ApiResult<Product> {
    parse_row_index(&selection)
        .and_then(|index| state.lock().delete_product(index))
        .map(Json)
        .map_err(error_response)
}

pub async fn list_products_by_category<G: InventoryGateway>(
    State(state): State<AppState<G>>,
    Path(category): Path<String>,
) -> Json<ListResponse<ProductRow>> {
    let listing = state.lock().list_by_category(&category);
    Json(listing.into())
}

pub async fn search_products<G: InventoryGateway>(
    State(state): State<AppState<G>>,
    Query(criteria): Query<SearchCriteria>,
) -> Json<ListResponse<ProductRow>> {
    let listing = state.lock().search(&criteria);
    Json(listing.into())
}

// Brands and categories

pub async fn list_brands<G: InventoryGateway>(
    State(state): State<AppState<G>>,
) -> Json<ListResponse<String>> {
    let brands = state.lock().brands().to_vec();
    Json(ListResponse::new(brands))
}

pub async fn create_brand<G: InventoryGateway>(
    State(state): State<AppState<G>>,
    RequestJson(entry): RequestJson<NewTaxonomyEntry>,
) -> Result<(StatusCode, Json<TaxonomyEntryResponse>), (StatusCode, Json<ErrorResponse>)> {
    match state.lock().create_brand(&entry.name) {
        Ok(name) => Ok((StatusCode::CREATED, Json(TaxonomyEntryResponse { name }))),
        Err(e) => Err(error_response(e)),
    }
}

pub async fn delete_brand<G: InventoryGateway>(
    State(state): State<AppState<G>>,
    Path(name): Path<String>,
) -> ApiResult<CascadeSummary> {
    state
        .lock()
        .delete_brand(&name)
        .map(Json)
        .map_err(error_response)
}

pub async fn list_categories<G: InventoryGateway>(
    State(state): State<AppState<G>>,
) -> Json<ListResponse<String>> {
    let categories = state.lock().categories().to_vec();
    Json(ListResponse::new(categories))
}

pub async fn category_filter_options<G: InventoryGateway>(
    State(state): State<AppState<G>>,
) -> Json<ListResponse<String>> {
    let options = state.lock().category_filter_options();
    Json(ListResponse::new(options))
}

pub async fn create_category<G: InventoryGateway>(
    State(state): State<AppState<G>>,
    RequestJson(entry): RequestJson<NewTaxonomyEntry>,
) -> Result<(StatusCode, Json<TaxonomyEntryResponse>), (StatusCode, Json<ErrorResponse>)> {
    match state.lock().create_category(&entry.name) {
        Ok(name) => Ok((StatusCode::CREATED, Json(TaxonomyEntryResponse { name }))),
        Err(e) => Err(error_response(e)),
    }
}

pub async fn delete_category<G: InventoryGateway>(
    State(state): State<AppState<G>>,
    Path(name): Path<String>,
) -> ApiResult<CascadeSummary> {
    state
        .lock()
        .delete_category(&name)
        .map(Json)
        .map_err(error_response)
}
