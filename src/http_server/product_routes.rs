//! Product HTTP Routes
//!
//! One handler per route, translating between HTTP and the product store.

use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::store::{Product, ProductInput, ProductStore};

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// State shared across product handlers
pub struct ProductState {
    pub store: Arc<dyn ProductStore>,
}

impl ProductState {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }
}

// ==================
// Response Types
// ==================

/// Body returned by a successful delete
#[derive(Debug, Serialize)]
pub struct DeletionResponse {
    pub result: String,
}

impl DeletionResponse {
    fn successful() -> Self {
        Self {
            result: "successful deletion".to_string(),
        }
    }
}

// ==================
// Router
// ==================

/// Build the product router
pub fn product_routes(state: Arc<ProductState>) -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/product", post(create_product))
        .route(
            "/product/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// Parse the id path parameter; anything but an integer is a 400
fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>().map_err(|_| ApiError::InvalidId)
}

/// Decode the JSON body; any extractor rejection becomes a 400
fn decode_payload(body: Result<Json<ProductInput>, JsonRejection>) -> ApiResult<ProductInput> {
    let Json(input) = body.map_err(|_| ApiError::InvalidPayload)?;
    Ok(input)
}

/// GET /products
async fn list_products(State(state): State<Arc<ProductState>>) -> ApiResult<Json<Vec<Product>>> {
    let products = state.store.list().await?;
    Ok(Json(products))
}

/// GET /product/{id}
async fn get_product(
    State(state): State<Arc<ProductState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    let id = parse_id(&id)?;
    let product = state.store.get(id).await?;
    Ok(Json(product))
}

/// POST /product
async fn create_product(
    State(state): State<Arc<ProductState>>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let input = decode_payload(body)?;
    let product = state.store.create(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /product/{id}
async fn update_product(
    State(state): State<Arc<ProductState>>,
    Path(id): Path<String>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let id = parse_id(&id)?;
    let input = decode_payload(body)?;
    let product = state.store.update(id, input).await?;
    Ok(Json(product))
}

/// DELETE /product/{id}
async fn delete_product(
    State(state): State<Arc<ProductState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeletionResponse>> {
    let id = parse_id(&id)?;
    state.store.delete(id).await?;
    Ok(Json(DeletionResponse::successful()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryProductStore;

    #[test]
    fn test_parse_id_accepts_integers() {
        assert_eq!(parse_id("7").unwrap(), 7);
    }

    #[test]
    fn test_parse_id_rejects_non_numeric() {
        assert!(matches!(parse_id("abc"), Err(ApiError::InvalidId)));
        assert!(matches!(parse_id("1.5"), Err(ApiError::InvalidId)));
        assert!(matches!(parse_id(""), Err(ApiError::InvalidId)));
    }

    #[test]
    fn test_deletion_response_body() {
        let json = serde_json::to_value(DeletionResponse::successful()).unwrap();
        assert_eq!(json, serde_json::json!({"result": "successful deletion"}));
    }

    #[test]
    fn test_router_builds() {
        let state = Arc::new(ProductState::new(Arc::new(InMemoryProductStore::new())));
        let _router = product_routes(state);
    }
}
