use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::products::handlers;
use crate::features::products::services::ProductService;

/// Create routes for the products feature.
///
/// `/api/productos/buscar` is registered alongside `/api/productos/{id}`;
/// axum prefers the static segment, so `buscar` never parses as an id.
pub fn routes(service: Arc<ProductService>) -> Router {
    Router::new()
        .route(
            "/api/productos",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route("/api/productos/buscar", get(handlers::search_products))
        .route(
            "/api/productos/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .with_state(service)
}
