use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::products::dtos::{
    CreateProductDto, DeleteProductResponseDto, ProductResponseDto, UpdateProductDto,
};
use crate::features::products::services::{ProductFilters, ProductService};
use crate::shared::validation::parse_activo_flag;

/// Query params for listing products
#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    pub categoria: Option<String>,
    pub marca: Option<String>,
    /// Strict "true"/"false"; defaults to true when absent
    pub activo: Option<String>,
}

/// Query params for product search
#[derive(Debug, Deserialize)]
pub struct SearchProductsQuery {
    #[serde(default)]
    pub q: String,
}

/// List products with optional filters
///
/// `activo` defaults to true; `categoria` and `marca` are
/// case-insensitive substring matches.
#[utoipa::path(
    get,
    path = "/api/productos",
    params(
        ("categoria" = Option<String>, Query, description = "Substring filter on category"),
        ("marca" = Option<String>, Query, description = "Substring filter on brand"),
        ("activo" = Option<String>, Query, description = "true/false, default true")
    ),
    responses(
        (status = 200, description = "List of products", body = Vec<ProductResponseDto>),
        (status = 400, description = "Unrecognized activo value", body = crate::core::error::ErrorBody),
        (status = 500, description = "Store failure", body = crate::core::error::ErrorBody)
    ),
    tag = "productos"
)]
pub async fn list_products(
    State(service): State<Arc<ProductService>>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<Vec<ProductResponseDto>>> {
    let activo = parse_activo_flag(query.activo.as_deref()).map_err(AppError::Validation)?;
    let products = service
        .list(ProductFilters::new(query.categoria, query.marca, activo))
        .await?;
    Ok(Json(products))
}

/// Search active products by term over nombre, descripcion and codigo
///
/// An empty or whitespace-only `q` returns an empty list.
#[utoipa::path(
    get,
    path = "/api/productos/buscar",
    params(
        ("q" = Option<String>, Query, description = "Search term")
    ),
    responses(
        (status = 200, description = "Matching active products (possibly empty)", body = Vec<ProductResponseDto>),
        (status = 500, description = "Store failure", body = crate::core::error::ErrorBody)
    ),
    tag = "productos"
)]
pub async fn search_products(
    State(service): State<Arc<ProductService>>,
    Query(query): Query<SearchProductsQuery>,
) -> Result<Json<Vec<ProductResponseDto>>> {
    let products = service.search(&query.q).await?;
    Ok(Json(products))
}

/// Get a product by id
///
/// Ignores the `activo` flag: logically deleted products are still returned.
#[utoipa::path(
    get,
    path = "/api/productos/{id}",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponseDto),
        (status = 404, description = "Unknown id", body = crate::core::error::ErrorBody)
    ),
    tag = "productos"
)]
pub async fn get_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<i32>,
) -> Result<Json<ProductResponseDto>> {
    let product = service.get(id).await?;
    Ok(Json(product))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/api/productos",
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductResponseDto),
        (status = 400, description = "Missing fields, malformed especificaciones or duplicate codigo", body = crate::core::error::ErrorBody),
        (status = 500, description = "Store failure", body = crate::core::error::ErrorBody)
    ),
    tag = "productos"
)]
pub async fn create_product(
    State(service): State<Arc<ProductService>>,
    AppJson(payload): AppJson<CreateProductDto>,
) -> Result<(StatusCode, Json<ProductResponseDto>)> {
    let product = service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Partially update a product
///
/// Only the fields present in the body are overwritten.
#[utoipa::path(
    put,
    path = "/api/productos/{id}",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = ProductResponseDto),
        (status = 400, description = "Malformed especificaciones or duplicate codigo", body = crate::core::error::ErrorBody),
        (status = 404, description = "Unknown id", body = crate::core::error::ErrorBody),
        (status = 500, description = "Store failure", body = crate::core::error::ErrorBody)
    ),
    tag = "productos"
)]
pub async fn update_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateProductDto>,
) -> Result<Json<ProductResponseDto>> {
    let product = service.update(id, payload).await?;
    Ok(Json(product))
}

/// Logically delete a product (sets activo = false)
#[utoipa::path(
    delete,
    path = "/api/productos/{id}",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product deactivated", body = DeleteProductResponseDto),
        (status = 404, description = "Unknown id", body = crate::core::error::ErrorBody),
        (status = 500, description = "Store failure", body = crate::core::error::ErrorBody)
    ),
    tag = "productos"
)]
pub async fn delete_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteProductResponseDto>> {
    service.logical_delete(id).await?;
    Ok(Json(DeleteProductResponseDto {
        mensaje: "Producto desactivado correctamente".to_string(),
    }))
}
