use utoipa::{Modify, OpenApi};

use crate::core::error::ErrorBody;
use crate::features::products::{dtos as products_dtos, handlers as products_handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        products_handlers::list_products,
        products_handlers::search_products,
        products_handlers::get_product,
        products_handlers::create_product,
        products_handlers::update_product,
        products_handlers::delete_product,
    ),
    components(
        schemas(
            ErrorBody,
            products_dtos::ProductResponseDto,
            products_dtos::CreateProductDto,
            products_dtos::UpdateProductDto,
            products_dtos::DeleteProductResponseDto,
        )
    ),
    tags(
        (name = "productos", description = "Catálogo de productos automotrices (CRUD y búsqueda)"),
    ),
    info(
        title = "API de Productos Automotrices",
        version = "1.0.0",
        description = "CRUD y búsqueda sobre el catálogo de productos automotrices",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
