use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database row for `productos_automotrices`.
///
/// `especificaciones` holds serialized JSON text; it is parsed back into a
/// structured value at the DTO boundary. `activo` drives logical deletion:
/// rows are never physically removed.
#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: i32,
    pub codigo: String,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub categoria: String,
    pub marca: Option<String>,
    pub precio: Decimal,
    pub stock: i32,
    pub especificaciones: Option<String>,
    pub fecha_creacion: DateTime<Utc>,
    pub activo: bool,
}
