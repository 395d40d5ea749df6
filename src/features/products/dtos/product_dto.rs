use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::features::products::models::Product;
use crate::shared::validation::especificaciones_to_value;

/// Wire representation of a product. `especificaciones` is returned as the
/// parsed structure (`{}` when the row has none); `precio` is a JSON number.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponseDto {
    pub id: i32,
    pub codigo: String,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub categoria: String,
    pub marca: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub precio: Decimal,
    pub stock: i32,
    #[schema(value_type = Object)]
    pub especificaciones: Value,
    pub fecha_creacion: DateTime<Utc>,
    pub activo: bool,
}

impl From<Product> for ProductResponseDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            codigo: p.codigo,
            nombre: p.nombre,
            descripcion: p.descripcion,
            categoria: p.categoria,
            marca: p.marca,
            precio: p.precio,
            stock: p.stock,
            especificaciones: especificaciones_to_value(p.especificaciones.as_deref()),
            fecha_creacion: p.fecha_creacion,
            activo: p.activo,
        }
    }
}

/// Create payload. Every field is optional at the serde level so that
/// missing required fields surface as the contract's
/// "Faltan campos requeridos" instead of a deserialization rejection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProductDto {
    pub codigo: Option<String>,
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub categoria: Option<String>,
    pub marca: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub precio: Option<Decimal>,
    pub stock: Option<i32>,
    #[schema(value_type = Option<Object>)]
    pub especificaciones: Option<Value>,
    pub activo: Option<bool>,
}

/// Deserializes a field that was present in the body into `Some(..)`,
/// preserving an explicit JSON `null` as `Some(None)`. Combined with
/// `#[serde(default)]`, an absent key stays `None`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Partial update payload. Only keys present in the body are touched.
/// Nullable columns use a nested `Option` so an explicit JSON `null`
/// clears the value while an absent key leaves it unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductDto {
    pub codigo: Option<String>,
    pub nombre: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub descripcion: Option<Option<String>>,
    pub categoria: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub marca: Option<Option<String>>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub precio: Option<Decimal>,
    pub stock: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Object>)]
    pub especificaciones: Option<Option<Value>>,
    pub activo: Option<bool>,
}

/// Confirmation body for the logical delete endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteProductResponseDto {
    pub mensaje: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn sample_product() -> Product {
        Product {
            id: 7,
            codigo: "F100".to_string(),
            nombre: "Filtro de aceite".to_string(),
            descripcion: None,
            categoria: "filtros".to_string(),
            marca: Some("Bosch".to_string()),
            precio: Decimal::new(1050, 2),
            stock: 0,
            especificaciones: Some(r#"{"torque":"50Nm"}"#.to_string()),
            fecha_creacion: "2024-05-01T12:00:00Z".parse().unwrap(),
            activo: true,
        }
    }

    #[test]
    fn response_uses_spanish_wire_keys_and_numeric_precio() {
        let dto: ProductResponseDto = sample_product().into();
        let value = serde_json::to_value(&dto).unwrap();

        assert_eq!(value["codigo"], json!("F100"));
        assert_eq!(value["precio"], json!(10.5));
        assert_eq!(value["stock"], json!(0));
        assert_eq!(value["especificaciones"], json!({"torque": "50Nm"}));
        assert_eq!(value["activo"], json!(true));
        assert!(value["fecha_creacion"].as_str().unwrap().starts_with("2024-05-01T12:00:00"));
    }

    #[test]
    fn response_defaults_especificaciones_to_empty_object() {
        let mut product = sample_product();
        product.especificaciones = None;
        let dto: ProductResponseDto = product.into();
        assert_eq!(dto.especificaciones, json!({}));
    }

    #[test]
    fn create_payload_tolerates_missing_fields() {
        let dto: CreateProductDto = serde_json::from_value(json!({"codigo": "F100"})).unwrap();
        assert_eq!(dto.codigo.as_deref(), Some("F100"));
        assert!(dto.nombre.is_none());
        assert!(dto.precio.is_none());
    }

    #[test]
    fn create_payload_parses_numeric_precio() {
        let dto: CreateProductDto =
            serde_json::from_value(json!({"precio": 10.5})).unwrap();
        assert_eq!(dto.precio, Some(Decimal::new(105, 1)));
    }

    #[test]
    fn update_distinguishes_absent_from_null() {
        let dto: UpdateProductDto =
            serde_json::from_value(json!({"marca": null, "stock": 3})).unwrap();
        assert_eq!(dto.marca, Some(None));
        assert_eq!(dto.stock, Some(3));
        assert_eq!(dto.descripcion, None);
    }

    #[test]
    fn update_empty_payload_has_no_recognized_fields() {
        let dto: UpdateProductDto = serde_json::from_value(json!({})).unwrap();
        assert!(dto.codigo.is_none());
        assert!(dto.precio.is_none());
        assert!(dto.especificaciones.is_none());
        assert!(dto.activo.is_none());
    }
}
