use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// Custom JSON extractor so body parse failures use the same
/// `{"error": ...}` shape as every other error response.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection(rejection)),
        }
    }
}

pub struct AppJsonRejection(JsonRejection);

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        let message = match self.0 {
            JsonRejection::JsonDataError(err) => format!("Cuerpo JSON inválido: {}", err),
            JsonRejection::JsonSyntaxError(err) => format!("Sintaxis JSON inválida: {}", err),
            JsonRejection::MissingJsonContentType(_) => {
                "Se requiere el encabezado Content-Type: application/json".to_string()
            }
            _ => "No se pudo interpretar el cuerpo JSON".to_string(),
        };

        AppError::Validation(message).into_response()
    }
}
