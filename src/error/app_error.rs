use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    DuplicateProductId,
    DuplicateListingId,
    ProductNotFound,
    ListingNotFound,
    Validation(String),
    ConfigError(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DuplicateProductId => write!(f, "ID prodotto già esistente"),
            AppError::DuplicateListingId => write!(f, "ID inserzione già esistente"),
            AppError::ProductNotFound => write!(f, "Prodotto non trovato"),
            AppError::ListingNotFound => write!(f, "Inserzione non trovata"),
            AppError::Validation(msg) => write!(f, "Richiesta non valida: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Errore di configurazione: {}", msg),
            AppError::Internal(msg) => write!(f, "Errore interno: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::DuplicateProductId | AppError::DuplicateListingId => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::ProductNotFound | AppError::ListingNotFound => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::ConfigError(ref msg) => {
                tracing::error!("Configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Errore interno del server".to_string(),
                )
            }
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Errore interno del server".to_string(),
                )
            }
        };

        let body = Json(json!({
            "message": error_message,
        }));

        (status, body).into_response()
    }
}
