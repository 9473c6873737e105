//! Sistema de manejo de errores
//!
//! Taxonomía de errores del núcleo: fallos de transporte (fetch rechazado,
//! body que no parsea), fallos de decodificación, validación de formularios
//! y datos faltantes en respuestas que sí parsearon.

use thiserror::Error;

/// Errores del cliente de la API de MIA
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Fecha inválida: {0}")]
    InvalidDate(String),

    #[error("Datos faltantes: {0}")]
    MissingData(String),
}
