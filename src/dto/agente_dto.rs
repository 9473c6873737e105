//! Payload de alta de agentes
//!
//! El wire format mezcla inglés y español: el formulario llega en español y
//! el endpoint de agentes espera los campos renombrados en inglés.

use serde::Serialize;

/// Request para `POST /v1/mia/agentes`
#[derive(Debug, Clone, Serialize)]
pub struct CrearAgenteRequest {
    pub name: String,
    #[serde(rename = "secondName")]
    pub second_name: String,
    pub lastname1: String,
    pub lastname2: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub gender: String,
    pub id: String,
}
