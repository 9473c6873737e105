//! Payloads de viajeros
//!
//! El alta exige que `segundo_nombre` y `apellido_materno` viajen siempre
//! (un solo espacio cuando faltan) y que `fecha_nacimiento` vaya normalizada
//! a `YYYY-MM-DD 00:00:00`.

use serde::{Deserialize, Serialize};

/// Request para `POST /v1/mia/viajeros`
#[derive(Debug, Clone, Serialize)]
pub struct CrearViajeroRequest {
    pub id_empresa: String,
    pub primer_nombre: String,
    pub segundo_nombre: String,
    pub apellido_paterno: String,
    pub apellido_materno: String,
    pub correo: String,
    pub telefono: String,
    pub genero: String,
    pub fecha_nacimiento: String,
}

/// Registro de viajero como lo devuelve `GET /v1/mia/solicitud/withviajero`
#[derive(Debug, Clone, Deserialize)]
pub struct ViajeroRecord {
    #[serde(default)]
    pub primer_nombre: Option<String>,
    #[serde(default)]
    pub segundo_nombre: Option<String>,
    #[serde(default)]
    pub apellido_paterno: Option<String>,
    #[serde(default)]
    pub apellido_materno: Option<String>,
}
