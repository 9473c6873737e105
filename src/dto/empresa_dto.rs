//! Payload de alta de empresas

use serde::Serialize;

/// Request para `POST /v1/mia/empresas`
#[derive(Debug, Clone, Serialize)]
pub struct CrearEmpresaRequest {
    pub agente_id: String,
    pub razon_social: String,
    pub nombre_comercial: String,
    pub tipo_persona: String,
    pub direccion: String,
}
