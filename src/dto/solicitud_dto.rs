//! Payloads de solicitudes de reserva
//!
//! La creación viaja como un batch de un solo elemento bajo la clave
//! `solicitudes`. La lectura devuelve registros crudos heterogéneos que el
//! servicio remapea al esquema de display del cliente.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::response_dto::{de_boolish, de_id};

/// Una solicitud dentro del batch de `POST /v1/mia/solicitud`
#[derive(Debug, Clone, Serialize)]
pub struct SolicitudPayload {
    pub confirmation_code: String,
    pub id_viajero: String,
    pub hotel: String,
    pub check_in: String,
    pub check_out: String,
    pub room: String,
    pub total: f64,
    pub status: String,
}

/// Request para `POST /v1/mia/solicitud`
#[derive(Debug, Clone, Serialize)]
pub struct CrearSolicitudRequest {
    pub solicitudes: Vec<SolicitudPayload>,
}

/// Registro crudo como lo devuelve `GET /v1/mia/solicitud/client`
#[derive(Debug, Clone, Deserialize)]
pub struct SolicitudRecord {
    #[serde(default, deserialize_with = "de_id")]
    pub id_solicitud: Option<String>,
    #[serde(default)]
    pub confirmation_code: Option<String>,
    #[serde(default)]
    pub hotel: Option<String>,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub total: f64,
    #[serde(default, deserialize_with = "de_boolish")]
    pub is_booking: bool,
    #[serde(default, deserialize_with = "de_id")]
    pub id_facturama: Option<String>,
    #[serde(default)]
    pub pendiente_por_cobrar: Value,
    #[serde(default, deserialize_with = "de_id")]
    pub id_pago: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}
