//! Modelos de reserva
//!
//! `BookingForm` es lo que llega de la UI al crear una solicitud;
//! `ReservaCliente` es el registro ya remapeado que consume la vista de
//! "mis reservas".

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Formulario de reserva desde la UI
#[derive(Debug, Clone, Deserialize)]
pub struct BookingForm {
    pub hotel_name: Option<String>,
    pub check_in: String,
    pub check_out: String,
    pub room_type: String,
    pub total_price: f64,
    /// Si ya existe, se respeta; nunca se regenera para la misma reserva
    pub confirmation_code: Option<String>,
}

/// Registro de reserva listo para la UI del cliente
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReservaCliente {
    pub id: String,
    pub confirmation_code: String,
    pub hotel_name: String,
    pub check_in: String,
    pub check_out: String,
    pub room_type: String,
    pub total_price: f64,
    pub status: String,
    /// Nombre completo del viajero más reciente del usuario
    pub traveler_id: String,
    pub created_at: String,
    pub image_url: String,
    pub is_booking: bool,
    /// Id de factura (CFDI) aguas abajo; passthrough, la facturación no vive aquí
    pub factura: Option<String>,
    pub pendiente_por_cobrar: Value,
    pub id_pago: Option<String>,
}
