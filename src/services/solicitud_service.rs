//! Servicio de solicitudes de reserva
//!
//! Crea solicitudes (generando el confirmation code cuando falta) y lista las
//! solicitudes de un usuario remapeadas al esquema de display, con el nombre
//! del viajero más reciente como `traveler_id`.

use std::sync::Arc;

use rand::Rng;

use crate::client::MiaClient;
use crate::dto::{CrearSolicitudRequest, SolicitudPayload, SolicitudRecord, ViajeroRecord};
use crate::models::{BookingForm, ReservaCliente};
use crate::utils::errors::ApiError;
use crate::utils::normalize::nombre_completo;

const HOTEL_SIN_NOMBRE: &str = "Sin nombre";

/// Servicio contra `/v1/mia/solicitud`
pub struct SolicitudService {
    client: Arc<MiaClient>,
}

impl SolicitudService {
    pub fn new(client: Arc<MiaClient>) -> Self {
        Self { client }
    }

    /// Crea una solicitud de reserva para el viajero dado.
    ///
    /// El confirmation code del formulario se respeta tal cual; solo se
    /// genera uno nuevo cuando falta. La solicitud viaja como batch de un
    /// elemento con `status: "pending"` y la respuesta del servidor se
    /// devuelve sin normalizar.
    pub async fn crear_solicitud(
        &self,
        form: &BookingForm,
        id_viajero: &str,
    ) -> Result<serde_json::Value, ApiError> {
        let confirmation_code = match &form.confirmation_code {
            Some(code) if !code.is_empty() => code.clone(),
            _ => generar_confirmation_code(),
        };

        let payload = SolicitudPayload {
            confirmation_code,
            id_viajero: id_viajero.to_string(),
            hotel: form
                .hotel_name
                .clone()
                .filter(|hotel| !hotel.is_empty())
                .unwrap_or_else(|| HOTEL_SIN_NOMBRE.to_string()),
            check_in: form.check_in.clone(),
            check_out: form.check_out.clone(),
            room: form.room_type.clone(),
            total: form.total_price,
            status: "pending".to_string(),
        };

        let request = CrearSolicitudRequest {
            solicitudes: vec![payload],
        };

        log::info!("🏨 Creando solicitud para viajero {}", id_viajero);
        self.client.post_json("/v1/mia/solicitud", &request).await
    }

    /// Lista las solicitudes del usuario con el viajero más reciente unido.
    ///
    /// Primero resuelve el último viajero asociado al usuario y deriva su
    /// nombre completo; después remapea cada registro crudo al esquema de
    /// display. Los fallos se devuelven tipados: el caller decide si degrada
    /// a lista vacía o muestra el error.
    pub async fn obtener_solicitudes(
        &self,
        user_id: &str,
    ) -> Result<Vec<ReservaCliente>, ApiError> {
        let viajeros: Vec<ViajeroRecord> = self
            .client
            .get_json(&format!(
                "/v1/mia/solicitud/withviajero?id={}",
                urlencoding::encode(user_id)
            ))
            .await?;

        let viajero = viajeros.last().ok_or_else(|| {
            ApiError::MissingData(format!("el usuario {user_id} no tiene viajeros asociados"))
        })?;
        let traveler_id = nombre_completo([
            viajero.primer_nombre.as_deref().unwrap_or(""),
            viajero.segundo_nombre.as_deref().unwrap_or(""),
            viajero.apellido_paterno.as_deref().unwrap_or(""),
            viajero.apellido_materno.as_deref().unwrap_or(""),
        ]);

        let registros: Vec<SolicitudRecord> = self
            .client
            .get_json(&format!(
                "/v1/mia/solicitud/client?user_id={}",
                urlencoding::encode(user_id)
            ))
            .await?;

        log::info!(
            "📋 {} solicitudes para el usuario {}",
            registros.len(),
            user_id
        );
        Ok(registros
            .into_iter()
            .map(|registro| reserva_para_cliente(registro, &traveler_id))
            .collect())
    }
}

/// Genera un confirmation code decimal en `[0, 999999999]`.
pub fn generar_confirmation_code() -> String {
    rand::thread_rng().gen_range(0u32..=999_999_999).to_string()
}

fn reserva_para_cliente(registro: SolicitudRecord, traveler_id: &str) -> ReservaCliente {
    ReservaCliente {
        id: registro.id_solicitud.unwrap_or_default(),
        confirmation_code: registro.confirmation_code.unwrap_or_default(),
        hotel_name: registro.hotel.unwrap_or_default(),
        check_in: registro.check_in.unwrap_or_default(),
        check_out: registro.check_out.unwrap_or_default(),
        room_type: registro.room.unwrap_or_default(),
        total_price: registro.total,
        // el backend persiste "pending", pero la vista de cliente siempre
        // reporta "completed" (comportamiento heredado)
        status: "completed".to_string(),
        traveler_id: traveler_id.to_string(),
        created_at: registro.created_at.unwrap_or_default(),
        image_url: String::new(),
        is_booking: registro.is_booking,
        factura: registro.id_facturama,
        pendiente_por_cobrar: registro.pendiente_por_cobrar,
        id_pago: registro.id_pago,
    }
}
