//! Modelo de Agente
//!
//! Formulario de intake del onboarding. El mismo formulario alimenta el alta
//! del agente, la síntesis del nombre de la empresa y el alta del viajero.

use serde::Deserialize;
use validator::Validate;

/// Datos de intake para el onboarding de un agente
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AgenteForm {
    #[validate(length(min = 1))]
    pub primer_nombre: String,

    pub segundo_nombre: Option<String>,

    #[validate(length(min = 1))]
    pub apellido_paterno: String,

    pub apellido_materno: Option<String>,

    #[validate(email)]
    pub correo: String,

    pub telefono: String,

    #[validate(length(min = 8))]
    pub password: String,

    pub genero: String,

    /// Fecha de nacimiento en cualquier formato parseable; se normaliza a
    /// `YYYY-MM-DD 00:00:00` antes de enviarse
    pub fecha_nacimiento: String,

    /// Id pre-asignado por la capa de autenticación; si falta se genera un
    /// UUID v4 al arrancar el onboarding
    pub id: Option<String>,
}

impl AgenteForm {
    /// Las cuatro partes del nombre en orden de display
    pub fn partes_nombre(&self) -> [&str; 4] {
        [
            &self.primer_nombre,
            self.segundo_nombre.as_deref().unwrap_or(""),
            &self.apellido_paterno,
            self.apellido_materno.as_deref().unwrap_or(""),
        ]
    }
}
