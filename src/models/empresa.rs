//! Modelo de Empresa
//!
//! Formulario para el alta explícita de una empresa bajo un agente existente.
//! En el onboarding la empresa se sintetiza desde el nombre del agente y no
//! usa este formulario.

use serde::Deserialize;
use validator::Validate;

/// Datos para crear una empresa con campos explícitos
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EmpresaForm {
    #[validate(length(min = 1))]
    pub razon_social: String,

    #[validate(length(min = 1))]
    pub nombre_comercial: String,

    pub tipo_persona: String,

    pub direccion: String,
}
