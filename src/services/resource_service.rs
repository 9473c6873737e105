//! Servicio de creación de recursos en la API de MIA
//!
//! Una operación por recurso: agente, empresa (sintetizada desde el
//! onboarding o con campos explícitos) y viajero. El backend confirma cada
//! alta con un mensaje de texto libre; cualquier otro mensaje se trata como
//! rechazo. Cada llamada emite exactamente un request, sin reintentos, y los
//! fallos de transporte se propagan al caller sin capturarse aquí.

use std::sync::Arc;

use crate::client::MiaClient;
use crate::dto::{CrearAgenteRequest, CrearEmpresaRequest, CrearResponse, CrearViajeroRequest};
use crate::models::{AgenteForm, EmpresaForm};
use crate::utils::errors::ApiError;
use crate::utils::normalize::{espacio_si_vacio, nombre_completo, normalizar_fecha_nacimiento};

/// Literal con el que el backend confirma altas de agentes (y, por reuso del
/// backend, también de empresas)
pub const MSG_AGENTE_CREADO: &str = "Agente creado correctamente";
/// Literal con el que el backend confirma altas de viajeros
pub const MSG_VIAJERO_CREADO: &str = "Viajero creado correctamente";

/// Resultado discriminado de una llamada de creación.
///
/// `Rejected` conserva el mensaje literal del servidor solo como diagnóstico;
/// la decisión de éxito ya está tomada en el discriminante.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created { id: Option<String> },
    Rejected { message: String },
}

impl CreateOutcome {
    pub fn success(&self) -> bool {
        matches!(self, CreateOutcome::Created { .. })
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            CreateOutcome::Created { id } => id.as_deref(),
            CreateOutcome::Rejected { .. } => None,
        }
    }
}

/// Servicio de altas contra `/v1/mia/{agentes,empresas,viajeros}`
pub struct ResourceService {
    client: Arc<MiaClient>,
}

impl ResourceService {
    pub fn new(client: Arc<MiaClient>) -> Self {
        Self { client }
    }

    /// Crea el agente con el id dado (`POST /v1/mia/agentes`).
    pub async fn crear_agente(
        &self,
        form: &AgenteForm,
        id: &str,
    ) -> Result<CreateOutcome, ApiError> {
        let request = CrearAgenteRequest {
            name: form.primer_nombre.clone(),
            second_name: form.segundo_nombre.clone().unwrap_or_default(),
            lastname1: form.apellido_paterno.clone(),
            lastname2: form.apellido_materno.clone().unwrap_or_default(),
            email: form.correo.clone(),
            phone: form.telefono.clone(),
            password: form.password.clone(),
            gender: form.genero.clone(),
            id: id.to_string(),
        };

        log::info!("👤 Creando agente para {}", form.correo);
        let response: CrearResponse = self.client.post_json("/v1/mia/agentes", &request).await?;

        if response.message == MSG_AGENTE_CREADO {
            Ok(CreateOutcome::Created {
                id: Some(id.to_string()),
            })
        } else {
            log::warn!("⚠️ Alta de agente rechazada: {}", response.message);
            Ok(CreateOutcome::Rejected {
                message: response.message,
            })
        }
    }

    /// Crea la empresa del onboarding: razón social y nombre comercial
    /// sintetizados desde el nombre del agente, persona física, sin dirección.
    pub async fn crear_empresa_onboarding(
        &self,
        form: &AgenteForm,
        agente_id: &str,
    ) -> Result<CreateOutcome, ApiError> {
        let nombre_empresa = nombre_completo(form.partes_nombre());
        let request = CrearEmpresaRequest {
            agente_id: agente_id.to_string(),
            razon_social: nombre_empresa.clone(),
            nombre_comercial: nombre_empresa,
            tipo_persona: "fisica".to_string(),
            direccion: " ".to_string(),
        };
        self.enviar_empresa(request).await
    }

    /// Crea una empresa con campos explícitos.
    pub async fn crear_empresa(
        &self,
        form: &EmpresaForm,
        agente_id: &str,
    ) -> Result<CreateOutcome, ApiError> {
        let request = CrearEmpresaRequest {
            agente_id: agente_id.to_string(),
            razon_social: form.razon_social.clone(),
            nombre_comercial: form.nombre_comercial.clone(),
            tipo_persona: form.tipo_persona.clone(),
            direccion: form.direccion.clone(),
        };
        self.enviar_empresa(request).await
    }

    async fn enviar_empresa(
        &self,
        request: CrearEmpresaRequest,
    ) -> Result<CreateOutcome, ApiError> {
        log::info!("🏢 Creando empresa para agente {}", request.agente_id);
        let response: CrearResponse = self.client.post_json("/v1/mia/empresas", &request).await?;

        // el backend responde con el literal de agentes también en empresas
        if response.message == MSG_AGENTE_CREADO {
            Ok(CreateOutcome::Created {
                id: response.data.and_then(|data| data.id_empresa),
            })
        } else {
            log::warn!("⚠️ Alta de empresa rechazada: {}", response.message);
            Ok(CreateOutcome::Rejected {
                message: response.message,
            })
        }
    }

    /// Crea el viajero bajo la empresa dada (`POST /v1/mia/viajeros`).
    ///
    /// `segundo_nombre` y `apellido_materno` nunca viajan vacíos: el backend
    /// espera un solo espacio cuando faltan.
    pub async fn crear_viajero(
        &self,
        form: &AgenteForm,
        id_empresa: &str,
    ) -> Result<CreateOutcome, ApiError> {
        let request = CrearViajeroRequest {
            id_empresa: id_empresa.to_string(),
            primer_nombre: form.primer_nombre.clone(),
            segundo_nombre: espacio_si_vacio(form.segundo_nombre.as_deref()),
            apellido_paterno: form.apellido_paterno.clone(),
            apellido_materno: espacio_si_vacio(form.apellido_materno.as_deref()),
            correo: form.correo.clone(),
            telefono: form.telefono.clone(),
            genero: form.genero.clone(),
            fecha_nacimiento: normalizar_fecha_nacimiento(&form.fecha_nacimiento)?,
        };

        log::info!("🧳 Creando viajero en empresa {}", id_empresa);
        let response: CrearResponse = self.client.post_json("/v1/mia/viajeros", &request).await?;

        if response.message == MSG_VIAJERO_CREADO {
            Ok(CreateOutcome::Created { id: None })
        } else {
            log::warn!("⚠️ Alta de viajero rechazada: {}", response.message);
            Ok(CreateOutcome::Rejected {
                message: response.message,
            })
        }
    }
}
