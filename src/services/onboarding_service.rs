//! Orquestador de onboarding: Agente → Empresa → Viajero
//!
//! Los tres pasos corren en secuencia estricta porque cada uno depende del id
//! producido por el anterior. Ante el primer rechazo el flujo se detiene y
//! reporta qué paso falló; no hay borrados compensatorios de los recursos ya
//! creados aguas arriba (el caller decide si reintenta el alta completa).

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

use crate::client::MiaClient;
use crate::models::AgenteForm;
use crate::services::resource_service::{CreateOutcome, ResourceService};
use crate::utils::errors::ApiError;

/// Paso del onboarding, en orden de ejecución
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    Agente,
    Empresa,
    Viajero,
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OnboardingStep::Agente => write!(f, "agente"),
            OnboardingStep::Empresa => write!(f, "empresa"),
            OnboardingStep::Viajero => write!(f, "viajero"),
        }
    }
}

/// Errores del flujo de onboarding
#[derive(Error, Debug)]
pub enum OnboardingError {
    #[error("El paso '{step}' fue rechazado por el servidor: {message}")]
    StepRejected {
        step: OnboardingStep,
        message: String,
    },

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Ids producidos por un onboarding completo
#[derive(Debug, Clone)]
pub struct OnboardingOutcome {
    pub agente_id: String,
    pub empresa_id: String,
}

/// Orquestador del alta encadenada
pub struct OnboardingService {
    recursos: ResourceService,
}

impl OnboardingService {
    pub fn new(client: Arc<MiaClient>) -> Self {
        Self {
            recursos: ResourceService::new(client),
        }
    }

    /// Ejecuta el alta completa desde un solo formulario de intake.
    ///
    /// El paso n+1 nunca se intenta sin un id exitoso del paso n. Si falta el
    /// id del agente en el formulario se genera un UUID v4.
    pub async fn ejecutar(&self, form: &AgenteForm) -> Result<OnboardingOutcome, OnboardingError> {
        form.validate().map_err(ApiError::from)?;

        let agente_id = form
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let alta_agente = self.recursos.crear_agente(form, &agente_id).await?;
        if let CreateOutcome::Rejected { message } = alta_agente {
            return Err(OnboardingError::StepRejected {
                step: OnboardingStep::Agente,
                message,
            });
        }

        let alta_empresa = self
            .recursos
            .crear_empresa_onboarding(form, &agente_id)
            .await?;
        let empresa_id = match alta_empresa {
            CreateOutcome::Created { id: Some(id) } => id,
            CreateOutcome::Created { id: None } => {
                return Err(ApiError::MissingData(
                    "la respuesta de empresas no incluyó id_empresa".to_string(),
                )
                .into());
            }
            CreateOutcome::Rejected { message } => {
                return Err(OnboardingError::StepRejected {
                    step: OnboardingStep::Empresa,
                    message,
                });
            }
        };

        let alta_viajero = self.recursos.crear_viajero(form, &empresa_id).await?;
        if let CreateOutcome::Rejected { message } = alta_viajero {
            return Err(OnboardingError::StepRejected {
                step: OnboardingStep::Viajero,
                message,
            });
        }

        log::info!(
            "✅ Onboarding completo: agente {} / empresa {}",
            agente_id,
            empresa_id
        );
        Ok(OnboardingOutcome {
            agente_id,
            empresa_id,
        })
    }
}
