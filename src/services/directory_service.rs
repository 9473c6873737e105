//! Consultas de directorio del agente
//!
//! Dos lecturas simples para las pantallas de listado: empresas asociadas a
//! un agente y viajeros de sus empresas. El JSON del servidor se devuelve
//! tal cual, sin contrato de reshaping.

use std::sync::Arc;

use crate::client::MiaClient;
use crate::utils::errors::ApiError;

/// Servicio de lecturas contra `/v1/mia/agentes/*`
pub struct DirectoryService {
    client: Arc<MiaClient>,
}

impl DirectoryService {
    pub fn new(client: Arc<MiaClient>) -> Self {
        Self { client }
    }

    /// Empresas asociadas al agente; passthrough del JSON del servidor.
    pub async fn empresas_por_agente(
        &self,
        agent_id: &str,
    ) -> Result<serde_json::Value, ApiError> {
        log::info!("🏢 Obteniendo empresas del agente {}", agent_id);
        self.client
            .get_json(&format!(
                "/v1/mia/agentes/empresas-con-agentes?id_agente={}",
                urlencoding::encode(agent_id)
            ))
            .await
    }

    /// Viajeros de las empresas del agente; passthrough del JSON del servidor.
    pub async fn viajeros_por_agente(
        &self,
        agent_id: &str,
    ) -> Result<serde_json::Value, ApiError> {
        log::info!("🧳 Obteniendo viajeros del agente {}", agent_id);
        self.client
            .get_json(&format!(
                "/v1/mia/agentes/viajeros-con-empresas?id_agente={}",
                urlencoding::encode(agent_id)
            ))
            .await
    }
}
