//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. La api key y la URL base
//! se inyectan desde el entorno en el arranque; nunca viven en el código.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub mia_base_url: String,
    pub mia_api_key: String,
    pub http_timeout_secs: u64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            mia_base_url: env::var("MIA_API_BASE_URL").expect("MIA_API_BASE_URL must be set"),
            mia_api_key: env::var("MIA_API_KEY").expect("MIA_API_KEY must be set"),
            http_timeout_secs: env::var("MIA_HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .expect("MIA_HTTP_TIMEOUT_SECS must be a valid number"),
        }
    }
}

impl EnvironmentConfig {
    /// Construir una configuración explícita (tests, herramientas)
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            environment: "test".to_string(),
            mia_base_url: base_url.into(),
            mia_api_key: api_key.into(),
            http_timeout_secs: 30,
        }
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
