//! Cliente HTTP para la API de MIA
//!
//! Este módulo contiene el cliente HTTP compartido por todos los servicios.
//! Cada petición lleva los headers estáticos `Content-Type: application/json`
//! y `x-api-key`, y un timeout acotado configurado en el arranque.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::config::environment::EnvironmentConfig;
use crate::utils::errors::ApiError;

/// Cliente HTTP para la API de MIA
pub struct MiaClient {
    client: Client,
    base_url: String,
}

impl MiaClient {
    pub fn new(config: &EnvironmentConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("x-api-key", HeaderValue::from_str(&config.mia_api_key)?);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.mia_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base_url, path_and_query)
    }

    /// GET con respuesta JSON deserializada.
    ///
    /// Los fallos de transporte y los cuerpos que no parsean se propagan como
    /// `ApiError::Transport`; aquí no se reintenta ni se recupera nada.
    pub async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T, ApiError> {
        let response = self.client.get(self.url(path_and_query)).send().await?;
        Ok(response.json::<T>().await?)
    }

    /// POST de un body JSON con respuesta JSON deserializada.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Ok(response.json::<T>().await?)
    }
}
