//! Tests de las consultas de directorio del agente

use std::sync::Arc;

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mia_booking::client::MiaClient;
use mia_booking::config::environment::EnvironmentConfig;
use mia_booking::services::directory_service::DirectoryService;

fn cliente(server: &MockServer) -> Arc<MiaClient> {
    let config = EnvironmentConfig::with_base_url(server.uri(), "test-key");
    Arc::new(MiaClient::new(&config).expect("cliente de test"))
}

#[tokio::test]
async fn empresas_es_passthrough_con_id_codificado() {
    let server = MockServer::start().await;
    let empresas = serde_json::json!([
        { "id_empresa": "emp-1", "razon_social": "Ana López" },
        { "id_empresa": "emp-2", "razon_social": "Viajes Norte" }
    ]);

    // el id con espacios viaja URL-encoded y llega decodificado al matcher
    Mock::given(method("GET"))
        .and(path("/v1/mia/agentes/empresas-con-agentes"))
        .and(query_param("id_agente", "agente 1"))
        .and(header("x-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empresas.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let directorio = DirectoryService::new(cliente(&server));
    let respuesta = directorio
        .empresas_por_agente("agente 1")
        .await
        .expect("empresas");

    assert_eq!(respuesta, empresas);
}

#[tokio::test]
async fn viajeros_es_passthrough() {
    let server = MockServer::start().await;
    let viajeros = serde_json::json!([
        { "primer_nombre": "Ana", "empresa": "emp-1" }
    ]);

    Mock::given(method("GET"))
        .and(path("/v1/mia/agentes/viajeros-con-empresas"))
        .and(query_param("id_agente", "agente-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(viajeros.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let directorio = DirectoryService::new(cliente(&server));
    let respuesta = directorio
        .viajeros_por_agente("agente-1")
        .await
        .expect("viajeros");

    assert_eq!(respuesta, viajeros);
}
