//! Tests del flujo de onboarding: Agente → Empresa → Viajero

use std::sync::Arc;

use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mia_booking::client::MiaClient;
use mia_booking::config::environment::EnvironmentConfig;
use mia_booking::models::AgenteForm;
use mia_booking::services::onboarding_service::{
    OnboardingError, OnboardingService, OnboardingStep,
};
use mia_booking::utils::errors::ApiError;

fn cliente(server: &MockServer) -> Arc<MiaClient> {
    let config = EnvironmentConfig::with_base_url(server.uri(), "test-key");
    Arc::new(MiaClient::new(&config).expect("cliente de test"))
}

fn formulario() -> AgenteForm {
    AgenteForm {
        primer_nombre: "Ana".to_string(),
        segundo_nombre: None,
        apellido_paterno: "López".to_string(),
        apellido_materno: None,
        correo: "ana@example.com".to_string(),
        telefono: "5512345678".to_string(),
        password: "secreta123".to_string(),
        genero: "femenino".to_string(),
        fecha_nacimiento: "1990-05-01".to_string(),
        id: None,
    }
}

#[tokio::test]
async fn flujo_completo_encadena_los_ids() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/mia/agentes"))
        .and(header("x-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Agente creado correctamente"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // la razón social se sintetiza desde el nombre del agente, sin dobles espacios
    Mock::given(method("POST"))
        .and(path("/v1/mia/empresas"))
        .and(body_partial_json(serde_json::json!({
            "razon_social": "Ana López",
            "nombre_comercial": "Ana López",
            "tipo_persona": "fisica",
            "direccion": " "
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Agente creado correctamente",
            "data": { "id_empresa": "emp-1" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    // el viajero hereda el id de la empresa recién creada y los nombres
    // opcionales viajan como un solo espacio
    Mock::given(method("POST"))
        .and(path("/v1/mia/viajeros"))
        .and(body_partial_json(serde_json::json!({
            "id_empresa": "emp-1",
            "segundo_nombre": " ",
            "apellido_materno": " ",
            "fecha_nacimiento": "1990-05-01 00:00:00"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Viajero creado correctamente"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let onboarding = OnboardingService::new(cliente(&server));
    let outcome = onboarding.ejecutar(&formulario()).await.expect("onboarding");

    assert_eq!(outcome.empresa_id, "emp-1");
    // sin id en el formulario se genera un UUID v4
    assert_eq!(outcome.agente_id.len(), 36);
}

#[tokio::test]
async fn rechazo_del_agente_detiene_el_flujo() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/mia/agentes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "El correo ya existe"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/mia/empresas"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/mia/viajeros"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let onboarding = OnboardingService::new(cliente(&server));
    let error = onboarding.ejecutar(&formulario()).await.unwrap_err();

    match error {
        OnboardingError::StepRejected { step, message } => {
            assert_eq!(step, OnboardingStep::Agente);
            assert_eq!(message, "El correo ya existe");
        }
        otro => panic!("se esperaba StepRejected, llegó {otro:?}"),
    }
}

#[tokio::test]
async fn rechazo_de_la_empresa_no_intenta_el_viajero() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/mia/agentes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Agente creado correctamente"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/mia/empresas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Datos de empresa inválidos"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/mia/viajeros"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let onboarding = OnboardingService::new(cliente(&server));
    let error = onboarding.ejecutar(&formulario()).await.unwrap_err();

    match error {
        OnboardingError::StepRejected { step, .. } => {
            assert_eq!(step, OnboardingStep::Empresa);
        }
        otro => panic!("se esperaba StepRejected, llegó {otro:?}"),
    }
}

#[tokio::test]
async fn formulario_invalido_no_llega_a_la_red() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/mia/agentes"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut form = formulario();
    form.correo = "no-es-correo".to_string();

    let onboarding = OnboardingService::new(cliente(&server));
    let error = onboarding.ejecutar(&form).await.unwrap_err();

    assert!(matches!(
        error,
        OnboardingError::Api(ApiError::Validation(_))
    ));
}
