use anyhow::Result;
use chrono::{Datelike, Local};
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::{error, info};

use mia_booking::client::MiaClient;
use mia_booking::config::environment::EnvironmentConfig;
use mia_booking::services::directory_service::DirectoryService;
use mia_booking::services::stats_service::StatsAggregator;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🧳 MIA Booking Core - cliente de orquestación");
    info!("=============================================");

    let config = EnvironmentConfig::default();
    info!("🌐 API base: {} ({})", config.mia_base_url, config.environment);

    let client = Arc::new(MiaClient::new(&config)?);

    // Smoke opcional contra la API real cuando hay un usuario de prueba
    if let Ok(user_id) = std::env::var("MIA_DEMO_USER") {
        let hoy = Local::now();

        let stats = StatsAggregator::new(client.clone());
        match stats.fetch_monthly(&user_id, hoy.month(), hoy.year()).await {
            Ok(resumen) => info!("📊 Resumen mensual: {:?}", resumen),
            Err(e) => error!("❌ Error consultando stats: {}", e),
        }

        let directorio = DirectoryService::new(client.clone());
        match directorio.empresas_por_agente(&user_id).await {
            Ok(json) => info!("🏢 Empresas: {}", json),
            Err(e) => error!("❌ Error consultando empresas: {}", e),
        }
    } else {
        info!("ℹ️ MIA_DEMO_USER no definido; arranque sin llamadas de prueba");
    }

    Ok(())
}
