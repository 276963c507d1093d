use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::info;

use parking_api::config::environment::EnvironmentConfig;
use parking_api::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use parking_api::routes;
use parking_api::services::parking_service::ParkingService;
use parking_api::state::AppState;
use parking_api::storage::JsonFileStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🅿️ API Estacionamiento");
    info!("======================");

    let config = EnvironmentConfig::from_env();

    // Store de persistencia + estado inicial
    let store = Arc::new(JsonFileStore::new(&config.data_file));
    let parking = Arc::new(ParkingService::load(store).await);

    // CORS: permisivo en desarrollo, orígenes explícitos en el resto
    let cors = if config.is_development() || config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(&config.cors_origins)
    };

    let state = AppState::new(config.clone(), parking);
    let app = routes::create_router().layer(cors).with_state(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET   /          - Índice de la API");
    info!("   GET   /health    - Health check con conteos");
    info!("🚗 Vehículos:");
    info!("   GET   /vehicles                 - Histórico de presencia");
    info!("   GET   /vehicles/parked          - Vehículos estacionados");
    info!("   GET   /vehicles/:plate          - Histórico de una placa");
    info!("   POST  /vehicles                 - Registrar entrada");
    info!("   PATCH /vehicles/:plate/departure - Registrar salida");
    info!("🧾 Estadías:");
    info!("   GET   /stays        - Todas las estadías");
    info!("   GET   /stays/:plate - Estadías de una placa");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal SIGTERM recibida, apagando servidor...");
        },
    }
}
