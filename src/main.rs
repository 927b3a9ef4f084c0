use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use rental_backoffice::config::environment::EnvironmentConfig;
use rental_backoffice::database::create_pool;
use rental_backoffice::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use rental_backoffice::routes::create_api_router;
use rental_backoffice::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Rental Backoffice - API de gestión de flota");
    info!("==============================================");

    let config = EnvironmentConfig::from_env();

    // Inicializar base de datos
    let pool = match create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    info!("✅ Base de datos conectada");

    // CORS: orígenes explícitos en producción, permisivo en desarrollo
    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let app_state = AppState::new(pool, config);

    let app = create_api_router().layer(cors).with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🏢 Agencia:");
    info!("   POST /api/agency/register - Registrar agencia");
    info!("   POST /api/agency/login - Login agencia");
    info!("   GET  /api/agency/me - Perfil de la agencia");
    info!("   PUT  /api/agency/me - Actualizar perfil");
    info!("🚙 Vehículos:");
    info!("   POST /api/vehicle - Crear vehículo");
    info!("   GET  /api/vehicle - Listar vehículos (km efectivo)");
    info!("   GET  /api/vehicle/:id/availability - Disponibilidad puntual");
    info!("   POST /api/vehicle/candidates - Candidatos para una reserva");
    info!("   GET  /api/vehicle/maintenance-alerts - Alertas de mantenimiento");
    info!("📅 Reservas:");
    info!("   POST /api/reservation - Crear reserva");
    info!("   POST /api/reservation/:id/checkin - Check-in de devolución");
    info!("📊 Dashboard:");
    info!("   GET  /api/dashboard/summary - Resumen mensual");

    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

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
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
