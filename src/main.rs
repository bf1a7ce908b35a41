use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use ride_hailing::config::environment::EnvironmentConfig;
use ride_hailing::database::{mask_database_url, DatabaseConnection};
use ride_hailing::routes::create_app;
use ride_hailing::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging
    let log_level = if config.is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    info!("🚕 Ride Hailing - API de viajes");
    info!("================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    db_connection.ping().await?;
    let database_url = std::env::var("DATABASE_URL").unwrap_or_default();
    info!("✅ Base de datos conectada: {}", mask_database_url(&database_url));

    // Aplicar el esquema embebido
    if let Err(e) = db_connection.run_migrations().await {
        error!("❌ Error aplicando el esquema: {}", e);
        return Err(anyhow::anyhow!("Error de migración: {}", e));
    }
    info!("✅ Esquema de base de datos aplicado");

    let pool = db_connection.pool().clone();
    let app_state = AppState::new(pool, config.clone());
    let app = create_app(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Autenticación:");
    info!("   POST /api/auth/register - Registrar cuenta (pasajero o conductor)");
    info!("   POST /api/auth/login - Iniciar sesión");
    info!("   GET  /api/auth/me - Obtener cuenta actual");
    info!("   DELETE /api/auth/account - Eliminar cuenta");
    info!("🚕 Viajes:");
    info!("   POST /api/trips - Solicitar viaje");
    info!("   GET  /api/trips - Listar viajes propios");
    info!("   GET  /api/trips/available - Viajes disponibles para conductores");
    info!("   GET  /api/trips/:id - Obtener viaje");
    info!("   PUT  /api/trips/:id - Editar viaje solicitado");
    info!("   DELETE /api/trips/:id - Eliminar viaje solicitado");
    info!("   POST /api/trips/:id/accept - Aceptar viaje");
    info!("   POST /api/trips/:id/complete - Completar viaje");
    info!("   POST /api/trips/:id/cancel - Cancelar viaje");
    info!("👤 Conductores:");
    info!("   GET  /api/driver/profile - Obtener perfil de conductor");
    info!("   PUT  /api/driver/profile - Actualizar perfil de conductor");
    info!("🚗 Vehículos:");
    info!("   POST /api/vehicles - Registrar vehículo");
    info!("   GET  /api/vehicles - Listar vehículos propios");
    info!("   GET  /api/vehicles/:id - Obtener vehículo");
    info!("   PUT  /api/vehicles/:id - Actualizar vehículo");
    info!("   DELETE /api/vehicles/:id - Eliminar vehículo");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

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
