//! Rutas HTTP
//!
//! Este módulo arma el router principal de la API: un sub-router por
//! recurso y el endpoint de health check.

pub mod auth_routes;
pub mod driver_routes;
pub mod trip_routes;
pub mod vehicle_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes::create_auth_router(state.clone()))
        .nest("/trips", trip_routes::create_trip_router(state.clone()))
        .nest("/driver", driver_routes::create_driver_router(state.clone()))
        .nest("/vehicles", vehicle_routes::create_vehicle_router(state))
}

/// Construir la aplicación completa con capas de logging y CORS
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", create_api_router(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(state)
}

/// Health check del servicio
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "ride-hailing-api",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
