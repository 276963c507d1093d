//! Rutas de la API
//!
//! Este módulo arma el router principal: rutas de vehículos, estadías,
//! salud e índice de la API.

pub mod stay_routes;
pub mod vehicle_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/stays", stay_routes::create_stay_router())
}

/// Índice de la API con el listado de rutas
async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "title": "API Estacionamiento",
        "version": env!("CARGO_PKG_VERSION"),
        "routes": [
            { "method": "GET", "path": "/vehicles" },
            { "method": "GET", "path": "/vehicles/parked" },
            { "method": "GET", "path": "/vehicles/:plate" },
            { "method": "POST", "path": "/vehicles" },
            { "method": "PATCH", "path": "/vehicles/:plate/departure" },
            { "method": "GET", "path": "/stays" },
            { "method": "GET", "path": "/stays/:plate" },
            { "method": "GET", "path": "/health" }
        ]
    }))
}

/// Health check con conteos del estacionamiento
async fn health(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Json<serde_json::Value> {
    let (vehicles, stays, parked) = state.parking.stats().await;
    Json(json!({
        "status": "healthy",
        "message": "API Estacionamiento funcionando",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "vehicles": vehicles,
        "stays": stays,
        "parked": parked
    }))
}
