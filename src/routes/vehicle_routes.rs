//! Rutas de vehículos
//!
//! Handlers para el registro de entrada/salida y los listados de
//! presencia. Los handlers son finos: validan el request y delegan
//! en el servicio de estacionamiento.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use validator::Validate;

use crate::models::stay::DepartureResponse;
use crate::models::vehicle::{RegisterArrivalRequest, VehicleResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(register_arrival))
        .route("/parked", get(list_parked))
        .route("/:plate", get(get_vehicle_history))
        .route("/:plate/departure", patch(register_departure))
}

/// GET / - histórico completo de presencia
async fn list_vehicles(State(state): State<AppState>) -> Json<Vec<VehicleResponse>> {
    let records = state.parking.list_vehicles().await;
    Json(records.iter().map(VehicleResponse::from).collect())
}

/// GET /parked - vehículos actualmente estacionados
async fn list_parked(State(state): State<AppState>) -> Json<Vec<VehicleResponse>> {
    let records = state.parking.list_parked().await;
    Json(records.iter().map(VehicleResponse::from).collect())
}

/// GET /:plate - histórico de una placa
async fn get_vehicle_history(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let records = state.parking.vehicle_history(&plate).await?;
    Ok(Json(records.iter().map(VehicleResponse::from).collect()))
}

/// POST / - registrar entrada (201 con el registro creado)
async fn register_arrival(
    State(state): State<AppState>,
    Json(request): Json<RegisterArrivalRequest>,
) -> Result<(StatusCode, Json<VehicleResponse>), AppError> {
    request.validate()?;
    let plate = request.plate.as_deref().unwrap_or_default();
    let (record, _stay) = state.parking.register_arrival(plate).await?;
    Ok((StatusCode::CREATED, Json(VehicleResponse::from(&record))))
}

/// PATCH /:plate/departure - registrar salida (presencia + estadía cerrada)
async fn register_departure(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> Result<Json<DepartureResponse>, AppError> {
    let (record, stay) = state.parking.register_departure(&plate).await?;
    Ok(Json(DepartureResponse::new(&record, &stay)))
}
