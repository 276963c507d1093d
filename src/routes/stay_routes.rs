//! Rutas de estadías
//!
//! Listados de solo lectura sobre el ledger de estadías.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::models::stay::StayResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_stay_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_stays))
        .route("/:plate", get(get_stays_for_plate))
}

/// GET / - todas las estadías en orden de inserción
async fn list_stays(State(state): State<AppState>) -> Json<Vec<StayResponse>> {
    let stays = state.parking.list_stays().await;
    Json(stays.iter().map(StayResponse::from).collect())
}

/// GET /:plate - estadías de una placa
async fn get_stays_for_plate(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> Result<Json<Vec<StayResponse>>, AppError> {
    let stays = state.parking.stays_for_plate(&plate).await?;
    Ok(Json(stays.iter().map(StayResponse::from).collect()))
}
