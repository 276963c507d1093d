//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::services::parking_service::ParkingService;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub parking: Arc<ParkingService>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, parking: Arc<ParkingService>) -> Self {
        Self { config, parking }
    }
}
