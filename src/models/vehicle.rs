//! Modelo de presencia de vehículos
//!
//! Este módulo contiene el registro de presencia de un vehículo en el
//! estacionamiento y sus tipos de request/response para la API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registro de presencia - un intervalo de un vehículo dentro del estacionamiento.
/// El histórico es append-only: los registros nunca se eliminan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehiclePresence {
    pub id: u64,
    /// Placa normalizada (mayúsculas, alfanumérica)
    pub plate: String,
    pub entry_time: DateTime<Utc>,
    /// None mientras el vehículo sigue estacionado
    pub exit_time: Option<DateTime<Utc>>,
}

impl VehiclePresence {
    /// Un registro está abierto mientras no tenga hora de salida
    pub fn is_open(&self) -> bool {
        self.exit_time.is_none()
    }
}

/// Request para registrar la entrada de un vehículo.
/// La placa puede venir ausente en el body: se trata igual que una
/// placa vacía y falla la validación con el error estructurado.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterArrivalRequest {
    #[validate(length(min = 1, message = "la placa es requerida"))]
    pub plate: Option<String>,
}

/// Response de registro de presencia para la API
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: u64,
    pub plate: String,
    pub entry_time: String,
    pub exit_time: Option<String>,
    pub parked: bool,
}

impl From<&VehiclePresence> for VehicleResponse {
    fn from(record: &VehiclePresence) -> Self {
        Self {
            id: record.id,
            plate: record.plate.clone(),
            entry_time: record.entry_time.to_rfc3339(),
            exit_time: record.exit_time.map(|t| t.to_rfc3339()),
            parked: record.is_open(),
        }
    }
}
