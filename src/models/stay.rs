//! Modelo de estadías
//!
//! Este módulo contiene el registro facturable de una estadía y sus
//! tipos de response. Cada estadía referencia explícitamente el registro
//! de presencia con el que fue creada.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::vehicle::{VehiclePresence, VehicleResponse};
use crate::utils::fees::ZERO_FEE;

/// Estadía facturable, emparejada uno a uno con un registro de presencia
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stay {
    /// Id secuencial, único y estrictamente creciente
    pub id: u64,
    /// Referencia al registro de presencia emparejado
    pub vehicle_id: u64,
    pub plate: String,
    pub entry_time: DateTime<Utc>,
    pub exit_time: Option<DateTime<Utc>>,
    /// Cero mientras la estadía está abierta; se calcula al cierre
    pub fee: Decimal,
}

impl Stay {
    pub fn open(id: u64, vehicle_id: u64, plate: String, entry_time: DateTime<Utc>) -> Self {
        Self {
            id,
            vehicle_id,
            plate,
            entry_time,
            exit_time: None,
            fee: ZERO_FEE,
        }
    }

    pub fn is_open(&self) -> bool {
        self.exit_time.is_none()
    }
}

/// Response de estadía para la API
#[derive(Debug, Serialize)]
pub struct StayResponse {
    pub id: u64,
    pub vehicle_id: u64,
    pub plate: String,
    pub entry_time: String,
    pub exit_time: Option<String>,
    pub fee: Decimal,
}

impl From<&Stay> for StayResponse {
    fn from(stay: &Stay) -> Self {
        Self {
            id: stay.id,
            vehicle_id: stay.vehicle_id,
            plate: stay.plate.clone(),
            entry_time: stay.entry_time.to_rfc3339(),
            exit_time: stay.exit_time.map(|t| t.to_rfc3339()),
            fee: stay.fee,
        }
    }
}

/// Response de salida: presencia actualizada más la estadía cerrada
#[derive(Debug, Serialize)]
pub struct DepartureResponse {
    pub vehicle: VehicleResponse,
    pub stay: StayResponse,
}

impl DepartureResponse {
    pub fn new(record: &VehiclePresence, stay: &Stay) -> Self {
        Self {
            vehicle: record.into(),
            stay: stay.into(),
        }
    }
}
