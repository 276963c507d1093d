//! Capa de persistencia
//!
//! Este módulo define el contrato del store de documentos que respalda
//! las colecciones del estacionamiento, con implementaciones en memoria
//! y sobre archivo JSON. El store se inyecta en el servicio; cualquier
//! implementación que cumpla el contrato sirve.

pub mod json_store;
pub mod memory;

pub use json_store::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::stay::Stay;
use crate::models::vehicle::VehiclePresence;

/// Snapshot completo del estado persistido: ambas colecciones juntas
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParkingSnapshot {
    pub vehicles: Vec<VehiclePresence>,
    pub stays: Vec<Stay>,
}

/// Errores de la capa de persistencia
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Contrato del colaborador de persistencia.
///
/// `load` se invoca una vez al arranque; `save` después de cada
/// operación mutante con el snapshot completo.
#[async_trait]
pub trait ParkingStore: Send + Sync {
    async fn load(&self) -> Result<ParkingSnapshot, StoreError>;

    async fn save(&self, snapshot: &ParkingSnapshot) -> Result<(), StoreError>;
}
