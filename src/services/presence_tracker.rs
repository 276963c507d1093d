//! Tracker de presencia de vehículos
//!
//! Mantiene el conjunto de vehículos presentes en el estacionamiento y
//! sus marcas de entrada/salida. Componente hoja: no depende de nadie.
//! Invariante: a lo sumo un registro abierto por placa.

use chrono::{DateTime, Utc};

use crate::models::vehicle::VehiclePresence;
use crate::utils::errors::AppError;
use crate::utils::validation::normalize_plate;

pub struct PresenceTracker {
    records: Vec<VehiclePresence>,
}

impl PresenceTracker {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Reconstruir el tracker desde registros persistidos (orden de inserción)
    pub fn from_records(records: Vec<VehiclePresence>) -> Self {
        Self { records }
    }

    /// Registrar la entrada de un vehículo.
    ///
    /// Falla con `Validation` si la placa es vacía o malformada y con
    /// `Conflict` si la placa ya tiene un registro abierto.
    pub fn register_arrival(
        &mut self,
        plate: &str,
        now: DateTime<Utc>,
    ) -> Result<VehiclePresence, AppError> {
        let plate = normalize_plate(plate)?;

        if self.find_open(&plate).is_some() {
            return Err(AppError::Conflict(format!(
                "el vehículo {} ya está estacionado",
                plate
            )));
        }

        let id = self.next_id();
        let record = VehiclePresence {
            id,
            plate,
            entry_time: now,
            exit_time: None,
        };
        self.records.push(record.clone());
        Ok(record)
    }

    /// Registrar la salida de un vehículo.
    ///
    /// Falla con `NotFound` si la placa no tiene un registro abierto.
    /// Una segunda salida para la misma placa no es un no-op: también
    /// es `NotFound`.
    pub fn register_departure(
        &mut self,
        plate: &str,
        now: DateTime<Utc>,
    ) -> Result<VehiclePresence, AppError> {
        let plate = normalize_plate(plate)?;

        let record = self
            .records
            .iter_mut()
            .find(|r| r.plate == plate && r.is_open())
            .ok_or_else(|| {
                AppError::NotFound(format!("el vehículo {} no está estacionado", plate))
            })?;

        record.exit_time = Some(now);
        Ok(record.clone())
    }

    /// Vehículos actualmente estacionados, en orden de inserción
    pub fn list_parked(&self) -> Vec<VehiclePresence> {
        self.records.iter().filter(|r| r.is_open()).cloned().collect()
    }

    /// Histórico completo, en orden de inserción
    pub fn list_all(&self) -> Vec<VehiclePresence> {
        self.records.clone()
    }

    /// Histórico de una placa (normalizada)
    pub fn history_for(&self, plate: &str) -> Result<Vec<VehiclePresence>, AppError> {
        let plate = normalize_plate(plate)?;
        Ok(self
            .records
            .iter()
            .filter(|r| r.plate == plate)
            .cloned()
            .collect())
    }

    pub fn records(&self) -> &[VehiclePresence] {
        &self.records
    }

    pub fn parked_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_open()).count()
    }

    /// Descartar un registro recién creado cuya estadía emparejada no se
    /// pudo abrir. Solo revierte mutaciones aún no confirmadas; el
    /// histórico confirmado sigue siendo append-only.
    pub(crate) fn discard(&mut self, id: u64) {
        self.records.retain(|r| r.id != id);
    }

    fn find_open(&self, plate: &str) -> Option<&VehiclePresence> {
        self.records.iter().find(|r| r.plate == plate && r.is_open())
    }

    fn next_id(&self) -> u64 {
        self.records.iter().map(|r| r.id).max().unwrap_or(0) + 1
    }
}

impl Default for PresenceTracker {
    fn default() -> Self {
        Self::new()
    }
}
