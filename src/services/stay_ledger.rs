//! Ledger de estadías
//!
//! Refleja las transiciones de presencia en registros facturables y
//! calcula la tarifa al cierre. El emparejamiento con la presencia es
//! explícito vía `vehicle_id`, establecido al crear ambos registros.

use chrono::{DateTime, Utc};

use crate::models::stay::Stay;
use crate::utils::errors::AppError;
use crate::utils::fees::stay_fee;

pub struct StayLedger {
    stays: Vec<Stay>,
}

impl StayLedger {
    pub fn new() -> Self {
        Self { stays: Vec::new() }
    }

    pub fn from_records(stays: Vec<Stay>) -> Self {
        Self { stays }
    }

    /// Abrir una estadía emparejada con un registro de presencia recién creado.
    ///
    /// El id es `max(existentes) + 1`, o 1 con el ledger vacío. Se invoca
    /// solo después de que la validación de presencia pasó; encontrar una
    /// estadía abierta para la placa acá significa que las colecciones se
    /// desincronizaron, y falla con `Invariant` en vez de duplicar estado.
    pub fn open_stay(
        &mut self,
        vehicle_id: u64,
        plate: &str,
        entry_time: DateTime<Utc>,
    ) -> Result<Stay, AppError> {
        if self.stays.iter().any(|s| s.plate == plate && s.is_open()) {
            return Err(AppError::Invariant(format!(
                "ya existe una estadía abierta para {}",
                plate
            )));
        }

        let id = self.stays.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        let stay = Stay::open(id, vehicle_id, plate.to_string(), entry_time);
        self.stays.push(stay.clone());
        Ok(stay)
    }

    /// Cerrar la estadía emparejada con un registro de presencia.
    ///
    /// El emparejamiento es por `vehicle_id`: si no hay estadía abierta
    /// para ese registro las colecciones se desincronizaron, y eso es
    /// `Invariant`, no un miss de rutina.
    pub fn close_stay(&mut self, vehicle_id: u64, exit_time: DateTime<Utc>) -> Result<Stay, AppError> {
        let stay = self
            .stays
            .iter_mut()
            .find(|s| s.vehicle_id == vehicle_id && s.is_open())
            .ok_or_else(|| {
                AppError::Invariant(format!(
                    "no hay estadía abierta para el registro de presencia {}",
                    vehicle_id
                ))
            })?;

        stay.exit_time = Some(exit_time);
        stay.fee = stay_fee(stay.entry_time, exit_time);
        Ok(stay.clone())
    }

    /// Todas las estadías, en orden de inserción
    pub fn list(&self) -> Vec<Stay> {
        self.stays.clone()
    }

    /// Estadías de una placa (ya normalizada)
    pub fn stays_for(&self, plate: &str) -> Vec<Stay> {
        self.stays.iter().filter(|s| s.plate == plate).cloned().collect()
    }

    pub fn records(&self) -> &[Stay] {
        &self.stays
    }

    pub fn count(&self) -> usize {
        self.stays.len()
    }
}

impl Default for StayLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn ids_unicos_y_crecientes() {
        let mut ledger = StayLedger::new();
        let entry = ts("2024-01-24T08:00:00Z");

        let a = ledger.open_stay(1, "AAA0001", entry).unwrap();
        let b = ledger.open_stay(2, "AAA0002", entry).unwrap();
        ledger.close_stay(1, entry + Duration::hours(1)).unwrap();
        let c = ledger.open_stay(3, "AAA0003", entry).unwrap();

        assert_eq!((a.id, b.id, c.id), (1, 2, 3));
    }

    #[test]
    fn abrir_con_estadia_abierta_viola_invariante() {
        let mut ledger = StayLedger::new();
        let entry = ts("2024-01-24T08:00:00Z");
        ledger.open_stay(1, "AAA0000", entry).unwrap();

        let result = ledger.open_stay(2, "AAA0000", entry);
        assert!(matches!(result, Err(AppError::Invariant(_))));
        assert_eq!(ledger.count(), 1);
    }

    #[test]
    fn cierre_calcula_la_tarifa() {
        let mut ledger = StayLedger::new();
        let entry = ts("2024-01-24T08:00:00Z");
        let exit = ts("2024-01-24T10:00:00Z");

        let opened = ledger.open_stay(7, "AAL2525", entry).unwrap();
        assert_eq!(opened.fee.to_string(), "0.00");

        let closed = ledger.close_stay(7, exit).unwrap();
        assert_eq!(closed.exit_time, Some(exit));
        assert_eq!(closed.fee.to_string(), "20.00");
    }

    #[test]
    fn cierre_sin_estadia_abierta_viola_invariante() {
        let mut ledger = StayLedger::new();
        let result = ledger.close_stay(99, ts("2024-01-24T10:00:00Z"));
        assert!(matches!(result, Err(AppError::Invariant(_))));
    }

    #[test]
    fn a_lo_sumo_una_estadia_abierta_por_placa() {
        let mut ledger = StayLedger::new();
        let entry = ts("2024-01-24T08:00:00Z");

        ledger.open_stay(1, "AAA0000", entry).unwrap();
        ledger.close_stay(1, entry + Duration::minutes(30)).unwrap();
        ledger.open_stay(2, "AAA0000", entry + Duration::hours(2)).unwrap();

        let open: Vec<_> = ledger
            .records()
            .iter()
            .filter(|s| s.plate == "AAA0000" && s.is_open())
            .collect();
        assert_eq!(open.len(), 1);
    }
}
