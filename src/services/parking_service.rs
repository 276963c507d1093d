//! Servicio de estacionamiento
//!
//! Componente único que encapsula las dos colecciones (presencias y
//! estadías) detrás de un solo lock de escritura, de modo que las
//! mutaciones quedan serializadas y las lecturas ven snapshots
//! consistentes. La persistencia se delega al store inyectado después
//! de cada mutación.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::models::stay::Stay;
use crate::models::vehicle::VehiclePresence;
use crate::services::presence_tracker::PresenceTracker;
use crate::services::stay_ledger::StayLedger;
use crate::storage::{ParkingSnapshot, ParkingStore};
use crate::utils::errors::AppError;

struct LotState {
    tracker: PresenceTracker,
    ledger: StayLedger,
}

impl LotState {
    fn snapshot(&self) -> ParkingSnapshot {
        ParkingSnapshot {
            vehicles: self.tracker.records().to_vec(),
            stays: self.ledger.records().to_vec(),
        }
    }
}

pub struct ParkingService {
    state: RwLock<LotState>,
    store: Arc<dyn ParkingStore>,
}

impl ParkingService {
    /// Construir el servicio cargando el estado inicial desde el store.
    /// Un error de carga no es fatal: se arranca con colecciones vacías.
    pub async fn load(store: Arc<dyn ParkingStore>) -> Self {
        let snapshot = match store.load().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("⚠️ No se pudo cargar el estado persistido: {}", e);
                ParkingSnapshot::default()
            }
        };

        info!(
            "📦 Estado cargado: {} vehículos, {} estadías",
            snapshot.vehicles.len(),
            snapshot.stays.len()
        );

        Self {
            state: RwLock::new(LotState {
                tracker: PresenceTracker::from_records(snapshot.vehicles),
                ledger: StayLedger::from_records(snapshot.stays),
            }),
            store,
        }
    }

    /// Registrar la entrada de un vehículo: abre la presencia y la
    /// estadía emparejada con la misma marca de tiempo.
    pub async fn register_arrival(
        &self,
        plate: &str,
    ) -> Result<(VehiclePresence, Stay), AppError> {
        let now = Utc::now();
        let mut state = self.state.write().await;

        let record = state.tracker.register_arrival(plate, now)?;
        let stay = match state
            .ledger
            .open_stay(record.id, &record.plate, record.entry_time)
        {
            Ok(stay) => stay,
            Err(e) => {
                // no dejar una presencia a medio abrir si el ledger está desincronizado
                state.tracker.discard(record.id);
                return Err(e);
            }
        };

        info!("🚗 Entrada registrada: {} (estadía #{})", record.plate, stay.id);
        self.persist(&state).await;
        Ok((record, stay))
    }

    /// Registrar la salida de un vehículo: cierra la presencia y la
    /// estadía emparejada, calculando la tarifa.
    pub async fn register_departure(
        &self,
        plate: &str,
    ) -> Result<(VehiclePresence, Stay), AppError> {
        let now = Utc::now();
        let mut state = self.state.write().await;

        let record = state.tracker.register_departure(plate, now)?;
        let stay = state.ledger.close_stay(record.id, now)?;

        info!(
            "🏁 Salida registrada: {} (estadía #{}, valor {})",
            record.plate, stay.id, stay.fee
        );
        self.persist(&state).await;
        Ok((record, stay))
    }

    pub async fn list_vehicles(&self) -> Vec<VehiclePresence> {
        self.state.read().await.tracker.list_all()
    }

    pub async fn list_parked(&self) -> Vec<VehiclePresence> {
        self.state.read().await.tracker.list_parked()
    }

    /// Histórico de presencia de una placa; `NotFound` si nunca se registró
    pub async fn vehicle_history(&self, plate: &str) -> Result<Vec<VehiclePresence>, AppError> {
        let history = self.state.read().await.tracker.history_for(plate)?;
        if history.is_empty() {
            return Err(AppError::NotFound(format!(
                "no hay registros para la placa {}",
                plate.trim().to_uppercase()
            )));
        }
        Ok(history)
    }

    pub async fn list_stays(&self) -> Vec<Stay> {
        self.state.read().await.ledger.list()
    }

    /// Estadías de una placa; `NotFound` si no hay ninguna
    pub async fn stays_for_plate(&self, plate: &str) -> Result<Vec<Stay>, AppError> {
        let plate = crate::utils::validation::normalize_plate(plate)?;
        let stays = self.state.read().await.ledger.stays_for(&plate);
        if stays.is_empty() {
            return Err(AppError::NotFound(format!(
                "no hay estadías para la placa {}",
                plate
            )));
        }
        Ok(stays)
    }

    /// Conteos para el endpoint de salud: (vehículos, estadías, estacionados)
    pub async fn stats(&self) -> (usize, usize, usize) {
        let state = self.state.read().await;
        (
            state.tracker.records().len(),
            state.ledger.count(),
            state.tracker.parked_count(),
        )
    }

    /// Persistir el snapshot actual. Un fallo se loguea y no revierte la
    /// mutación en memoria: el estado en memoria sigue siendo la fuente
    /// de verdad por el resto de la vida del proceso.
    async fn persist(&self, state: &LotState) {
        if let Err(e) = self.store.save(&state.snapshot()).await {
            error!("❌ Error persistiendo el estado: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use rust_decimal::Decimal;

    async fn service() -> ParkingService {
        ParkingService::load(Arc::new(MemoryStore::new())).await
    }

    #[tokio::test]
    async fn entrada_crea_presencia_y_estadia_emparejadas() {
        let parking = service().await;
        let (record, stay) = parking.register_arrival("aal2525").await.unwrap();

        assert_eq!(record.plate, "AAL2525");
        assert_eq!(stay.plate, "AAL2525");
        assert_eq!(stay.vehicle_id, record.id);
        assert_eq!(stay.entry_time, record.entry_time);
        assert!(stay.is_open());
    }

    #[tokio::test]
    async fn entrada_doble_es_conflicto() {
        let parking = service().await;
        parking.register_arrival("AAL2525").await.unwrap();

        let result = parking.register_arrival("aal2525").await;
        assert!(matches!(result, Err(AppError::Conflict(_))));

        // la colección no quedó duplicada
        let (vehicles, stays, parked) = parking.stats().await;
        assert_eq!((vehicles, stays, parked), (1, 1, 1));
    }

    #[tokio::test]
    async fn salida_cierra_ambos_registros() {
        let parking = service().await;
        parking.register_arrival("AAA0000").await.unwrap();
        let (record, stay) = parking.register_departure("AAA0000").await.unwrap();

        assert!(record.exit_time.is_some());
        assert_eq!(stay.exit_time, record.exit_time);
        assert!(stay.fee >= Decimal::from(10));
        assert_eq!(parking.list_parked().await.len(), 0);
    }

    #[tokio::test]
    async fn salida_sin_entrada_es_not_found() {
        let parking = service().await;
        let result = parking.register_departure("XYZ9999").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn el_estado_sobrevive_un_reinicio() {
        let store = Arc::new(MemoryStore::new());

        let parking = ParkingService::load(store.clone()).await;
        parking.register_arrival("AAA0001").await.unwrap();
        parking.register_arrival("AAA0002").await.unwrap();
        parking.register_departure("AAA0001").await.unwrap();

        let vehicles = parking.list_vehicles().await;
        let stays = parking.list_stays().await;

        // un segundo servicio sobre el mismo store ve lo mismo
        let reloaded = ParkingService::load(store).await;
        assert_eq!(reloaded.list_vehicles().await, vehicles);
        assert_eq!(reloaded.list_stays().await, stays);

        // y sigue respetando los invariantes al continuar operando
        let result = reloaded.register_arrival("AAA0002").await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
        let (_, stay) = reloaded.register_arrival("AAA0001").await.unwrap();
        assert_eq!(stay.id, 3);
    }

    #[tokio::test]
    async fn ledger_desincronizado_no_deja_presencia_a_medio_abrir() {
        use crate::models::stay::Stay;

        // snapshot desincronizado: estadía abierta sin presencia abierta
        let snapshot = ParkingSnapshot {
            vehicles: vec![],
            stays: vec![Stay::open(1, 1, "AAA0000".to_string(), Utc::now())],
        };
        let store = Arc::new(MemoryStore::with_snapshot(snapshot));
        let parking = ParkingService::load(store).await;

        let result = parking.register_arrival("AAA0000").await;
        assert!(matches!(result, Err(AppError::Invariant(_))));

        // la entrada fallida no dejó rastro en la colección de presencia
        assert!(parking.list_vehicles().await.is_empty());
        assert_eq!(parking.list_parked().await.len(), 0);
    }

    #[tokio::test]
    async fn ids_de_estadia_estrictamente_crecientes() {
        let parking = service().await;
        for plate in ["AAA0001", "AAA0002", "AAA0003"] {
            parking.register_arrival(plate).await.unwrap();
        }
        let ids: Vec<u64> = parking.list_stays().await.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn fallo_de_persistencia_no_revierte_la_mutacion() {
        struct FailingStore;

        #[async_trait::async_trait]
        impl ParkingStore for FailingStore {
            async fn load(&self) -> Result<ParkingSnapshot, crate::storage::StoreError> {
                Ok(ParkingSnapshot::default())
            }

            async fn save(
                &self,
                _snapshot: &ParkingSnapshot,
            ) -> Result<(), crate::storage::StoreError> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disco lleno").into())
            }
        }

        let parking = ParkingService::load(Arc::new(FailingStore)).await;
        let result = parking.register_arrival("AAA0000").await;

        assert!(result.is_ok());
        assert_eq!(parking.list_parked().await.len(), 1);
    }
}
