//! Store en memoria
//!
//! Implementación efímera del contrato de persistencia, usada en tests
//! y para correr el servicio sin disco.

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{ParkingSnapshot, ParkingStore, StoreError};

#[derive(Default)]
pub struct MemoryStore {
    snapshot: Mutex<ParkingSnapshot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-cargado con un snapshot, para fixtures de test
    pub fn with_snapshot(snapshot: ParkingSnapshot) -> Self {
        Self {
            snapshot: Mutex::new(snapshot),
        }
    }
}

#[async_trait]
impl ParkingStore for MemoryStore {
    async fn load(&self) -> Result<ParkingSnapshot, StoreError> {
        Ok(self.snapshot.lock().await.clone())
    }

    async fn save(&self, snapshot: &ParkingSnapshot) -> Result<(), StoreError> {
        *self.snapshot.lock().await = snapshot.clone();
        Ok(())
    }
}
