//! Store sobre archivo JSON
//!
//! Persiste el snapshot completo como un documento JSON en disco.
//! Un archivo ausente o corrupto no es fatal: el arranque continúa
//! con colecciones vacías.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::{info, warn};

use super::{ParkingSnapshot, ParkingStore, StoreError};

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ParkingStore for JsonFileStore {
    async fn load(&self) -> Result<ParkingSnapshot, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    "📄 Archivo de datos {} no existe, arrancando vacío",
                    self.path.display()
                );
                return Ok(ParkingSnapshot::default());
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice(&bytes) {
            Ok(snapshot) => Ok(snapshot),
            Err(e) => {
                warn!(
                    "⚠️ Archivo de datos {} corrupto ({}), arrancando vacío",
                    self.path.display(),
                    e
                );
                Ok(ParkingSnapshot::default())
            }
        }
    }

    async fn save(&self, snapshot: &ParkingSnapshot) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }
}
