//! Tests del store sobre archivo JSON
//!
//! Round-trip save/load y tolerancia a archivos ausentes o corruptos.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use parking_api::models::stay::Stay;
use parking_api::models::vehicle::VehiclePresence;
use parking_api::storage::{JsonFileStore, ParkingSnapshot, ParkingStore};
use parking_api::utils::fees::stay_fee;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("parking_api_{}_{}.json", name, std::process::id()))
}

fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

fn sample_snapshot() -> ParkingSnapshot {
    let entry = ts("2024-01-24T08:00:00Z");
    let exit = ts("2024-01-24T10:00:00Z");

    let closed = VehiclePresence {
        id: 1,
        plate: "AAA0000".to_string(),
        entry_time: entry,
        exit_time: Some(exit),
    };
    let open = VehiclePresence {
        id: 2,
        plate: "AAL2525".to_string(),
        entry_time: entry,
        exit_time: None,
    };

    let mut closed_stay = Stay::open(1, 1, "AAA0000".to_string(), entry);
    closed_stay.exit_time = Some(exit);
    closed_stay.fee = stay_fee(entry, exit);
    let open_stay = Stay::open(2, 2, "AAL2525".to_string(), entry);

    ParkingSnapshot {
        vehicles: vec![closed, open],
        stays: vec![closed_stay, open_stay],
    }
}

#[tokio::test]
async fn save_then_load_round_trips() {
    let path = temp_path("round_trip");
    let store = JsonFileStore::new(&path);

    let snapshot = sample_snapshot();
    store.save(&snapshot).await.unwrap();

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded, snapshot);
    assert_eq!(loaded.stays[0].fee.to_string(), "20.00");

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn missing_file_yields_empty_collections() {
    let store = JsonFileStore::new(temp_path("missing_no_such_file"));
    let loaded = store.load().await.unwrap();

    assert!(loaded.vehicles.is_empty());
    assert!(loaded.stays.is_empty());
}

#[tokio::test]
async fn corrupt_file_yields_empty_collections() {
    let path = temp_path("corrupt");
    std::fs::write(&path, "esto no es json {{{").unwrap();

    let store = JsonFileStore::new(&path);
    let loaded = store.load().await.unwrap();

    assert!(loaded.vehicles.is_empty());
    assert!(loaded.stays.is_empty());

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn save_overwrites_previous_snapshot() {
    let path = temp_path("overwrite");
    let store = JsonFileStore::new(&path);

    store.save(&sample_snapshot()).await.unwrap();
    store.save(&ParkingSnapshot::default()).await.unwrap();

    let loaded = store.load().await.unwrap();
    assert!(loaded.vehicles.is_empty());
    assert!(loaded.stays.is_empty());

    let _ = std::fs::remove_file(&path);
}
