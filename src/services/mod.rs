//! Services module
//!
//! Este módulo contiene la lógica de negocio: el tracker de presencia,
//! el ledger de estadías y el servicio que los orquesta con persistencia.

pub mod parking_service;
pub mod presence_tracker;
pub mod stay_ledger;

pub use parking_service::ParkingService;
