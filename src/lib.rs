//! API Estacionamiento
//!
//! Servicio de registro de un estacionamiento: controla entradas y
//! salidas de vehículos y deriva estadías facturables de las marcas
//! de tiempo, con tarifa fija por hora iniciada.

pub mod config;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;
