//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos del estacionamiento:
//! registros de presencia y estadías facturables.

pub mod stay;
pub mod vehicle;
