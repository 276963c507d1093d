//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! y cálculo de tarifas.

pub mod errors;
pub mod fees;
pub mod validation;
