//! Cálculo de tarifas
//!
//! Este módulo contiene las utilidades de tiempo y dinero para facturar
//! una estadía: toda hora iniciada se cobra completa, a tarifa fija.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Tarifa fija: 10.00 por hora iniciada
pub const HOURLY_RATE: Decimal = Decimal::from_parts(1000, 0, 0, false, 2);

/// Valor cero con la misma escala que la tarifa
pub const ZERO_FEE: Decimal = Decimal::from_parts(0, 0, 0, false, 2);

const SECONDS_PER_HOUR: i64 = 3600;

/// Horas facturables entre entrada y salida (techo de la duración).
/// Una estadía de duración cero factura 0 horas; cualquier duración
/// positiva, por breve que sea, cuenta como hora completa.
pub fn billable_hours(entry: DateTime<Utc>, exit: DateTime<Utc>) -> i64 {
    let duration = exit - entry;
    if duration <= chrono::Duration::zero() {
        return 0;
    }
    let hours = (duration.num_seconds() + SECONDS_PER_HOUR - 1) / SECONDS_PER_HOUR;
    hours.max(1)
}

/// Valor de la estadía: horas facturables por la tarifa fija
pub fn stay_fee(entry: DateTime<Utc>, exit: DateTime<Utc>) -> Decimal {
    Decimal::from(billable_hours(entry, exit)) * HOURLY_RATE
}
