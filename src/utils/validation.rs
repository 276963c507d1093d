//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación y
//! normalización de datos de entrada.

use crate::utils::errors::AppError;

/// Normalizar y validar una placa: trim + mayúsculas.
/// La placa resultante debe ser alfanumérica ASCII y no vacía.
pub fn normalize_plate(value: &str) -> Result<String, AppError> {
    let plate = value.trim().to_uppercase();

    if plate.is_empty() {
        return Err(AppError::Validation("la placa es requerida".to_string()));
    }

    if !plate.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::Validation(format!(
            "placa inválida: '{}'",
            value.trim()
        )));
    }

    Ok(plate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normaliza_a_mayusculas() {
        assert_eq!(normalize_plate("aal2525").unwrap(), "AAL2525");
    }

    #[test]
    fn recorta_espacios() {
        assert_eq!(normalize_plate("  abc1234  ").unwrap(), "ABC1234");
    }

    #[test]
    fn rechaza_placa_vacia() {
        assert!(matches!(
            normalize_plate("   "),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(normalize_plate(""), Err(AppError::Validation(_))));
    }

    #[test]
    fn rechaza_caracteres_invalidos() {
        assert!(matches!(
            normalize_plate("ab-1234"),
            Err(AppError::Validation(_))
        ));
    }
}
