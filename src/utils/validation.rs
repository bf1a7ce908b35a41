//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! que complementan las validaciones derive de los DTOs.

use regex::Regex;
use serde::Serialize;
use validator::ValidationError;

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar longitud mínima y máxima
pub fn validate_length(value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        let mut error = ValidationError::new("length");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &len);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor esté en un rango específico
pub fn validate_range<T: PartialOrd + std::fmt::Display + Serialize>(
    value: T,
    min: T,
    max: T,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        let mut error = ValidationError::new("range");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de teléfono (básico)
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let clean_phone = value.chars().filter(|c| c.is_digit(10)).collect::<String>();
    if clean_phone.len() < 10 || clean_phone.len() > 15 {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de matrícula de vehículo
///
/// Acepta bloques alfanuméricos en mayúsculas separados por guiones
/// (ej: "ABC-123", "XYZ-789", "AB-123-CD"), entre 5 y 10 caracteres útiles.
pub fn validate_car_number(value: &str) -> Result<(), ValidationError> {
    let plate_regex = Regex::new(r"^[A-Z0-9]+(-[A-Z0-9]+)*$").unwrap();

    let clean_plate = value.replace('-', "");
    if clean_plate.len() < 5 || clean_plate.len() > 10 || !plate_regex.is_match(value) {
        let mut error = ValidationError::new("car_number");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"AAA-123".to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("hola").is_ok());
        assert!(validate_not_empty("").is_err());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_length() {
        let value = "test";
        assert!(validate_length(value, 1, 10).is_ok());
        assert!(validate_length(value, 5, 10).is_err());
        assert!(validate_length(value, 1, 3).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range(5, 1, 10).is_ok());
        assert!(validate_range(0, 1, 10).is_err());
        assert!(validate_range(15, 1, 10).is_err());
        assert!(validate_range(2020, 1900, 2030).is_ok());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(5).is_ok());
        assert!(validate_positive(0).is_err());
        assert!(validate_positive(-5).is_err());
        assert!(validate_positive(Decimal::new(2550, 2)).is_ok());
        assert!(validate_positive(Decimal::ZERO).is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("1234567890").is_ok());
        assert!(validate_phone("+1 (234) 567-8900").is_ok());
        assert!(validate_phone("123").is_err());
        assert!(validate_phone("1234567890123456").is_err());
    }

    #[test]
    fn test_validate_car_number() {
        assert!(validate_car_number("ABC-123").is_ok());
        assert!(validate_car_number("XYZ-789").is_ok());
        assert!(validate_car_number("AB-123-CD").is_ok());
        assert!(validate_car_number("A").is_err());
        assert!(validate_car_number("abc-123").is_err());
        assert!(validate_car_number("ABCDEFGHIJK").is_err());
        assert!(validate_car_number("ABC 123").is_err());
    }
}
