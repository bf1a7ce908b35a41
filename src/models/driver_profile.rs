//! Modelo de DriverProfile
//!
//! Este módulo contiene el struct DriverProfile (tabla driver_profiles),
//! la extensión 1:1 de un usuario con rol conductor. Los campos de
//! vehículo del perfil (car_number, car_model) son texto libre y viven
//! aparte del registro de vehículos.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// DriverProfile principal - mapea exactamente a la tabla driver_profiles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DriverProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub license_number: String,
    pub car_number: String,
    pub car_model: String,
    pub description: Option<String>,
    pub rating: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
