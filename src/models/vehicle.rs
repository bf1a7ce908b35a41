//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle (tabla vehicles). Un conductor
//! puede registrar varios vehículos; la matrícula (car_number) es única
//! en todo el registro, no por conductor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub car_number: String,
    pub car_model: String,
    pub seats: i32,
    pub year: Option<i32>,
    pub color: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    /// Verificar si el vehículo pertenece al perfil de conductor dado
    pub fn is_owned_by(&self, profile_id: Uuid) -> bool {
        self.driver_id == profile_id
    }
}
