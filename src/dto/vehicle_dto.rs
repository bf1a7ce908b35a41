use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::Vehicle;

// Request para registrar un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 5, max = 20))]
    pub car_number: String,

    #[validate(length(min = 2, max = 100))]
    pub car_model: String,

    #[validate(range(min = 1, max = 10))]
    pub seats: Option<i32>,

    #[validate(range(min = 1900, max = 2030))]
    pub year: Option<i32>,

    #[validate(length(min = 2, max = 30))]
    pub color: Option<String>,
}

// Request para actualizar un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 5, max = 20))]
    pub car_number: Option<String>,

    #[validate(length(min = 2, max = 100))]
    pub car_model: Option<String>,

    #[validate(range(min = 1, max = 10))]
    pub seats: Option<i32>,

    #[validate(range(min = 1900, max = 2030))]
    pub year: Option<i32>,

    #[validate(length(min = 2, max = 30))]
    pub color: Option<String>,

    pub is_active: Option<bool>,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
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

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            driver_id: vehicle.driver_id,
            car_number: vehicle.car_number,
            car_model: vehicle.car_model,
            seats: vehicle.seats,
            year: vehicle.year,
            color: vehicle.color,
            is_active: vehicle.is_active,
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
        }
    }
}
