use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::trip::{Trip, TripStatus};

// Request para solicitar un viaje
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTripRequest {
    #[validate(length(min = 1, max = 255))]
    pub origin: String,

    #[validate(length(min = 1, max = 255))]
    pub destination: String,

    #[validate(length(max = 500))]
    pub comment: Option<String>,
}

// Request para editar un viaje solicitado
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTripRequest {
    #[validate(length(min = 1, max = 255))]
    pub origin: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub destination: Option<String>,

    #[validate(length(max = 500))]
    pub comment: Option<String>,
}

// Request para completar un viaje (el precio lo pone el conductor)
#[derive(Debug, Deserialize)]
pub struct CompleteTripRequest {
    pub price: Option<Decimal>,
}

// Response de viaje
#[derive(Debug, Serialize)]
pub struct TripResponse {
    pub id: Uuid,
    pub rider_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub origin: String,
    pub destination: String,
    pub comment: Option<String>,
    pub price: Option<Decimal>,
    pub status: TripStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Trip> for TripResponse {
    fn from(trip: Trip) -> Self {
        Self {
            id: trip.id,
            rider_id: trip.rider_id,
            driver_id: trip.driver_id,
            origin: trip.origin,
            destination: trip.destination,
            comment: trip.comment,
            price: trip.price,
            status: trip.status,
            created_at: trip.created_at,
            updated_at: trip.updated_at,
        }
    }
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
