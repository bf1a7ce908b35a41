//! Modelo de Trip
//!
//! Este módulo contiene el struct Trip y su máquina de estados.
//! Los predicados de transición y de autorización viven aquí para poder
//! probarse sin base de datos; los repositories vuelven a imponer las
//! mismas guardas dentro del WHERE del UPDATE (compare-and-swap).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

use crate::utils::errors::AppError;

/// Estado del viaje - mapea al ENUM trip_status
///
/// `requested` es el estado inicial; `completed` y `cancelled` son
/// terminales y no tienen transiciones de salida.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "trip_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Requested,
    Accepted,
    Completed,
    Cancelled,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Requested => "requested",
            TripStatus::Accepted => "accepted",
            TripStatus::Completed => "completed",
            TripStatus::Cancelled => "cancelled",
        }
    }

    /// Verificar si el estado es terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, TripStatus::Completed | TripStatus::Cancelled)
    }

    /// Tabla de transiciones permitidas de la máquina de estados
    pub fn allows(&self, to: TripStatus) -> bool {
        matches!(
            (*self, to),
            (TripStatus::Requested, TripStatus::Accepted)
                | (TripStatus::Requested, TripStatus::Cancelled)
                | (TripStatus::Accepted, TripStatus::Completed)
                | (TripStatus::Accepted, TripStatus::Cancelled)
        )
    }

    /// Rechazar con `InvalidTransition` cualquier arista no definida
    pub fn ensure_edge(&self, to: TripStatus) -> Result<(), AppError> {
        if self.allows(to) {
            Ok(())
        } else {
            Err(AppError::InvalidTransition(format!(
                "No existe transición de '{}' a '{}'",
                self.as_str(),
                to.as_str()
            )))
        }
    }
}

/// Trip principal - mapea exactamente a la tabla trips
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Trip {
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

impl Trip {
    /// Crear una nueva solicitud de viaje (estado inicial, sin conductor)
    pub fn new_request(
        rider_id: Uuid,
        origin: String,
        destination: String,
        comment: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            rider_id,
            driver_id: None,
            origin,
            destination,
            comment,
            price: None,
            status: TripStatus::Requested,
            created_at: now,
            updated_at: now,
        }
    }

    /// Un viaje solo puede aceptarse mientras está solicitado
    pub fn can_be_accepted(&self) -> bool {
        self.status == TripStatus::Requested
    }

    /// Un viaje solo puede editarse (o borrarse) mientras está solicitado
    pub fn can_be_edited(&self) -> bool {
        self.status == TripStatus::Requested
    }

    /// Un viaje solo puede completarse una vez aceptado
    pub fn can_be_completed(&self) -> bool {
        self.status == TripStatus::Accepted
    }

    /// Un viaje puede cancelarse desde cualquier estado no terminal
    pub fn can_be_cancelled(&self) -> bool {
        matches!(self.status, TripStatus::Requested | TripStatus::Accepted)
    }

    /// Verificar si el actor es el pasajero dueño del viaje
    pub fn is_owned_by(&self, actor_id: Uuid) -> bool {
        self.rider_id == actor_id
    }

    /// Verificar si el perfil de conductor es el asignado al viaje
    pub fn is_assigned_to(&self, profile_id: Uuid) -> bool {
        self.driver_id == Some(profile_id)
    }
}
