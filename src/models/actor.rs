//! Modelo de Actor
//!
//! Este módulo contiene el struct Actor (tabla users) y los tipos de rol.
//! `ActorRole` es el rol ya resuelto de un actor autenticado: un conductor
//! siempre lleva el id de su perfil, de modo que aguas abajo del middleware
//! no existe el estado "conductor sin perfil".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Rol de usuario - mapea al ENUM user_role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Rider,
    Driver,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Rider => "rider",
            UserRole::Driver => "driver",
        }
    }
}

/// Actor principal - mapea exactamente a la tabla users
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Actor {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Rol resuelto de un actor autenticado
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActorRole {
    Rider,
    Driver { profile_id: Uuid },
}

impl ActorRole {
    pub fn is_rider(&self) -> bool {
        matches!(self, ActorRole::Rider)
    }

    pub fn is_driver(&self) -> bool {
        matches!(self, ActorRole::Driver { .. })
    }

    /// Id del perfil de conductor, si el actor es conductor
    pub fn driver_profile_id(&self) -> Option<Uuid> {
        match self {
            ActorRole::Driver { profile_id } => Some(*profile_id),
            ActorRole::Rider => None,
        }
    }
}
