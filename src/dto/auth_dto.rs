use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::dto::driver_dto::DriverProfileResponse;
use crate::models::actor::{Actor, UserRole};

// Request de registro (los campos de conductor son obligatorios si role = driver)
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 150))]
    pub username: String,

    #[validate(email)]
    pub email: String,

    pub phone: Option<String>,

    #[validate(length(min = 8, max = 128))]
    pub password: String,

    pub role: UserRole,

    // Campos de perfil de conductor
    #[validate(length(min = 3, max = 50))]
    pub license_number: Option<String>,

    #[validate(length(min = 5, max = 20))]
    pub car_number: Option<String>,

    #[validate(length(min = 2, max = 100))]
    pub car_model: Option<String>,

    #[validate(length(max = 500))]
    pub description: Option<String>,
}

// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// Resumen del actor autenticado (sin password)
#[derive(Debug, Serialize)]
pub struct ActorResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_profile: Option<DriverProfileResponse>,
}

impl ActorResponse {
    pub fn from_actor(actor: Actor, driver_profile: Option<DriverProfileResponse>) -> Self {
        Self {
            id: actor.id,
            username: actor.username,
            email: actor.email,
            phone: actor.phone,
            role: actor.role,
            driver_profile,
        }
    }
}

// Sesión emitida al registrarse o iniciar sesión
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub success: bool,
    pub token: Option<String>,
    pub message: Option<String>,
    pub user: Option<ActorResponse>,
}

impl SessionResponse {
    pub fn success(token: String, user: ActorResponse, message: String) -> Self {
        Self {
            success: true,
            token: Some(token),
            message: Some(message),
            user: Some(user),
        }
    }
}
