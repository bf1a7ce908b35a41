use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::driver_profile::DriverProfile;

// Request para actualizar el perfil de conductor propio
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 3, max = 50))]
    pub license_number: Option<String>,

    #[validate(length(min = 5, max = 20))]
    pub car_number: Option<String>,

    #[validate(length(min = 2, max = 100))]
    pub car_model: Option<String>,

    #[validate(length(max = 500))]
    pub description: Option<String>,
}

// Response de perfil de conductor
#[derive(Debug, Serialize)]
pub struct DriverProfileResponse {
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

impl From<DriverProfile> for DriverProfileResponse {
    fn from(profile: DriverProfile) -> Self {
        Self {
            id: profile.id,
            user_id: profile.user_id,
            license_number: profile.license_number,
            car_number: profile.car_number,
            car_model: profile.car_model,
            description: profile.description,
            rating: profile.rating,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}
