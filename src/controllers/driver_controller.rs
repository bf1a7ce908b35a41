use sqlx::PgPool;
use validator::Validate;

use crate::dto::driver_dto::{DriverProfileResponse, UpdateProfileRequest};
use crate::dto::trip_dto::ApiResponse;
use crate::middleware::auth::AuthenticatedActor;
use crate::repositories::driver_repository::DriverRepository;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::validation::validate_car_number;

pub struct DriverController {
    repository: DriverRepository,
}

impl DriverController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DriverRepository::new(pool),
        }
    }

    /// Perfil del conductor autenticado
    pub async fn get_profile(
        &self,
        actor: &AuthenticatedActor,
    ) -> Result<DriverProfileResponse, AppError> {
        let profile_id = actor.driver_profile_id().ok_or_else(|| {
            AppError::NotDriver("Solo los conductores tienen perfil".to_string())
        })?;

        let profile = self
            .repository
            .find_by_id(profile_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Perfil de conductor no encontrado".to_string()))?;

        Ok(profile.into())
    }

    /// Actualizar el perfil propio
    pub async fn update_profile(
        &self,
        actor: &AuthenticatedActor,
        request: UpdateProfileRequest,
    ) -> Result<ApiResponse<DriverProfileResponse>, AppError> {
        let profile_id = actor.driver_profile_id().ok_or_else(|| {
            AppError::NotDriver("Solo los conductores tienen perfil".to_string())
        })?;

        request.validate()?;

        if let Some(ref car_number) = request.car_number {
            validate_car_number(car_number)
                .map_err(|_| validation_error("car_number", "Formato de matrícula inválido"))?;
        }

        // Verificar que la licencia no colisione con otro perfil
        if let Some(ref license_number) = request.license_number {
            if self
                .repository
                .license_number_exists_excluding(license_number, profile_id)
                .await?
            {
                return Err(AppError::DuplicateKey(
                    "La licencia ya está registrada".to_string(),
                ));
            }
        }

        let profile = self
            .repository
            .update(
                profile_id,
                request.license_number,
                request.car_number,
                request.car_model,
                request.description,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            profile.into(),
            "Perfil actualizado exitosamente".to_string(),
        ))
    }
}
