use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::trip_dto::ApiResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::middleware::auth::AuthenticatedActor;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::validation::validate_car_number;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    /// Registrar un vehículo (solo conductores)
    pub async fn create(
        &self,
        actor: &AuthenticatedActor,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        let profile_id = actor.driver_profile_id().ok_or_else(|| {
            AppError::NotDriver("Solo los conductores pueden registrar vehículos".to_string())
        })?;

        request.validate()?;
        validate_car_number(&request.car_number)
            .map_err(|_| validation_error("car_number", "Formato de matrícula inválido"))?;

        // La matrícula es única en todo el registro
        if self.repository.car_number_exists(&request.car_number).await? {
            return Err(AppError::DuplicateKey(
                "La matrícula ya está registrada".to_string(),
            ));
        }

        let vehicle = self
            .repository
            .create(
                profile_id,
                request.car_number,
                request.car_model,
                request.seats.unwrap_or(4),
                request.year,
                request.color,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo registrado exitosamente".to_string(),
        ))
    }

    /// Listar los vehículos del conductor autenticado
    pub async fn list(&self, actor: &AuthenticatedActor) -> Result<Vec<VehicleResponse>, AppError> {
        let profile_id = actor.driver_profile_id().ok_or_else(|| {
            AppError::NotDriver("Solo los conductores tienen vehículos".to_string())
        })?;

        let vehicles = self.repository.find_by_driver(profile_id).await?;

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    /// Detalle de un vehículo propio
    pub async fn get_by_id(
        &self,
        actor: &AuthenticatedActor,
        id: Uuid,
    ) -> Result<VehicleResponse, AppError> {
        let profile_id = actor.driver_profile_id().ok_or_else(|| {
            AppError::NotDriver("Solo los conductores tienen vehículos".to_string())
        })?;

        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        if !vehicle.is_owned_by(profile_id) {
            return Err(AppError::Forbidden(
                "El vehículo no pertenece a este conductor".to_string(),
            ));
        }

        Ok(vehicle.into())
    }

    /// Actualizar un vehículo propio
    pub async fn update(
        &self,
        actor: &AuthenticatedActor,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        let profile_id = actor.driver_profile_id().ok_or_else(|| {
            AppError::NotDriver("Solo los conductores tienen vehículos".to_string())
        })?;

        request.validate()?;

        if let Some(ref car_number) = request.car_number {
            validate_car_number(car_number)
                .map_err(|_| validation_error("car_number", "Formato de matrícula inválido"))?;

            if self
                .repository
                .car_number_exists_excluding(car_number, id)
                .await?
            {
                return Err(AppError::DuplicateKey(
                    "La matrícula ya está registrada".to_string(),
                ));
            }
        }

        let vehicle = self
            .repository
            .update(
                id,
                profile_id,
                request.car_number,
                request.car_model,
                request.seats,
                request.year,
                request.color,
                request.is_active,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    /// Borrar un vehículo propio
    pub async fn delete(
        &self,
        actor: &AuthenticatedActor,
        id: Uuid,
    ) -> Result<ApiResponse<()>, AppError> {
        let profile_id = actor.driver_profile_id().ok_or_else(|| {
            AppError::NotDriver("Solo los conductores tienen vehículos".to_string())
        })?;

        self.repository.delete(id, profile_id).await?;

        Ok(ApiResponse::success_with_message(
            (),
            "Vehículo eliminado exitosamente".to_string(),
        ))
    }
}
