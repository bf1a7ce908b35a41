use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::trip_dto::{
    ApiResponse, CompleteTripRequest, CreateTripRequest, TripResponse, UpdateTripRequest,
};
use crate::middleware::auth::AuthenticatedActor;
use crate::models::trip::Trip;
use crate::repositories::trip_repository::TripRepository;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::validation::{validate_not_empty, validate_positive};

/// Controlador del ciclo de vida de los viajes.
///
/// Cada operación evalúa primero sus guardas (rol, existencia, estado,
/// autorización) y solo después muta; cualquier rechazo ocurre sin efectos.
pub struct TripController {
    repository: TripRepository,
}

impl TripController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TripRepository::new(pool),
        }
    }

    /// Solicitar un viaje (solo pasajeros)
    pub async fn create(
        &self,
        actor: &AuthenticatedActor,
        request: CreateTripRequest,
    ) -> Result<ApiResponse<TripResponse>, AppError> {
        if actor.role.is_driver() {
            return Err(AppError::NotRider(
                "Solo los pasajeros pueden solicitar viajes".to_string(),
            ));
        }

        request.validate()?;
        validate_not_empty(&request.origin)
            .map_err(|_| validation_error("origin", "El origen es requerido"))?;
        validate_not_empty(&request.destination)
            .map_err(|_| validation_error("destination", "El destino es requerido"))?;

        let trip = Trip::new_request(
            actor.actor_id,
            request.origin,
            request.destination,
            request.comment,
        );
        let saved = self.repository.create(&trip).await?;

        Ok(ApiResponse::success_with_message(
            saved.into(),
            "Viaje solicitado exitosamente".to_string(),
        ))
    }

    /// Aceptar un viaje solicitado (solo conductores)
    pub async fn accept(
        &self,
        actor: &AuthenticatedActor,
        trip_id: Uuid,
    ) -> Result<ApiResponse<TripResponse>, AppError> {
        let profile_id = actor.driver_profile_id().ok_or_else(|| {
            AppError::NotDriver("Solo los conductores pueden aceptar viajes".to_string())
        })?;

        let trip = self
            .repository
            .find_by_id(trip_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        if !trip.can_be_accepted() {
            return Err(AppError::NotAcceptable(
                "Este viaje ya no está disponible".to_string(),
            ));
        }

        // El UPDATE re-verifica el estado; de dos accepts gana uno solo
        let accepted = self
            .repository
            .accept(trip_id, profile_id, trip.status)
            .await?
            .ok_or_else(|| {
                AppError::NotAcceptable("Este viaje ya no está disponible".to_string())
            })?;

        Ok(ApiResponse::success_with_message(
            accepted.into(),
            "Viaje aceptado exitosamente".to_string(),
        ))
    }

    /// Completar un viaje aceptado (solo el conductor asignado)
    pub async fn complete(
        &self,
        actor: &AuthenticatedActor,
        trip_id: Uuid,
        request: CompleteTripRequest,
    ) -> Result<ApiResponse<TripResponse>, AppError> {
        if let Some(price) = request.price {
            validate_positive(price)
                .map_err(|_| validation_error("price", "El precio debe ser mayor que cero"))?;
        }

        let trip = self
            .repository
            .find_by_id(trip_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        // Un viaje solicitado no tiene conductor asignado todavía, así que
        // el estado se verifica antes que la asignación
        if !trip.can_be_completed() {
            return Err(AppError::NotCompletable(
                "Este viaje no puede completarse".to_string(),
            ));
        }

        let profile_id = match actor.driver_profile_id() {
            Some(profile_id) if trip.is_assigned_to(profile_id) => profile_id,
            _ => {
                return Err(AppError::Forbidden(
                    "Solo el conductor asignado puede completar este viaje".to_string(),
                ))
            }
        };

        let completed = self
            .repository
            .complete(trip_id, profile_id, request.price, trip.status)
            .await?
            .ok_or_else(|| {
                AppError::NotCompletable("Este viaje no puede completarse".to_string())
            })?;

        Ok(ApiResponse::success_with_message(
            completed.into(),
            "Viaje completado exitosamente".to_string(),
        ))
    }

    /// Cancelar un viaje no terminal (el pasajero dueño o el conductor asignado)
    pub async fn cancel(
        &self,
        actor: &AuthenticatedActor,
        trip_id: Uuid,
    ) -> Result<ApiResponse<TripResponse>, AppError> {
        let trip = self
            .repository
            .find_by_id(trip_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        let is_rider = trip.is_owned_by(actor.actor_id);
        let is_assigned = actor
            .driver_profile_id()
            .map(|profile_id| trip.is_assigned_to(profile_id))
            .unwrap_or(false);

        if !(is_rider || is_assigned) {
            return Err(AppError::Forbidden(
                "No tienes permiso para cancelar este viaje".to_string(),
            ));
        }

        if !trip.can_be_cancelled() {
            return Err(AppError::NotCancellable(
                "Este viaje no puede cancelarse".to_string(),
            ));
        }

        let cancelled = self
            .repository
            .cancel(trip_id, trip.status)
            .await?
            .ok_or_else(|| {
                AppError::NotCancellable("Este viaje no puede cancelarse".to_string())
            })?;

        Ok(ApiResponse::success_with_message(
            cancelled.into(),
            "Viaje cancelado exitosamente".to_string(),
        ))
    }

    /// Editar origen/destino/comentario de un viaje solicitado (solo el dueño)
    pub async fn update(
        &self,
        actor: &AuthenticatedActor,
        trip_id: Uuid,
        request: UpdateTripRequest,
    ) -> Result<ApiResponse<TripResponse>, AppError> {
        request.validate()?;
        if let Some(ref origin) = request.origin {
            validate_not_empty(origin)
                .map_err(|_| validation_error("origin", "El origen no puede estar vacío"))?;
        }
        if let Some(ref destination) = request.destination {
            validate_not_empty(destination)
                .map_err(|_| validation_error("destination", "El destino no puede estar vacío"))?;
        }

        let trip = self
            .repository
            .find_by_id(trip_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        if !trip.is_owned_by(actor.actor_id) {
            return Err(AppError::Forbidden(
                "Solo el pasajero dueño puede editar este viaje".to_string(),
            ));
        }

        if !trip.can_be_edited() {
            return Err(AppError::NotEditable(
                "Este viaje ya no puede editarse".to_string(),
            ));
        }

        // Fusionar con los valores actuales antes del compare-and-swap
        let updated = self
            .repository
            .update_details(
                trip_id,
                actor.actor_id,
                request.origin.unwrap_or(trip.origin),
                request.destination.unwrap_or(trip.destination),
                request.comment.or(trip.comment),
            )
            .await?
            .ok_or_else(|| {
                AppError::NotEditable("Este viaje ya no puede editarse".to_string())
            })?;

        Ok(ApiResponse::success_with_message(
            updated.into(),
            "Viaje actualizado exitosamente".to_string(),
        ))
    }

    /// Borrar un viaje solicitado (solo el dueño; misma regla que editar)
    pub async fn delete(
        &self,
        actor: &AuthenticatedActor,
        trip_id: Uuid,
    ) -> Result<ApiResponse<()>, AppError> {
        let trip = self
            .repository
            .find_by_id(trip_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        if !trip.is_owned_by(actor.actor_id) {
            return Err(AppError::Forbidden(
                "Solo el pasajero dueño puede borrar este viaje".to_string(),
            ));
        }

        if !trip.can_be_edited() {
            return Err(AppError::NotEditable(
                "Este viaje ya no puede borrarse".to_string(),
            ));
        }

        let deleted = self
            .repository
            .delete_requested(trip_id, actor.actor_id)
            .await?;

        if !deleted {
            return Err(AppError::NotEditable(
                "Este viaje ya no puede borrarse".to_string(),
            ));
        }

        Ok(ApiResponse::success_with_message(
            (),
            "Viaje eliminado exitosamente".to_string(),
        ))
    }

    /// Detalle de un viaje (cualquier actor autenticado)
    pub async fn get_by_id(&self, trip_id: Uuid) -> Result<TripResponse, AppError> {
        let trip = self
            .repository
            .find_by_id(trip_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        Ok(trip.into())
    }

    /// Listar los viajes del actor: los suyos como pasajero, o los
    /// asignados a su perfil como conductor
    pub async fn list_for_actor(
        &self,
        actor: &AuthenticatedActor,
    ) -> Result<Vec<TripResponse>, AppError> {
        let trips = match actor.driver_profile_id() {
            Some(profile_id) => self.repository.find_by_driver(profile_id).await?,
            None => self.repository.find_by_rider(actor.actor_id).await?,
        };

        Ok(trips.into_iter().map(TripResponse::from).collect())
    }

    /// Listar los viajes solicitados aún sin conductor
    pub async fn list_available(&self) -> Result<Vec<TripResponse>, AppError> {
        let trips = self.repository.find_available().await?;

        Ok(trips.into_iter().map(TripResponse::from).collect())
    }
}
