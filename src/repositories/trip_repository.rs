use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::trip::{Trip, TripStatus};
use crate::utils::errors::AppError;

/// Repositorio de viajes.
///
/// Las transiciones de estado son un UPDATE compare-and-swap: el WHERE
/// re-verifica el estado esperado (y la asignación cuando aplica), de modo
/// que dos actores compitiendo por el mismo viaje se serializan en la base.
/// `None` como resultado significa que la fila ya no estaba en el estado
/// esperado y el llamador perdió la carrera.
pub struct TripRepository {
    pool: PgPool,
}

impl TripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, trip: &Trip) -> Result<Trip, AppError> {
        let created = sqlx::query_as::<_, Trip>(
            r#"
            INSERT INTO trips (
                id, rider_id, driver_id, origin, destination, comment,
                price, status, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(trip.id)
        .bind(trip.rider_id)
        .bind(trip.driver_id)
        .bind(&trip.origin)
        .bind(&trip.destination)
        .bind(&trip.comment)
        .bind(trip.price)
        .bind(trip.status)
        .bind(trip.created_at)
        .bind(trip.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creando viaje: {}", e)))?;

        Ok(created)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error buscando viaje: {}", e)))?;

        Ok(trip)
    }

    pub async fn find_by_rider(&self, rider_id: Uuid) -> Result<Vec<Trip>, AppError> {
        let trips = sqlx::query_as::<_, Trip>(
            "SELECT * FROM trips WHERE rider_id = $1 ORDER BY created_at DESC",
        )
        .bind(rider_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listando viajes del pasajero: {}", e)))?;

        Ok(trips)
    }

    pub async fn find_by_driver(&self, driver_id: Uuid) -> Result<Vec<Trip>, AppError> {
        let trips = sqlx::query_as::<_, Trip>(
            "SELECT * FROM trips WHERE driver_id = $1 ORDER BY created_at DESC",
        )
        .bind(driver_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listando viajes del conductor: {}", e)))?;

        Ok(trips)
    }

    pub async fn find_available(&self) -> Result<Vec<Trip>, AppError> {
        let trips = sqlx::query_as::<_, Trip>(
            "SELECT * FROM trips WHERE status = $1 ORDER BY created_at DESC",
        )
        .bind(TripStatus::Requested)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listando viajes disponibles: {}", e)))?;

        Ok(trips)
    }

    /// Aceptar un viaje asignando el perfil de conductor.
    ///
    /// El WHERE exige el estado esperado y que no haya conductor asignado:
    /// de dos accepts concurrentes exactamente uno actualiza la fila.
    pub async fn accept(
        &self,
        trip_id: Uuid,
        driver_id: Uuid,
        from: TripStatus,
    ) -> Result<Option<Trip>, AppError> {
        from.ensure_edge(TripStatus::Accepted)?;

        let trip = sqlx::query_as::<_, Trip>(
            r#"
            UPDATE trips
            SET status = $3, driver_id = $2, updated_at = NOW()
            WHERE id = $1 AND status = $4 AND driver_id IS NULL
            RETURNING *
            "#,
        )
        .bind(trip_id)
        .bind(driver_id)
        .bind(TripStatus::Accepted)
        .bind(from)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error aceptando viaje: {}", e)))?;

        Ok(trip)
    }

    /// Completar un viaje; solo el conductor asignado puede hacerlo.
    /// El precio se guarda únicamente si el conductor lo envía.
    pub async fn complete(
        &self,
        trip_id: Uuid,
        driver_id: Uuid,
        price: Option<Decimal>,
        from: TripStatus,
    ) -> Result<Option<Trip>, AppError> {
        from.ensure_edge(TripStatus::Completed)?;

        let trip = sqlx::query_as::<_, Trip>(
            r#"
            UPDATE trips
            SET status = $3, price = COALESCE($4, price), updated_at = NOW()
            WHERE id = $1 AND driver_id = $2 AND status = $5
            RETURNING *
            "#,
        )
        .bind(trip_id)
        .bind(driver_id)
        .bind(TripStatus::Completed)
        .bind(price)
        .bind(from)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error completando viaje: {}", e)))?;

        Ok(trip)
    }

    /// Cancelar un viaje; el conductor asignado (si lo hay) se conserva
    /// como historial.
    pub async fn cancel(&self, trip_id: Uuid, from: TripStatus) -> Result<Option<Trip>, AppError> {
        from.ensure_edge(TripStatus::Cancelled)?;

        let trip = sqlx::query_as::<_, Trip>(
            r#"
            UPDATE trips
            SET status = $2, updated_at = NOW()
            WHERE id = $1 AND status = $3
            RETURNING *
            "#,
        )
        .bind(trip_id)
        .bind(TripStatus::Cancelled)
        .bind(from)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error cancelando viaje: {}", e)))?;

        Ok(trip)
    }

    /// Editar origen/destino/comentario mientras el viaje sigue solicitado.
    /// Los valores llegan ya fusionados con los actuales.
    pub async fn update_details(
        &self,
        trip_id: Uuid,
        rider_id: Uuid,
        origin: String,
        destination: String,
        comment: Option<String>,
    ) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            UPDATE trips
            SET origin = $3, destination = $4, comment = $5, updated_at = NOW()
            WHERE id = $1 AND rider_id = $2 AND status = $6
            RETURNING *
            "#,
        )
        .bind(trip_id)
        .bind(rider_id)
        .bind(origin)
        .bind(destination)
        .bind(comment)
        .bind(TripStatus::Requested)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error actualizando viaje: {}", e)))?;

        Ok(trip)
    }

    /// Borrar un viaje solicitado; devuelve si se borró alguna fila
    pub async fn delete_requested(&self, trip_id: Uuid, rider_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM trips WHERE id = $1 AND rider_id = $2 AND status = $3")
            .bind(trip_id)
            .bind(rider_id)
            .bind(TripStatus::Requested)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error borrando viaje: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
