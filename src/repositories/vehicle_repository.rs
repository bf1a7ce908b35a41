use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        driver_id: Uuid,
        car_number: String,
        car_model: String,
        seats: i32,
        year: Option<i32>,
        color: Option<String>,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (
                id, driver_id, car_number, car_model, seats, year, color,
                is_active, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE, $8, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(driver_id)
        .bind(car_number)
        .bind(car_model)
        .bind(seats)
        .bind(year)
        .bind(color)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx("Error creando vehículo", e))?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error buscando vehículo: {}", e)))?;

        Ok(vehicle)
    }

    pub async fn find_by_driver(&self, driver_id: Uuid) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE driver_id = $1 ORDER BY created_at DESC",
        )
        .bind(driver_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listando vehículos: {}", e)))?;

        Ok(vehicles)
    }

    /// La matrícula es única en todo el registro, no por conductor
    pub async fn car_number_exists(&self, car_number: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vehicles WHERE car_number = $1)")
                .bind(car_number)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error verificando matrícula: {}", e)))?;

        Ok(result.0)
    }

    pub async fn car_number_exists_excluding(
        &self,
        car_number: &str,
        vehicle_id: Uuid,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vehicles WHERE car_number = $1 AND id <> $2)",
        )
        .bind(car_number)
        .bind(vehicle_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error verificando matrícula: {}", e)))?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        driver_id: Uuid,
        car_number: Option<String>,
        car_model: Option<String>,
        seats: Option<i32>,
        year: Option<i32>,
        color: Option<String>,
        is_active: Option<bool>,
    ) -> Result<Vehicle, AppError> {
        // Obtener vehículo actual
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        // Verificar que pertenece al conductor
        if !current.is_owned_by(driver_id) {
            return Err(AppError::Forbidden(
                "El vehículo no pertenece a este conductor".to_string(),
            ));
        }

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET car_number = $2, car_model = $3, seats = $4, year = $5,
                color = $6, is_active = $7, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(car_number.unwrap_or(current.car_number))
        .bind(car_model.unwrap_or(current.car_model))
        .bind(seats.unwrap_or(current.seats))
        .bind(year.or(current.year))
        .bind(color.or(current.color))
        .bind(is_active.unwrap_or(current.is_active))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx("Error actualizando vehículo", e))?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: Uuid, driver_id: Uuid) -> Result<(), AppError> {
        // Verificar que pertenece al conductor
        let vehicle = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        if !vehicle.is_owned_by(driver_id) {
            return Err(AppError::Forbidden(
                "El vehículo no pertenece a este conductor".to_string(),
            ));
        }

        sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error borrando vehículo: {}", e)))?;

        Ok(())
    }
}
