use sqlx::PgPool;
use uuid::Uuid;

use crate::models::driver_profile::DriverProfile;
use crate::utils::errors::AppError;

pub struct DriverRepository {
    pool: PgPool,
}

impl DriverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<DriverProfile>, AppError> {
        let profile =
            sqlx::query_as::<_, DriverProfile>("SELECT * FROM driver_profiles WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error buscando perfil: {}", e)))?;

        Ok(profile)
    }

    pub async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<DriverProfile>, AppError> {
        let profile =
            sqlx::query_as::<_, DriverProfile>("SELECT * FROM driver_profiles WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::Database(format!("Error buscando perfil por usuario: {}", e))
                })?;

        Ok(profile)
    }

    pub async fn license_number_exists(&self, license_number: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM driver_profiles WHERE license_number = $1)")
                .bind(license_number)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error verificando licencia: {}", e)))?;

        Ok(result.0)
    }

    pub async fn license_number_exists_excluding(
        &self,
        license_number: &str,
        profile_id: Uuid,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM driver_profiles WHERE license_number = $1 AND id <> $2)",
        )
        .bind(license_number)
        .bind(profile_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error verificando licencia: {}", e)))?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        profile_id: Uuid,
        license_number: Option<String>,
        car_number: Option<String>,
        car_model: Option<String>,
        description: Option<String>,
    ) -> Result<DriverProfile, AppError> {
        // Obtener perfil actual
        let current = self
            .find_by_id(profile_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Perfil de conductor no encontrado".to_string()))?;

        let profile = sqlx::query_as::<_, DriverProfile>(
            r#"
            UPDATE driver_profiles
            SET license_number = $2, car_number = $3, car_model = $4,
                description = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(profile_id)
        .bind(license_number.unwrap_or(current.license_number))
        .bind(car_number.unwrap_or(current.car_number))
        .bind(car_model.unwrap_or(current.car_model))
        .bind(description.or(current.description))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx("Error actualizando perfil", e))?;

        Ok(profile)
    }
}
