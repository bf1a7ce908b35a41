use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::actor::{Actor, UserRole};
use crate::models::driver_profile::DriverProfile;
use crate::utils::errors::AppError;

pub struct ActorRepository {
    pool: PgPool,
}

impl ActorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_rider(
        &self,
        username: String,
        email: String,
        phone: Option<String>,
        password_hash: String,
    ) -> Result<Actor, AppError> {
        let actor = sqlx::query_as::<_, Actor>(
            r#"
            INSERT INTO users (id, username, email, phone, role, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(email)
        .bind(phone)
        .bind(UserRole::Rider)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx("Error creando usuario", e))?;

        Ok(actor)
    }

    /// Crear un conductor con su perfil en la misma transacción
    pub async fn create_driver(
        &self,
        username: String,
        email: String,
        phone: Option<String>,
        password_hash: String,
        license_number: String,
        car_number: String,
        car_model: String,
        description: Option<String>,
    ) -> Result<(Actor, DriverProfile), AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::Database(format!("Error iniciando transacción: {}", e)))?;

        let now = Utc::now();

        let actor = sqlx::query_as::<_, Actor>(
            r#"
            INSERT INTO users (id, username, email, phone, role, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(email)
        .bind(phone)
        .bind(UserRole::Driver)
        .bind(password_hash)
        .bind(now)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::from_sqlx("Error creando usuario conductor", e))?;

        let profile = sqlx::query_as::<_, DriverProfile>(
            r#"
            INSERT INTO driver_profiles (
                id, user_id, license_number, car_number, car_model,
                description, rating, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, 5.00, $7, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(actor.id)
        .bind(license_number)
        .bind(car_number)
        .bind(car_model)
        .bind(description)
        .bind(now)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::from_sqlx("Error creando perfil de conductor", e))?;

        tx.commit()
            .await
            .map_err(|e| AppError::Database(format!("Error confirmando transacción: {}", e)))?;

        Ok((actor, profile))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Actor>, AppError> {
        let actor = sqlx::query_as::<_, Actor>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error buscando usuario: {}", e)))?;

        Ok(actor)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Actor>, AppError> {
        let actor = sqlx::query_as::<_, Actor>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error buscando usuario por email: {}", e)))?;

        Ok(actor)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error verificando email: {}", e)))?;

        Ok(result.0)
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
                .bind(username)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error verificando username: {}", e)))?;

        Ok(result.0)
    }

    /// Borrar una cuenta ejecutando el contrato de borrado completo.
    ///
    /// Todo ocurre en una transacción, en orden explícito:
    /// - conductor: desasignar sus viajes (driver_id a NULL), borrar sus
    ///   vehículos, borrar su perfil y por último el usuario;
    /// - pasajero: borrar sus viajes y después el usuario.
    pub async fn delete_account(&self, actor: &Actor) -> Result<(), AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::Database(format!("Error iniciando transacción: {}", e)))?;

        match actor.role {
            UserRole::Driver => {
                let profile: Option<(Uuid,)> =
                    sqlx::query_as("SELECT id FROM driver_profiles WHERE user_id = $1")
                        .bind(actor.id)
                        .fetch_optional(&mut *tx)
                        .await
                        .map_err(|e| {
                            AppError::Database(format!("Error buscando perfil: {}", e))
                        })?;

                if let Some((profile_id,)) = profile {
                    // Los viajes asignados sobreviven sin conductor
                    sqlx::query(
                        "UPDATE trips SET driver_id = NULL, updated_at = NOW() WHERE driver_id = $1",
                    )
                    .bind(profile_id)
                    .execute(&mut *tx)
                    .await
                    .map_err(|e| {
                        AppError::Database(format!("Error desasignando viajes: {}", e))
                    })?;

                    sqlx::query("DELETE FROM vehicles WHERE driver_id = $1")
                        .bind(profile_id)
                        .execute(&mut *tx)
                        .await
                        .map_err(|e| {
                            AppError::Database(format!("Error borrando vehículos: {}", e))
                        })?;

                    sqlx::query("DELETE FROM driver_profiles WHERE id = $1")
                        .bind(profile_id)
                        .execute(&mut *tx)
                        .await
                        .map_err(|e| {
                            AppError::Database(format!("Error borrando perfil: {}", e))
                        })?;
                }
            }
            UserRole::Rider => {
                sqlx::query("DELETE FROM trips WHERE rider_id = $1")
                    .bind(actor.id)
                    .execute(&mut *tx)
                    .await
                    .map_err(|e| AppError::Database(format!("Error borrando viajes: {}", e)))?;
            }
        }

        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(actor.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::Database(format!("Error borrando usuario: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| AppError::Database(format!("Error confirmando transacción: {}", e)))?;

        Ok(())
    }
}
