use bcrypt::{hash, verify};
use sqlx::PgPool;
use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{ActorResponse, LoginRequest, RegisterRequest, SessionResponse};
use crate::dto::trip_dto::ApiResponse;
use crate::middleware::auth::AuthenticatedActor;
use crate::models::actor::UserRole;
use crate::repositories::actor_repository::ActorRepository;
use crate::repositories::driver_repository::DriverRepository;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::jwt::{generate_token, JwtConfig};
use crate::utils::validation::{validate_car_number, validate_phone};

pub struct AuthController {
    actors: ActorRepository,
    drivers: DriverRepository,
    config: EnvironmentConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            actors: ActorRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool),
            config,
        }
    }

    /// Registrar una cuenta; un conductor crea también su perfil en la
    /// misma transacción
    pub async fn register(&self, request: RegisterRequest) -> Result<SessionResponse, AppError> {
        request.validate()?;

        if let Some(ref phone) = request.phone {
            validate_phone(phone)
                .map_err(|_| validation_error("phone", "Formato de teléfono inválido"))?;
        }

        // Los campos de conductor son obligatorios para conductores
        let driver_fields = match request.role {
            UserRole::Driver => {
                let license_number = request.license_number.clone().ok_or_else(|| {
                    validation_error("license_number", "La licencia es requerida para conductores")
                })?;
                let car_number = request.car_number.clone().ok_or_else(|| {
                    validation_error("car_number", "La matrícula es requerida para conductores")
                })?;
                let car_model = request.car_model.clone().ok_or_else(|| {
                    validation_error("car_model", "El modelo del coche es requerido para conductores")
                })?;

                validate_car_number(&car_number)
                    .map_err(|_| validation_error("car_number", "Formato de matrícula inválido"))?;

                Some((license_number, car_number, car_model))
            }
            UserRole::Rider => None,
        };

        // Verificar unicidad de email y username
        if self.actors.email_exists(&request.email).await? {
            return Err(AppError::DuplicateKey("El email ya está registrado".to_string()));
        }

        if self.actors.username_exists(&request.username).await? {
            return Err(AppError::DuplicateKey("El username ya está registrado".to_string()));
        }

        // Hash de la contraseña
        let password_hash = hash(&request.password, self.config.bcrypt_cost)
            .map_err(|e| AppError::Hash(format!("Error generando hash: {}", e)))?;

        let (actor, profile) = match driver_fields {
            Some((license_number, car_number, car_model)) => {
                if self.drivers.license_number_exists(&license_number).await? {
                    return Err(AppError::DuplicateKey(
                        "La licencia ya está registrada".to_string(),
                    ));
                }

                let (actor, profile) = self
                    .actors
                    .create_driver(
                        request.username,
                        request.email,
                        request.phone,
                        password_hash,
                        license_number,
                        car_number,
                        car_model,
                        request.description,
                    )
                    .await?;

                (actor, Some(profile))
            }
            None => {
                let actor = self
                    .actors
                    .create_rider(request.username, request.email, request.phone, password_hash)
                    .await?;

                (actor, None)
            }
        };

        let token = generate_token(actor.id, actor.role.as_str(), &JwtConfig::from(&self.config))?;
        let user = ActorResponse::from_actor(actor, profile.map(Into::into));

        Ok(SessionResponse::success(
            token,
            user,
            "Cuenta creada exitosamente".to_string(),
        ))
    }

    pub async fn login(&self, request: LoginRequest) -> Result<SessionResponse, AppError> {
        // Buscar usuario por email
        let actor = self
            .actors
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        // Verificar contraseña
        let valid = verify(&request.password, &actor.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verificando contraseña: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let profile = match actor.role {
            UserRole::Driver => self.drivers.find_by_user_id(actor.id).await?,
            UserRole::Rider => None,
        };

        let token = generate_token(actor.id, actor.role.as_str(), &JwtConfig::from(&self.config))?;
        let user = ActorResponse::from_actor(actor, profile.map(Into::into));

        Ok(SessionResponse::success(
            token,
            user,
            "Sesión iniciada exitosamente".to_string(),
        ))
    }

    /// Resumen del actor autenticado
    pub async fn me(&self, actor: &AuthenticatedActor) -> Result<ActorResponse, AppError> {
        let user = self
            .actors
            .find_by_id(actor.actor_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        let profile = match actor.driver_profile_id() {
            Some(profile_id) => self.drivers.find_by_id(profile_id).await?,
            None => None,
        };

        Ok(ActorResponse::from_actor(user, profile.map(Into::into)))
    }

    /// Borrar la cuenta del actor ejecutando el contrato de borrado
    pub async fn delete_account(
        &self,
        actor: &AuthenticatedActor,
    ) -> Result<ApiResponse<()>, AppError> {
        let user = self
            .actors
            .find_by_id(actor.actor_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        self.actors.delete_account(&user).await?;

        Ok(ApiResponse::success_with_message(
            (),
            "Cuenta eliminada exitosamente".to_string(),
        ))
    }
}
