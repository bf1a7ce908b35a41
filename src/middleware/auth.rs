//! Middleware de autenticación JWT
//!
//! Este módulo resuelve el token Bearer a un `AuthenticatedActor`. El rol
//! efectivo se recarga siempre desde la base de datos; el claim del token
//! es solo una pista. Un usuario con rol conductor sin perfil asociado no
//! puede producir un actor válido.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::{
    models::actor::{Actor, ActorRole, UserRole},
    state::AppState,
    utils::errors::AppError,
    utils::jwt::{extract_token_from_header, verify_token, JwtConfig},
};

/// Actor autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedActor {
    pub actor_id: Uuid,
    pub role: ActorRole,
}

impl AuthenticatedActor {
    /// Id del perfil de conductor, si el actor es conductor
    pub fn driver_profile_id(&self) -> Option<Uuid> {
        self.role.driver_profile_id()
    }
}

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extraer token del header Authorization
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

    let token = extract_token_from_header(auth_header)?;

    // Decodificar y validar JWT
    let jwt_config = JwtConfig::from(&state.config);
    let claims = verify_token(token, &jwt_config)?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("ID de usuario inválido".to_string()))?;

    // Verificar que el usuario existe en la base de datos
    let actor = sqlx::query_as::<_, Actor>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(&state.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error verificando usuario: {}", e)))?
        .ok_or_else(|| AppError::Unauthorized("Usuario no encontrado".to_string()))?;

    // Resolver el rol; un conductor lleva siempre el id de su perfil
    let role = match actor.role {
        UserRole::Rider => ActorRole::Rider,
        UserRole::Driver => {
            let profile: Option<(Uuid,)> =
                sqlx::query_as("SELECT id FROM driver_profiles WHERE user_id = $1")
                    .bind(actor.id)
                    .fetch_optional(&state.pool)
                    .await
                    .map_err(|e| {
                        AppError::Database(format!("Error buscando perfil de conductor: {}", e))
                    })?;

            let (profile_id,) = profile.ok_or_else(|| {
                AppError::Unauthorized("El conductor no tiene perfil asociado".to_string())
            })?;

            ActorRole::Driver { profile_id }
        }
    };

    let authenticated_actor = AuthenticatedActor {
        actor_id: actor.id,
        role,
    };

    // Inyectar el actor autenticado en las extensions
    request.extensions_mut().insert(authenticated_actor);

    Ok(next.run(request).await)
}
