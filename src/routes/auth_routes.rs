use axum::{
    extract::State,
    middleware,
    routing::{delete, get, post},
    Extension, Json, Router,
};
use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{ActorResponse, LoginRequest, RegisterRequest, SessionResponse};
use crate::dto::trip_dto::ApiResponse;
use crate::middleware::auth::{auth_middleware, AuthenticatedActor};
use crate::state::AppState;
use crate::utils::errors::AppResult;

/// Crear el router de autenticación. `register` y `login` son públicas,
/// `me` y `account` requieren token.
pub fn create_auth_router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(me))
        .route("/account", delete(delete_account))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .merge(protected)
}

async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> AppResult<Json<SessionResponse>> {
    let controller = AuthController::new(state.pool.clone(), state.config.clone());
    let response = controller.register(request).await?;
    Ok(Json(response))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<SessionResponse>> {
    let controller = AuthController::new(state.pool.clone(), state.config.clone());
    let response = controller.login(request).await?;
    Ok(Json(response))
}

async fn me(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedActor>,
) -> AppResult<Json<ActorResponse>> {
    let controller = AuthController::new(state.pool.clone(), state.config.clone());
    let response = controller.me(&actor).await?;
    Ok(Json(response))
}

async fn delete_account(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedActor>,
) -> AppResult<Json<ApiResponse<()>>> {
    let controller = AuthController::new(state.pool.clone(), state.config.clone());
    let response = controller.delete_account(&actor).await?;
    Ok(Json(response))
}
