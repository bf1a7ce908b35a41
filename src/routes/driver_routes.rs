use axum::{
    extract::State,
    middleware,
    routing::{get, put},
    Extension, Json, Router,
};
use crate::controllers::driver_controller::DriverController;
use crate::dto::driver_dto::{DriverProfileResponse, UpdateProfileRequest};
use crate::dto::trip_dto::ApiResponse;
use crate::middleware::auth::{auth_middleware, AuthenticatedActor};
use crate::state::AppState;
use crate::utils::errors::AppResult;

/// Crear el router del perfil de conductor. Requiere autenticación.
pub fn create_driver_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile))
        .route("/profile", put(update_profile))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn get_profile(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedActor>,
) -> AppResult<Json<DriverProfileResponse>> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.get_profile(&actor).await?;
    Ok(Json(response))
}

async fn update_profile(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedActor>,
    Json(request): Json<UpdateProfileRequest>,
) -> AppResult<Json<ApiResponse<DriverProfileResponse>>> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.update_profile(&actor, request).await?;
    Ok(Json(response))
}
