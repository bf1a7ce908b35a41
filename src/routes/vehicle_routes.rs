use axum::{
    extract::{Path, State},
    middleware,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::trip_dto::ApiResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::middleware::auth::{auth_middleware, AuthenticatedActor};
use crate::state::AppState;
use crate::utils::errors::AppResult;
use uuid::Uuid;

/// Crear el router de vehículos. Todas las rutas requieren autenticación.
pub fn create_vehicle_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle))
        .route("/", get(list_vehicles))
        .route("/:id", get(get_vehicle))
        .route("/:id", put(update_vehicle))
        .route("/:id", delete(delete_vehicle))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedActor>,
    Json(request): Json<CreateVehicleRequest>,
) -> AppResult<Json<ApiResponse<VehicleResponse>>> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(&actor, request).await?;
    Ok(Json(response))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedActor>,
) -> AppResult<Json<Vec<VehicleResponse>>> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list(&actor).await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedActor>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<VehicleResponse>> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.get_by_id(&actor, id).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedActor>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> AppResult<Json<ApiResponse<VehicleResponse>>> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update(&actor, id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedActor>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<()>>> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.delete(&actor, id).await?;
    Ok(Json(response))
}
