use axum::{
    extract::{Path, State},
    middleware,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use crate::controllers::trip_controller::TripController;
use crate::dto::trip_dto::{
    ApiResponse, CompleteTripRequest, CreateTripRequest, TripResponse, UpdateTripRequest,
};
use crate::middleware::auth::{auth_middleware, AuthenticatedActor};
use crate::state::AppState;
use crate::utils::errors::AppResult;
use uuid::Uuid;

/// Crear el router de viajes. Todas las rutas requieren autenticación.
pub fn create_trip_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_trip))
        .route("/", get(list_trips))
        .route("/available", get(list_available_trips))
        .route("/:id", get(get_trip))
        .route("/:id", put(update_trip))
        .route("/:id", delete(delete_trip))
        .route("/:id/accept", post(accept_trip))
        .route("/:id/complete", post(complete_trip))
        .route("/:id/cancel", post(cancel_trip))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn create_trip(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedActor>,
    Json(request): Json<CreateTripRequest>,
) -> AppResult<Json<ApiResponse<TripResponse>>> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.create(&actor, request).await?;
    Ok(Json(response))
}

async fn list_trips(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedActor>,
) -> AppResult<Json<Vec<TripResponse>>> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.list_for_actor(&actor).await?;
    Ok(Json(response))
}

async fn list_available_trips(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<TripResponse>>> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.list_available().await?;
    Ok(Json(response))
}

async fn get_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<TripResponse>> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_trip(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedActor>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTripRequest>,
) -> AppResult<Json<ApiResponse<TripResponse>>> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.update(&actor, id, request).await?;
    Ok(Json(response))
}

async fn delete_trip(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedActor>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<()>>> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.delete(&actor, id).await?;
    Ok(Json(response))
}

async fn accept_trip(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedActor>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<TripResponse>>> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.accept(&actor, id).await?;
    Ok(Json(response))
}

async fn complete_trip(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedActor>,
    Path(id): Path<Uuid>,
    Json(request): Json<CompleteTripRequest>,
) -> AppResult<Json<ApiResponse<TripResponse>>> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.complete(&actor, id, request).await?;
    Ok(Json(response))
}

async fn cancel_trip(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedActor>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<TripResponse>>> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.cancel(&actor, id).await?;
    Ok(Json(response))
}
