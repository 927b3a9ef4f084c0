//! Rutas de mantenimientos

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::maintenance_controller::MaintenanceController;
use crate::dto::agency_dto::ApiResponse;
use crate::dto::maintenance_dto::{
    CreateMaintenanceRequest, MaintenanceListQuery, MaintenanceResponse, UpdateMaintenanceRequest,
};
use crate::middleware::auth::AuthAgency;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_maintenance_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_maintenance))
        .route("/", get(list_maintenance))
        .route("/:id", get(get_maintenance))
        .route("/:id", put(update_maintenance))
        .route("/:id", delete(delete_maintenance))
}

async fn create_maintenance(
    auth: AuthAgency,
    State(state): State<AppState>,
    Json(request): Json<CreateMaintenanceRequest>,
) -> Result<Json<ApiResponse<MaintenanceResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.create(auth.agency_id, request).await?;
    Ok(Json(response))
}

async fn get_maintenance(
    auth: AuthAgency,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MaintenanceResponse>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.get_by_id(id, auth.agency_id).await?;
    Ok(Json(response))
}

async fn list_maintenance(
    auth: AuthAgency,
    State(state): State<AppState>,
    Query(query): Query<MaintenanceListQuery>,
) -> Result<Json<Vec<MaintenanceResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = match query.vehicle_id {
        Some(vehicle_id) => controller.list_by_vehicle(vehicle_id, auth.agency_id).await?,
        None => controller.list_by_agency(auth.agency_id).await?,
    };
    Ok(Json(response))
}

async fn update_maintenance(
    auth: AuthAgency,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMaintenanceRequest>,
) -> Result<Json<ApiResponse<MaintenanceResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.update(id, auth.agency_id, request).await?;
    Ok(Json(response))
}

async fn delete_maintenance(
    auth: AuthAgency,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    controller.delete(id, auth.agency_id).await?;
    Ok(Json(ApiResponse::success_with_message(
        (),
        "Mantenimiento eliminado correctamente".to_string(),
    )))
}
