//! Rutas de vehículos: CRUD, disponibilidad y alertas de mantenimiento

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::agency_dto::ApiResponse;
use crate::dto::vehicle_dto::{
    AvailabilityQuery, AvailabilityResponse, CandidateVehiclesRequest, CreateVehicleRequest,
    UpdateVehicleRequest, VehicleResponse,
};
use crate::middleware::auth::AuthAgency;
use crate::services::maintenance_alert_service::VehicleMaintenanceAlert;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle))
        .route("/", get(list_vehicles))
        .route("/candidates", post(candidate_vehicles))
        .route("/maintenance-alerts", get(maintenance_alerts))
        .route("/:id", get(get_vehicle))
        .route("/:id", put(update_vehicle))
        .route("/:id", delete(delete_vehicle))
        .route("/:id/availability", get(vehicle_availability))
}

async fn create_vehicle(
    auth: AuthAgency,
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(auth.agency_id, request).await?;
    Ok(Json(response))
}

async fn get_vehicle(
    auth: AuthAgency,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.get_by_id(id, auth.agency_id).await?;
    Ok(Json(response))
}

async fn list_vehicles(
    auth: AuthAgency,
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list_by_agency(auth.agency_id).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    auth: AuthAgency,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update(id, auth.agency_id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    auth: AuthAgency,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    controller.delete(id, auth.agency_id).await?;
    Ok(Json(ApiResponse::success_with_message(
        (),
        "Vehículo eliminado correctamente".to_string(),
    )))
}

async fn vehicle_availability(
    auth: AuthAgency,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller
        .availability_on(id, auth.agency_id, query.date)
        .await?;
    Ok(Json(response))
}

async fn candidate_vehicles(
    auth: AuthAgency,
    State(state): State<AppState>,
    Json(request): Json<CandidateVehiclesRequest>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.candidates_for(auth.agency_id, request).await?;
    Ok(Json(response))
}

async fn maintenance_alerts(
    auth: AuthAgency,
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleMaintenanceAlert>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.maintenance_alerts(auth.agency_id).await?;
    Ok(Json(response))
}
