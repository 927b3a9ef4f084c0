//! Rutas de reservas, incluido el check-in de devolución

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::reservation_controller::ReservationController;
use crate::dto::agency_dto::ApiResponse;
use crate::dto::reservation_dto::{
    CheckInRequest, CreateReservationRequest, ReservationResponse, UpdateReservationRequest,
};
use crate::middleware::auth::AuthAgency;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_reservation_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_reservation))
        .route("/", get(list_reservations))
        .route("/:id", get(get_reservation))
        .route("/:id", put(update_reservation))
        .route("/:id", delete(delete_reservation))
        .route("/:id/checkin", post(checkin_reservation))
}

async fn create_reservation(
    auth: AuthAgency,
    State(state): State<AppState>,
    Json(request): Json<CreateReservationRequest>,
) -> Result<Json<ApiResponse<ReservationResponse>>, AppError> {
    let controller = ReservationController::new(state.pool.clone());
    let response = controller.create(auth.agency_id, request).await?;
    Ok(Json(response))
}

async fn get_reservation(
    auth: AuthAgency,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReservationResponse>, AppError> {
    let controller = ReservationController::new(state.pool.clone());
    let response = controller.get_by_id(id, auth.agency_id).await?;
    Ok(Json(response))
}

async fn list_reservations(
    auth: AuthAgency,
    State(state): State<AppState>,
) -> Result<Json<Vec<ReservationResponse>>, AppError> {
    let controller = ReservationController::new(state.pool.clone());
    let response = controller.list_by_agency(auth.agency_id).await?;
    Ok(Json(response))
}

async fn update_reservation(
    auth: AuthAgency,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateReservationRequest>,
) -> Result<Json<ApiResponse<ReservationResponse>>, AppError> {
    let controller = ReservationController::new(state.pool.clone());
    let response = controller.update(id, auth.agency_id, request).await?;
    Ok(Json(response))
}

async fn checkin_reservation(
    auth: AuthAgency,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CheckInRequest>,
) -> Result<Json<ApiResponse<ReservationResponse>>, AppError> {
    let controller = ReservationController::new(state.pool.clone());
    let response = controller.checkin(id, auth.agency_id, request).await?;
    Ok(Json(response))
}

async fn delete_reservation(
    auth: AuthAgency,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = ReservationController::new(state.pool.clone());
    controller.delete(id, auth.agency_id).await?;
    Ok(Json(ApiResponse::success_with_message(
        (),
        "Reserva eliminada correctamente".to_string(),
    )))
}
