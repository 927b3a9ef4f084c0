//! Rutas de clientes

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::client_controller::ClientController;
use crate::dto::agency_dto::ApiResponse;
use crate::dto::client_dto::{ClientResponse, CreateClientRequest, UpdateClientRequest};
use crate::middleware::auth::AuthAgency;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_client_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_client))
        .route("/", get(list_clients))
        .route("/:id", get(get_client))
        .route("/:id", put(update_client))
        .route("/:id", delete(delete_client))
}

async fn create_client(
    auth: AuthAgency,
    State(state): State<AppState>,
    Json(request): Json<CreateClientRequest>,
) -> Result<Json<ApiResponse<ClientResponse>>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let response = controller.create(auth.agency_id, request).await?;
    Ok(Json(response))
}

async fn get_client(
    auth: AuthAgency,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClientResponse>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let response = controller.get_by_id(id, auth.agency_id).await?;
    Ok(Json(response))
}

async fn list_clients(
    auth: AuthAgency,
    State(state): State<AppState>,
) -> Result<Json<Vec<ClientResponse>>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let response = controller.list_by_agency(auth.agency_id).await?;
    Ok(Json(response))
}

async fn update_client(
    auth: AuthAgency,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateClientRequest>,
) -> Result<Json<ApiResponse<ClientResponse>>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let response = controller.update(id, auth.agency_id, request).await?;
    Ok(Json(response))
}

async fn delete_client(
    auth: AuthAgency,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    controller.delete(id, auth.agency_id).await?;
    Ok(Json(ApiResponse::success_with_message(
        (),
        "Cliente eliminado correctamente".to_string(),
    )))
}
