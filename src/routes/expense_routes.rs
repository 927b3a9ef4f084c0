//! Rutas de gastos

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::expense_controller::ExpenseController;
use crate::dto::agency_dto::ApiResponse;
use crate::dto::expense_dto::{CreateExpenseRequest, ExpenseResponse, UpdateExpenseRequest};
use crate::middleware::auth::AuthAgency;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_expense_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_expense))
        .route("/", get(list_expenses))
        .route("/:id", get(get_expense))
        .route("/:id", put(update_expense))
        .route("/:id", delete(delete_expense))
}

async fn create_expense(
    auth: AuthAgency,
    State(state): State<AppState>,
    Json(request): Json<CreateExpenseRequest>,
) -> Result<Json<ApiResponse<ExpenseResponse>>, AppError> {
    let controller = ExpenseController::new(state.pool.clone());
    let response = controller.create(auth.agency_id, request).await?;
    Ok(Json(response))
}

async fn get_expense(
    auth: AuthAgency,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ExpenseResponse>, AppError> {
    let controller = ExpenseController::new(state.pool.clone());
    let response = controller.get_by_id(id, auth.agency_id).await?;
    Ok(Json(response))
}

async fn list_expenses(
    auth: AuthAgency,
    State(state): State<AppState>,
) -> Result<Json<Vec<ExpenseResponse>>, AppError> {
    let controller = ExpenseController::new(state.pool.clone());
    let response = controller.list_by_agency(auth.agency_id).await?;
    Ok(Json(response))
}

async fn update_expense(
    auth: AuthAgency,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateExpenseRequest>,
) -> Result<Json<ApiResponse<ExpenseResponse>>, AppError> {
    let controller = ExpenseController::new(state.pool.clone());
    let response = controller.update(id, auth.agency_id, request).await?;
    Ok(Json(response))
}

async fn delete_expense(
    auth: AuthAgency,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = ExpenseController::new(state.pool.clone());
    controller.delete(id, auth.agency_id).await?;
    Ok(Json(ApiResponse::success_with_message(
        (),
        "Gasto eliminado correctamente".to_string(),
    )))
}
