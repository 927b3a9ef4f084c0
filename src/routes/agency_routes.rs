//! Rutas de agencias y autenticación

use axum::{
    extract::State,
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::agency_controller::AgencyController;
use crate::dto::agency_dto::{AgencyResponse, ApiResponse, RegisterAgencyRequest, UpdateAgencyRequest};
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::middleware::auth::AuthAgency;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::JwtConfig;

pub fn create_agency_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_agency))
        .route("/login", post(login))
        .route("/me", get(get_profile))
        .route("/me", put(update_profile))
}

async fn register_agency(
    State(state): State<AppState>,
    Json(request): Json<RegisterAgencyRequest>,
) -> Result<Json<ApiResponse<AgencyResponse>>, AppError> {
    let controller = AgencyController::new(state.pool.clone());
    let response = controller.register(request).await?;
    Ok(Json(response))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = AgencyController::new(state.pool.clone());
    let jwt_config = JwtConfig::from(&state.config);
    let response = controller.login(request, &jwt_config).await?;
    Ok(Json(response))
}

async fn get_profile(
    auth: AuthAgency,
    State(state): State<AppState>,
) -> Result<Json<AgencyResponse>, AppError> {
    let controller = AgencyController::new(state.pool.clone());
    let response = controller.get_by_id(auth.agency_id).await?;
    Ok(Json(response))
}

async fn update_profile(
    auth: AuthAgency,
    State(state): State<AppState>,
    Json(request): Json<UpdateAgencyRequest>,
) -> Result<Json<ApiResponse<AgencyResponse>>, AppError> {
    let controller = AgencyController::new(state.pool.clone());
    let response = controller.update_profile(auth.agency_id, request).await?;
    Ok(Json(response))
}
