//! Rutas del dashboard mensual

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::agency_dto::ApiResponse;
use crate::dto::dashboard_dto::StatsQuery;
use crate::middleware::auth::AuthAgency;
use crate::services::statistics_service::DashboardSummary;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/summary", get(dashboard_summary))
}

async fn dashboard_summary(
    auth: AuthAgency,
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<ApiResponse<DashboardSummary>>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    let response = controller.summary(auth.agency_id, query).await?;
    Ok(Json(response))
}
