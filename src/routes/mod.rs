pub mod agency_routes;
pub mod client_routes;
pub mod dashboard_routes;
pub mod document_routes;
pub mod expense_routes;
pub mod maintenance_routes;
pub mod reservation_routes;
pub mod vehicle_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::state::AppState;

/// Router completo de la API (sin capas de middleware globales)
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/agency", agency_routes::create_agency_router())
        .nest("/api/vehicle", vehicle_routes::create_vehicle_router())
        .nest("/api/client", client_routes::create_client_router())
        .nest(
            "/api/reservation",
            reservation_routes::create_reservation_router(),
        )
        .nest("/api/expense", expense_routes::create_expense_router())
        .nest(
            "/api/maintenance",
            maintenance_routes::create_maintenance_router(),
        )
        .nest("/api/document", document_routes::create_document_router())
        .nest("/api/dashboard", dashboard_routes::create_dashboard_router())
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "rental_backoffice",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
