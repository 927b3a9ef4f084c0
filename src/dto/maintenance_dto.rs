use crate::models::maintenance::{MaintenanceEntry, MaintenanceStatus};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request para registrar una intervención de mantenimiento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenanceRequest {
    pub vehicle_id: Uuid,

    #[validate(length(min = 2, max = 100))]
    pub kind: String,

    pub cost: Decimal,

    pub service_date: Option<NaiveDate>,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    pub status: Option<MaintenanceStatus>,
}

/// Query del listado (?vehicle_id= filtra al historial de un vehículo)
#[derive(Debug, Deserialize)]
pub struct MaintenanceListQuery {
    pub vehicle_id: Option<Uuid>,
}

/// Request para actualizar una intervención existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMaintenanceRequest {
    #[validate(length(min = 2, max = 100))]
    pub kind: Option<String>,

    pub cost: Option<Decimal>,

    pub service_date: Option<NaiveDate>,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    pub status: Option<MaintenanceStatus>,
}

/// Response de intervención de mantenimiento
#[derive(Debug, Serialize)]
pub struct MaintenanceResponse {
    pub id: Uuid,
    pub agency_id: Uuid,
    pub vehicle_id: Uuid,
    pub kind: String,
    pub cost: Decimal,
    pub service_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub status: MaintenanceStatus,
    pub created_at: DateTime<Utc>,
}

impl From<MaintenanceEntry> for MaintenanceResponse {
    fn from(entry: MaintenanceEntry) -> Self {
        Self {
            id: entry.id,
            agency_id: entry.agency_id,
            vehicle_id: entry.vehicle_id,
            kind: entry.kind,
            cost: entry.cost,
            service_date: entry.service_date,
            description: entry.description,
            status: entry.status,
            created_at: entry.created_at,
        }
    }
}
