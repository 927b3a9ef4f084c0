//! Modelo de MaintenanceEntry
//!
//! Registro histórico/planificado de servicios de un vehículo.
//! Es independiente de la señal derivada "maintenance due": esa señal
//! se calcula solo con los kilometrajes del vehículo, nunca con este log.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de la entrada de mantenimiento - TEXT en la columna status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "text", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Planned,
    InProgress,
    Done,
}

/// MaintenanceEntry principal - mapea a la tabla maintenance_entries
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaintenanceEntry {
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
