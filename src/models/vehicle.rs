//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y su enum de estado.
//! Mapea exactamente a la tabla vehicles con primary key 'id'.
//! El kilometraje se guarda en kilómetros enteros (BIGINT).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado del vehículo - se guarda como TEXT en la columna status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "text", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Available,
    Reserved,
    Maintenance,
    OutOfService,
}

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub agency_id: Uuid,
    pub make: String,
    pub model: String,
    pub registration_plate: String,
    pub color: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub status: VehicleStatus,
    /// Kilometraje almacenado; puede quedar por detrás de la realidad
    /// hasta que la reconciliación lo actualice
    pub current_km: Option<i64>,
    /// Kilometraje en el último cambio de aceite / servicio
    pub last_service_km: Option<i64>,
    /// Intervalo de servicio en kilómetros
    pub service_interval_km: Option<i64>,
    pub daily_price: Option<Decimal>,
    /// Clave opaca de la foto en el blob store
    pub photo_key: Option<String>,
    pub created_at: DateTime<Utc>,
}
