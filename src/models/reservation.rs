//! Modelo de Reservation
//!
//! Este módulo contiene el struct Reservation y su enum de estado.
//! Las fechas son un rango de calendario inclusivo [start_date, end_date]
//! a granularidad de día. Solo las reservas confirmed / in_progress
//! cuentan para la ocupación del vehículo.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de la reserva - se guarda como TEXT en la columna status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "text", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl ReservationStatus {
    /// Las reservas en estos estados ocupan el vehículo
    pub fn occupies_vehicle(&self) -> bool {
        matches!(self, ReservationStatus::Confirmed | ReservationStatus::InProgress)
    }
}

/// Reservation principal - mapea exactamente a la tabla reservations
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    pub id: Uuid,
    pub agency_id: Uuid,
    pub client_id: Uuid,
    pub vehicle_id: Uuid,
    /// Fechas nullable: filas legacy sin fechas no imponen restricción
    /// de disponibilidad (se excluyen del cálculo de conflictos)
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub daily_price: Decimal,
    pub status: ReservationStatus,
    pub pickup_location: Option<String>,
    pub return_location: Option<String>,
    /// Kilometraje a la salida / devolución del vehículo
    pub departure_km: Option<i64>,
    pub return_km: Option<i64>,
    pub with_driver: bool,
    pub extra_charges: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}
