//! Modelo de Expense
//!
//! Gastos de la agencia. Un expense con vehicle_id NULL es un gasto
//! general de la agencia; con vehicle_id es un gasto del vehículo.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Expense principal - mapea exactamente a la tabla expenses
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Expense {
    pub id: Uuid,
    pub agency_id: Uuid,
    pub vehicle_id: Option<Uuid>,
    pub label: String,
    pub category: Option<String>,
    pub amount: Decimal,
    pub expense_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Gasto general de la agencia (no atado a un vehículo)
    pub fn is_general(&self) -> bool {
        self.vehicle_id.is_none()
    }
}
