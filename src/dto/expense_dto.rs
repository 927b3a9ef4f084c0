use crate::models::expense::Expense;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request para crear un gasto. vehicle_id ausente = gasto general
/// de la agencia.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateExpenseRequest {
    pub vehicle_id: Option<Uuid>,

    #[validate(length(min = 1, max = 255))]
    pub label: String,

    #[validate(length(min = 2, max = 100))]
    pub category: Option<String>,

    pub amount: Decimal,

    pub expense_date: Option<NaiveDate>,
}

/// Request para actualizar un gasto existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateExpenseRequest {
    #[validate(length(min = 1, max = 255))]
    pub label: Option<String>,

    #[validate(length(min = 2, max = 100))]
    pub category: Option<String>,

    pub amount: Option<Decimal>,

    pub expense_date: Option<NaiveDate>,
}

/// Response de gasto para la API
#[derive(Debug, Serialize)]
pub struct ExpenseResponse {
    pub id: Uuid,
    pub agency_id: Uuid,
    pub vehicle_id: Option<Uuid>,
    pub label: String,
    pub category: Option<String>,
    pub amount: Decimal,
    pub expense_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl From<Expense> for ExpenseResponse {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id,
            agency_id: expense.agency_id,
            vehicle_id: expense.vehicle_id,
            label: expense.label,
            category: expense.category,
            amount: expense.amount,
            expense_date: expense.expense_date,
            created_at: expense.created_at,
        }
    }
}
