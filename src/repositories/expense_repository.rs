use crate::models::expense::Expense;
use crate::utils::errors::AppError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct ExpenseRepository {
    pool: PgPool,
}

impl ExpenseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, expense: &Expense) -> Result<Expense, AppError> {
        let result = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO expenses (
                id, agency_id, vehicle_id, label, category, amount, expense_date, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(expense.id)
        .bind(expense.agency_id)
        .bind(expense.vehicle_id)
        .bind(&expense.label)
        .bind(&expense.category)
        .bind(expense.amount)
        .bind(expense.expense_date)
        .bind(expense.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating expense: {}", e)))?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Expense>, AppError> {
        let result = sqlx::query_as::<_, Expense>("SELECT * FROM expenses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding expense: {}", e)))?;

        Ok(result)
    }

    /// Buscar un gasto verificando que pertenece a la agencia
    pub async fn find_owned(&self, id: Uuid, agency_id: Uuid) -> Result<Expense, AppError> {
        let expense = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Gasto no encontrado".to_string()))?;

        if expense.agency_id != agency_id {
            return Err(AppError::Forbidden(
                "El gasto no pertenece a esta agencia".to_string(),
            ));
        }

        Ok(expense)
    }

    pub async fn find_by_agency(&self, agency_id: Uuid) -> Result<Vec<Expense>, AppError> {
        let expenses = sqlx::query_as::<_, Expense>(
            "SELECT * FROM expenses WHERE agency_id = $1 ORDER BY expense_date DESC NULLS LAST",
        )
        .bind(agency_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing expenses: {}", e)))?;

        Ok(expenses)
    }

    pub async fn update(
        &self,
        id: Uuid,
        agency_id: Uuid,
        label: Option<String>,
        category: Option<String>,
        amount: Option<Decimal>,
        expense_date: Option<NaiveDate>,
    ) -> Result<Expense, AppError> {
        // Obtener gasto actual y verificar que pertenece a la agencia
        let current = self.find_owned(id, agency_id).await?;

        let expense = sqlx::query_as::<_, Expense>(
            r#"
            UPDATE expenses
            SET label = $2, category = $3, amount = $4, expense_date = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(label.unwrap_or(current.label))
        .bind(category.or(current.category))
        .bind(amount.unwrap_or(current.amount))
        .bind(expense_date.or(current.expense_date))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating expense: {}", e)))?;

        Ok(expense)
    }

    pub async fn delete(&self, id: Uuid, agency_id: Uuid) -> Result<(), AppError> {
        // Verificar que pertenece a la agencia
        self.find_owned(id, agency_id).await?;

        sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting expense: {}", e)))?;

        Ok(())
    }
}
