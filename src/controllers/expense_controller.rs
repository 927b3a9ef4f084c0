use crate::dto::agency_dto::ApiResponse;
use crate::dto::expense_dto::{CreateExpenseRequest, ExpenseResponse, UpdateExpenseRequest};
use crate::models::expense::Expense;
use crate::repositories::expense_repository::ExpenseRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct ExpenseController {
    repository: ExpenseRepository,
    vehicle_repository: VehicleRepository,
}

impl ExpenseController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ExpenseRepository::new(pool.clone()),
            vehicle_repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        agency_id: Uuid,
        request: CreateExpenseRequest,
    ) -> Result<ApiResponse<ExpenseResponse>, AppError> {
        // Validar campos
        request.validate()?;

        // Si el gasto es de un vehículo, verificar que pertenece a la agencia
        if let Some(vehicle_id) = request.vehicle_id {
            self.vehicle_repository.find_owned(vehicle_id, agency_id).await?;
        }

        let expense = Expense {
            id: Uuid::new_v4(),
            agency_id,
            vehicle_id: request.vehicle_id,
            label: request.label,
            category: request.category,
            amount: request.amount,
            expense_date: request.expense_date,
            created_at: Utc::now(),
        };

        let saved = self.repository.create(&expense).await?;

        Ok(ApiResponse::success_with_message(
            ExpenseResponse::from(saved),
            "Gasto registrado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid, agency_id: Uuid) -> Result<ExpenseResponse, AppError> {
        let expense = self.repository.find_owned(id, agency_id).await?;
        Ok(ExpenseResponse::from(expense))
    }

    pub async fn list_by_agency(
        &self,
        agency_id: Uuid,
    ) -> Result<Vec<ExpenseResponse>, AppError> {
        let expenses = self.repository.find_by_agency(agency_id).await?;
        Ok(expenses.into_iter().map(ExpenseResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        agency_id: Uuid,
        request: UpdateExpenseRequest,
    ) -> Result<ApiResponse<ExpenseResponse>, AppError> {
        request.validate()?;

        let expense = self
            .repository
            .update(
                id,
                agency_id,
                request.label,
                request.category,
                request.amount,
                request.expense_date,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            ExpenseResponse::from(expense),
            "Gasto actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid, agency_id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id, agency_id).await?;
        Ok(())
    }
}
