use crate::models::maintenance::{MaintenanceEntry, MaintenanceStatus};
use crate::utils::errors::AppError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, entry: &MaintenanceEntry) -> Result<MaintenanceEntry, AppError> {
        let result = sqlx::query_as::<_, MaintenanceEntry>(
            r#"
            INSERT INTO maintenance_entries (
                id, agency_id, vehicle_id, kind, cost, service_date,
                description, status, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(entry.id)
        .bind(entry.agency_id)
        .bind(entry.vehicle_id)
        .bind(&entry.kind)
        .bind(entry.cost)
        .bind(entry.service_date)
        .bind(&entry.description)
        .bind(entry.status)
        .bind(entry.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating maintenance entry: {}", e)))?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<MaintenanceEntry>, AppError> {
        let result =
            sqlx::query_as::<_, MaintenanceEntry>("SELECT * FROM maintenance_entries WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::DatabaseError(format!("Error finding maintenance entry: {}", e))
                })?;

        Ok(result)
    }

    /// Buscar una entrada verificando que pertenece a la agencia
    pub async fn find_owned(
        &self,
        id: Uuid,
        agency_id: Uuid,
    ) -> Result<MaintenanceEntry, AppError> {
        let entry = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Entrada de mantenimiento no encontrada".to_string()))?;

        if entry.agency_id != agency_id {
            return Err(AppError::Forbidden(
                "La entrada de mantenimiento no pertenece a esta agencia".to_string(),
            ));
        }

        Ok(entry)
    }

    pub async fn find_by_agency(&self, agency_id: Uuid) -> Result<Vec<MaintenanceEntry>, AppError> {
        let entries = sqlx::query_as::<_, MaintenanceEntry>(
            "SELECT * FROM maintenance_entries WHERE agency_id = $1 ORDER BY service_date DESC NULLS LAST",
        )
        .bind(agency_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing maintenance entries: {}", e)))?;

        Ok(entries)
    }

    pub async fn find_by_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<MaintenanceEntry>, AppError> {
        let entries = sqlx::query_as::<_, MaintenanceEntry>(
            "SELECT * FROM maintenance_entries WHERE vehicle_id = $1 ORDER BY service_date DESC NULLS LAST",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::DatabaseError(format!("Error listing vehicle maintenance entries: {}", e))
        })?;

        Ok(entries)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        agency_id: Uuid,
        kind: Option<String>,
        cost: Option<Decimal>,
        service_date: Option<NaiveDate>,
        description: Option<String>,
        status: Option<MaintenanceStatus>,
    ) -> Result<MaintenanceEntry, AppError> {
        // Obtener entrada actual y verificar que pertenece a la agencia
        let current = self.find_owned(id, agency_id).await?;

        let entry = sqlx::query_as::<_, MaintenanceEntry>(
            r#"
            UPDATE maintenance_entries
            SET kind = $2, cost = $3, service_date = $4, description = $5, status = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(kind.unwrap_or(current.kind))
        .bind(cost.unwrap_or(current.cost))
        .bind(service_date.or(current.service_date))
        .bind(description.or(current.description))
        .bind(status.unwrap_or(current.status))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating maintenance entry: {}", e)))?;

        Ok(entry)
    }

    pub async fn delete(&self, id: Uuid, agency_id: Uuid) -> Result<(), AppError> {
        // Verificar que pertenece a la agencia
        self.find_owned(id, agency_id).await?;

        sqlx::query("DELETE FROM maintenance_entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::DatabaseError(format!("Error deleting maintenance entry: {}", e))
            })?;

        Ok(())
    }
}
