use crate::dto::agency_dto::ApiResponse;
use crate::dto::maintenance_dto::{
    CreateMaintenanceRequest, MaintenanceResponse, UpdateMaintenanceRequest,
};
use crate::models::maintenance::{MaintenanceEntry, MaintenanceStatus};
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct MaintenanceController {
    repository: MaintenanceRepository,
    vehicle_repository: VehicleRepository,
}

impl MaintenanceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MaintenanceRepository::new(pool.clone()),
            vehicle_repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        agency_id: Uuid,
        request: CreateMaintenanceRequest,
    ) -> Result<ApiResponse<MaintenanceResponse>, AppError> {
        // Validar campos
        request.validate()?;

        // Verificar que el vehículo pertenece a la agencia
        self.vehicle_repository
            .find_owned(request.vehicle_id, agency_id)
            .await?;

        let entry = MaintenanceEntry {
            id: Uuid::new_v4(),
            agency_id,
            vehicle_id: request.vehicle_id,
            kind: request.kind,
            cost: request.cost,
            service_date: request.service_date,
            description: request.description,
            status: request.status.unwrap_or(MaintenanceStatus::Planned),
            created_at: Utc::now(),
        };

        let saved = self.repository.create(&entry).await?;

        Ok(ApiResponse::success_with_message(
            MaintenanceResponse::from(saved),
            "Intervención registrada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(
        &self,
        id: Uuid,
        agency_id: Uuid,
    ) -> Result<MaintenanceResponse, AppError> {
        let entry = self.repository.find_owned(id, agency_id).await?;
        Ok(MaintenanceResponse::from(entry))
    }

    pub async fn list_by_agency(
        &self,
        agency_id: Uuid,
    ) -> Result<Vec<MaintenanceResponse>, AppError> {
        let entries = self.repository.find_by_agency(agency_id).await?;
        Ok(entries.into_iter().map(MaintenanceResponse::from).collect())
    }

    /// Historial de mantenimiento de un vehículo concreto
    pub async fn list_by_vehicle(
        &self,
        vehicle_id: Uuid,
        agency_id: Uuid,
    ) -> Result<Vec<MaintenanceResponse>, AppError> {
        // Verificar que el vehículo pertenece a la agencia
        self.vehicle_repository
            .find_owned(vehicle_id, agency_id)
            .await?;

        let entries = self.repository.find_by_vehicle(vehicle_id).await?;
        Ok(entries.into_iter().map(MaintenanceResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        agency_id: Uuid,
        request: UpdateMaintenanceRequest,
    ) -> Result<ApiResponse<MaintenanceResponse>, AppError> {
        request.validate()?;

        let entry = self
            .repository
            .update(
                id,
                agency_id,
                request.kind,
                request.cost,
                request.service_date,
                request.description,
                request.status,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            MaintenanceResponse::from(entry),
            "Intervención actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid, agency_id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id, agency_id).await?;
        Ok(())
    }
}
