use crate::dto::agency_dto::ApiResponse;
use crate::dto::vehicle_dto::{
    AvailabilityResponse, CandidateVehiclesRequest, CreateVehicleRequest, UpdateVehicleRequest,
    VehicleResponse,
};
use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::availability_service::AvailabilityService;
use crate::services::maintenance_alert_service::{MaintenanceAlertService, VehicleMaintenanceAlert};
use crate::services::odometer_service::OdometerService;
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct VehicleController {
    repository: VehicleRepository,
    odometer_service: OdometerService,
    availability_service: AvailabilityService,
    maintenance_alert_service: MaintenanceAlertService,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            odometer_service: OdometerService::new(pool.clone()),
            availability_service: AvailabilityService::new(pool.clone()),
            maintenance_alert_service: MaintenanceAlertService::new(pool),
        }
    }

    pub async fn create(
        &self,
        agency_id: Uuid,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        // Validar campos
        request.validate()?;

        if request.registration_plate.trim().is_empty() {
            return Err(AppError::ValidationError(
                "La matrícula es requerida".to_string(),
            ));
        }

        // Verificar que la matrícula no exista para esta agencia
        if self
            .repository
            .plate_exists(&request.registration_plate, agency_id)
            .await?
        {
            return Err(AppError::Conflict(
                "La matrícula ya está registrada para esta agencia".to_string(),
            ));
        }

        let vehicle = Vehicle {
            id: Uuid::new_v4(),
            agency_id,
            make: request.make,
            model: request.model,
            registration_plate: request.registration_plate,
            color: request.color,
            fuel_type: request.fuel_type,
            transmission: request.transmission,
            status: VehicleStatus::Available,
            current_km: request.current_km,
            last_service_km: request.last_service_km,
            service_interval_km: request.service_interval_km,
            daily_price: request.daily_price,
            photo_key: request.photo_key,
            created_at: Utc::now(),
        };

        let saved = self.repository.create(&vehicle).await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(saved),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    /// Detalle del vehículo con el kilometraje reconciliado:
    /// current_km refleja el valor efectivo, no el almacenado
    pub async fn get_by_id(
        &self,
        id: Uuid,
        agency_id: Uuid,
    ) -> Result<VehicleResponse, AppError> {
        let mut vehicle = self.repository.find_owned(id, agency_id).await?;

        let effective = self.odometer_service.reconcile(&vehicle).await?;
        vehicle.current_km = Some(effective);

        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn list_by_agency(
        &self,
        agency_id: Uuid,
    ) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.find_by_agency(agency_id).await?;

        // El listado también expone el kilometraje efectivo
        let mut response = Vec::with_capacity(vehicles.len());
        for mut vehicle in vehicles {
            let effective = self.odometer_service.reconcile(&vehicle).await?;
            vehicle.current_km = Some(effective);
            response.push(VehicleResponse::from(vehicle));
        }

        Ok(response)
    }

    pub async fn update(
        &self,
        id: Uuid,
        agency_id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let vehicle = self
            .repository
            .update(
                id,
                agency_id,
                request.make,
                request.model,
                request.registration_plate,
                request.color,
                request.fuel_type,
                request.transmission,
                request.status,
                request.current_km,
                request.last_service_km,
                request.service_interval_km,
                request.daily_price,
                request.photo_key,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid, agency_id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id, agency_id).await?;
        Ok(())
    }

    /// Disponibilidad puntual del vehículo (hoy si no se indica fecha)
    pub async fn availability_on(
        &self,
        id: Uuid,
        agency_id: Uuid,
        date: Option<NaiveDate>,
    ) -> Result<AvailabilityResponse, AppError> {
        let date = date.unwrap_or_else(|| Utc::now().date_naive());

        let available = self
            .availability_service
            .is_vehicle_available_on(id, agency_id, date)
            .await?;

        Ok(AvailabilityResponse {
            vehicle_id: id,
            date,
            available,
        })
    }

    /// Selector de vehículos para una nueva reserva
    pub async fn candidates_for(
        &self,
        agency_id: Uuid,
        request: CandidateVehiclesRequest,
    ) -> Result<Vec<VehicleResponse>, AppError> {
        if request.end_date < request.start_date {
            return Err(AppError::ValidationError(
                "La fecha de fin debe ser posterior o igual a la fecha de inicio".to_string(),
            ));
        }

        let candidates = self
            .availability_service
            .candidate_vehicles_for(agency_id, request.start_date, request.end_date)
            .await?;

        Ok(candidates.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn maintenance_alerts(
        &self,
        agency_id: Uuid,
    ) -> Result<Vec<VehicleMaintenanceAlert>, AppError> {
        self.maintenance_alert_service
            .vehicles_needing_attention(agency_id)
            .await
    }
}
