use crate::models::vehicle::{Vehicle, VehicleStatus};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request para crear un nuevo vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(length(min = 4, max = 20))]
    pub registration_plate: String,

    #[validate(length(min = 2, max = 50))]
    pub color: Option<String>,

    #[validate(length(min = 2, max = 20))]
    pub fuel_type: Option<String>,

    #[validate(length(min = 2, max = 20))]
    pub transmission: Option<String>,

    #[validate(range(min = 0))]
    pub current_km: Option<i64>,

    #[validate(range(min = 0))]
    pub last_service_km: Option<i64>,

    #[validate(range(min = 1))]
    pub service_interval_km: Option<i64>,

    pub daily_price: Option<Decimal>,

    pub photo_key: Option<String>,
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub make: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(length(min = 4, max = 20))]
    pub registration_plate: Option<String>,

    #[validate(length(min = 2, max = 50))]
    pub color: Option<String>,

    #[validate(length(min = 2, max = 20))]
    pub fuel_type: Option<String>,

    #[validate(length(min = 2, max = 20))]
    pub transmission: Option<String>,

    pub status: Option<VehicleStatus>,

    #[validate(range(min = 0))]
    pub current_km: Option<i64>,

    #[validate(range(min = 0))]
    pub last_service_km: Option<i64>,

    #[validate(range(min = 1))]
    pub service_interval_km: Option<i64>,

    pub daily_price: Option<Decimal>,

    pub photo_key: Option<String>,
}

/// Response de vehículo para la API
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub agency_id: Uuid,
    pub make: String,
    pub model: String,
    pub registration_plate: String,
    pub color: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub status: VehicleStatus,
    pub current_km: Option<i64>,
    pub last_service_km: Option<i64>,
    pub service_interval_km: Option<i64>,
    pub daily_price: Option<Decimal>,
    pub photo_key: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            agency_id: vehicle.agency_id,
            make: vehicle.make,
            model: vehicle.model,
            registration_plate: vehicle.registration_plate,
            color: vehicle.color,
            fuel_type: vehicle.fuel_type,
            transmission: vehicle.transmission,
            status: vehicle.status,
            current_km: vehicle.current_km,
            last_service_km: vehicle.last_service_km,
            service_interval_km: vehicle.service_interval_km,
            daily_price: vehicle.daily_price,
            photo_key: vehicle.photo_key,
            created_at: vehicle.created_at,
        }
    }
}

/// Query de disponibilidad puntual (?date=YYYY-MM-DD; hoy por defecto)
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub date: Option<NaiveDate>,
}

/// Response de disponibilidad puntual
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub vehicle_id: Uuid,
    pub date: NaiveDate,
    pub available: bool,
}

/// Request del selector de vehículos para una nueva reserva.
/// El rango pedido se evalúa con la convención semiabierta
/// [start_date, end_date): una reserva existente que termina
/// exactamente en start_date no bloquea.
#[derive(Debug, Deserialize)]
pub struct CandidateVehiclesRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
