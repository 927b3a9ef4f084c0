//! Alertas de mantenimiento
//!
//! Señal derivada "maintenance due": un vehículo necesita atención
//! cuando ha recorrido al menos el 90% de su intervalo de servicio
//! desde el último servicio. Es una alerta temprana, no solo al 100%.
//!
//! El predicado solo consume los dos kilometrajes y el intervalo del
//! vehículo; nunca consulta el log de MaintenanceEntry. Si falta algún
//! dato, o el intervalo es <= 0, el vehículo se excluye de la
//! evaluación en vez de fallar (jamás división por cero).

use crate::models::vehicle::Vehicle;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::odometer_service::OdometerService;
use crate::utils::errors::AppError;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Umbral de alerta temprana: 90% del intervalo de servicio
pub const ATTENTION_THRESHOLD: f64 = 0.9;

/// Resultado de la evaluación de mantenimiento de un vehículo
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaintenanceAlert {
    pub flagged: bool,
    /// Porcentaje del intervalo recorrido; sin tope superior
    /// (un vehículo atrasado muestra >100)
    pub progress_percentage: f64,
}

/// Evaluar si un vehículo necesita servicio.
/// Devuelve None (excluido) si falta cualquier dato o el intervalo
/// no es positivo.
pub fn maintenance_due(
    effective_km: Option<i64>,
    last_service_km: Option<i64>,
    interval_km: Option<i64>,
) -> Option<MaintenanceAlert> {
    let effective = effective_km?;
    let last_service = last_service_km?;
    let interval = interval_km?;

    if interval <= 0 {
        return None;
    }

    let distance = (effective - last_service) as f64;
    let interval = interval as f64;

    Some(MaintenanceAlert {
        flagged: distance >= ATTENTION_THRESHOLD * interval,
        progress_percentage: 100.0 * distance / interval,
    })
}

/// Alerta de mantenimiento lista para el dashboard
#[derive(Debug, Clone, Serialize)]
pub struct VehicleMaintenanceAlert {
    pub vehicle_id: Uuid,
    pub make: String,
    pub model: String,
    pub registration_plate: String,
    pub effective_km: i64,
    pub progress_percentage: f64,
}

/// Servicio de alertas: reconcilia el kilometraje de cada vehículo de
/// la agencia y aplica el predicado de mantenimiento
pub struct MaintenanceAlertService {
    vehicle_repository: VehicleRepository,
    odometer_service: OdometerService,
}

impl MaintenanceAlertService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            vehicle_repository: VehicleRepository::new(pool.clone()),
            odometer_service: OdometerService::new(pool),
        }
    }

    /// Vehículos de la agencia marcados como "necesita atención"
    pub async fn vehicles_needing_attention(
        &self,
        agency_id: Uuid,
    ) -> Result<Vec<VehicleMaintenanceAlert>, AppError> {
        let vehicles = self.vehicle_repository.find_by_agency(agency_id).await?;

        let mut alerts = Vec::new();
        for vehicle in &vehicles {
            if let Some(alert) = self.evaluate(vehicle).await? {
                if alert.1.flagged {
                    alerts.push(VehicleMaintenanceAlert {
                        vehicle_id: vehicle.id,
                        make: vehicle.make.clone(),
                        model: vehicle.model.clone(),
                        registration_plate: vehicle.registration_plate.clone(),
                        effective_km: alert.0,
                        progress_percentage: alert.1.progress_percentage,
                    });
                }
            }
        }

        Ok(alerts)
    }

    /// Reconciliar el kilometraje del vehículo y evaluar el predicado.
    /// None si el vehículo queda excluido por falta de datos.
    async fn evaluate(
        &self,
        vehicle: &Vehicle,
    ) -> Result<Option<(i64, MaintenanceAlert)>, AppError> {
        let effective = self.odometer_service.reconcile(vehicle).await?;

        Ok(maintenance_due(
            Some(effective),
            vehicle.last_service_km,
            vehicle.service_interval_km,
        )
        .map(|alert| (effective, alert)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_at_ninety_percent() {
        // 8900 km desde el servicio sobre 10000 de intervalo: 89%, sin marca
        let alert = maintenance_due(Some(58_900), Some(50_000), Some(10_000)).unwrap();
        assert!(!alert.flagged);
        assert!((alert.progress_percentage - 89.0).abs() < f64::EPSILON);

        // 9000 km: exactamente 90%, marcado
        let alert = maintenance_due(Some(59_000), Some(50_000), Some(10_000)).unwrap();
        assert!(alert.flagged);
        assert!((alert.progress_percentage - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overdue_vehicle_exceeds_one_hundred_percent() {
        let alert = maintenance_due(Some(61_000), Some(50_000), Some(10_000)).unwrap();
        assert!(alert.flagged);
        assert!((alert.progress_percentage - 110.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_inputs_exclude_the_vehicle() {
        assert_eq!(maintenance_due(None, Some(50_000), Some(10_000)), None);
        assert_eq!(maintenance_due(Some(58_000), None, Some(10_000)), None);
        assert_eq!(maintenance_due(Some(58_000), Some(50_000), None), None);
    }

    #[test]
    fn test_zero_or_negative_interval_excludes_never_divides() {
        assert_eq!(maintenance_due(Some(58_000), Some(50_000), Some(0)), None);
        assert_eq!(maintenance_due(Some(58_000), Some(50_000), Some(-1_000)), None);
    }

    #[test]
    fn test_fresh_service_shows_low_progress() {
        let alert = maintenance_due(Some(50_100), Some(50_000), Some(10_000)).unwrap();
        assert!(!alert.flagged);
        assert!((alert.progress_percentage - 1.0).abs() < f64::EPSILON);
    }
}
