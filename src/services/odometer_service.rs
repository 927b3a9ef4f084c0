//! Reconciliación de kilometraje
//!
//! El campo current_km del vehículo puede quedar por detrás de la
//! realidad registrada en las devoluciones de reservas. El kilometraje
//! efectivo es el máximo entre lo almacenado y cualquier return_km.
//!
//! El write-back es best-effort: si falla se loguea y se sigue con el
//! valor calculado en memoria; nunca se propaga al usuario. Dos
//! reconciliaciones concurrentes son una carrera benigna porque el
//! valor escrito es monótono no decreciente.

use crate::models::reservation::Reservation;
use crate::models::vehicle::Vehicle;
use crate::repositories::reservation_repository::ReservationRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;

/// Kilometraje efectivo del vehículo: máximo entre el valor almacenado
/// y los kilometrajes de devolución de sus reservas. Valores negativos
/// o ausentes se tratan como 0, nunca como error.
pub fn effective_odometer(stored_km: Option<i64>, reservations: &[Reservation]) -> i64 {
    let stored = stored_km.unwrap_or(0).max(0);

    let max_return = reservations
        .iter()
        .filter_map(|r| r.return_km)
        .map(|km| km.max(0))
        .max()
        .unwrap_or(0);

    stored.max(max_return)
}

/// Servicio de reconciliación con write-back best-effort
pub struct OdometerService {
    vehicle_repository: VehicleRepository,
    reservation_repository: ReservationRepository,
}

impl OdometerService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            vehicle_repository: VehicleRepository::new(pool.clone()),
            reservation_repository: ReservationRepository::new(pool),
        }
    }

    /// Calcular el kilometraje efectivo del vehículo y, si supera al
    /// almacenado, persistirlo. Un fallo del write-back no bloquea:
    /// se devuelve igualmente el valor efectivo calculado.
    pub async fn reconcile(&self, vehicle: &Vehicle) -> Result<i64, AppError> {
        let reservations = self
            .reservation_repository
            .find_by_vehicle(vehicle.id)
            .await?;

        let effective = effective_odometer(vehicle.current_km, &reservations);

        if effective > vehicle.current_km.unwrap_or(0) {
            if let Err(e) = self
                .vehicle_repository
                .update_current_km(vehicle.id, effective)
                .await
            {
                tracing::warn!(
                    vehicle_id = %vehicle.id,
                    "No se pudo persistir el kilometraje reconciliado: {}",
                    e
                );
            } else {
                tracing::info!(
                    vehicle_id = %vehicle.id,
                    "Kilometraje reconciliado: {} -> {}",
                    vehicle.current_km.unwrap_or(0),
                    effective
                );
            }
        }

        Ok(effective)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::reservation::ReservationStatus;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn reservation_with_return(return_km: Option<i64>) -> Reservation {
        Reservation {
            id: Uuid::new_v4(),
            agency_id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            start_date: None,
            end_date: None,
            daily_price: Decimal::new(200, 0),
            status: ReservationStatus::Completed,
            pickup_location: None,
            return_location: None,
            departure_km: None,
            return_km,
            with_driver: false,
            extra_charges: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_effective_is_stored_when_no_returns() {
        assert_eq!(effective_odometer(Some(50_000), &[]), 50_000);
        assert_eq!(
            effective_odometer(Some(50_000), &[reservation_with_return(None)]),
            50_000
        );
    }

    #[test]
    fn test_effective_takes_max_return() {
        let reservations = vec![
            reservation_with_return(Some(51_200)),
            reservation_with_return(Some(49_000)),
            reservation_with_return(None),
        ];

        assert_eq!(effective_odometer(Some(50_000), &reservations), 51_200);
    }

    #[test]
    fn test_effective_never_below_stored() {
        let reservations = vec![reservation_with_return(Some(40_000))];
        assert_eq!(effective_odometer(Some(50_000), &reservations), 50_000);
    }

    #[test]
    fn test_missing_and_negative_inputs_treated_as_zero() {
        assert_eq!(effective_odometer(None, &[]), 0);
        assert_eq!(effective_odometer(Some(-5), &[]), 0);
        assert_eq!(
            effective_odometer(None, &[reservation_with_return(Some(-100))]),
            0
        );
        assert_eq!(
            effective_odometer(Some(-5), &[reservation_with_return(Some(1_000))]),
            1_000
        );
    }

    #[test]
    fn test_monotonic_as_returns_append() {
        // El efectivo nunca decrece al añadir reservas
        let mut reservations: Vec<Reservation> = Vec::new();
        let mut previous = effective_odometer(Some(10_000), &reservations);

        for km in [9_000, 11_000, 10_500, 12_000] {
            reservations.push(reservation_with_return(Some(km)));
            let current = effective_odometer(Some(10_000), &reservations);
            assert!(current >= previous);
            assert!(current >= 10_000);
            previous = current;
        }

        assert_eq!(previous, 12_000);
    }

    #[test]
    fn test_reconciliation_is_idempotent() {
        // Simula el write-back ya aplicado: con stored == efectivo,
        // recalcular da el mismo valor
        let reservations = vec![reservation_with_return(Some(51_200))];
        let first = effective_odometer(Some(50_000), &reservations);
        let second = effective_odometer(Some(first), &reservations);

        assert_eq!(first, 51_200);
        assert_eq!(second, first);
    }
}
