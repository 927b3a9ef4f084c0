//! Motor de disponibilidad de vehículos
//!
//! Decide si un vehículo se puede alquilar en un día concreto y qué
//! vehículos son candidatos para una nueva reserva multi-día.
//!
//! Hay dos convenciones de intervalo, deliberadamente distintas:
//! - consulta de un solo día: el rango de la reserva es inclusivo en
//!   ambos extremos (`start_date <= date <= end_date`);
//! - selección para una nueva reserva: el rango pedido es semiabierto
//!   `[new_start, new_end)`, de modo que una reserva que termina
//!   exactamente el día de inicio pedido NO bloquea (rotación del
//!   vehículo el mismo día).
//!
//! Las fechas ausentes en una reserva no imponen restricción: la
//! reserva se excluye del cálculo de conflictos en vez de fallar.

use crate::models::reservation::Reservation;
use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::repositories::reservation_repository::ReservationRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

/// ¿La reserva ocupa el vehículo en la fecha dada?
/// Inclusivo en ambos extremos, granularidad de día.
pub fn occupies_on(reservation: &Reservation, date: NaiveDate) -> bool {
    if !reservation.status.occupies_vehicle() {
        return false;
    }

    match (reservation.start_date, reservation.end_date) {
        (Some(start), Some(end)) => start <= date && date <= end,
        // Fechas ausentes: la reserva no restringe nada
        _ => false,
    }
}

/// ¿El vehículo está disponible en la fecha dada?
/// Requiere estado lifecycle 'available' y ninguna reserva
/// confirmed / in_progress cubriendo la fecha.
pub fn is_available_on(
    date: NaiveDate,
    vehicle_status: VehicleStatus,
    reservations: &[Reservation],
) -> bool {
    vehicle_status == VehicleStatus::Available
        && !reservations.iter().any(|r| occupies_on(r, date))
}

/// ¿La reserva existente entra en conflicto con el rango pedido
/// `[new_start, new_end)`? Convención semiabierta: una reserva que
/// termina exactamente en new_start no bloquea.
pub fn conflicts_with_range(
    reservation: &Reservation,
    new_start: NaiveDate,
    new_end: NaiveDate,
) -> bool {
    if !reservation.status.occupies_vehicle() {
        return false;
    }

    match (reservation.start_date, reservation.end_date) {
        (Some(start), Some(end)) => start < new_end && new_start < end,
        _ => false,
    }
}

/// Servicio de disponibilidad: alimenta los predicados puros con las
/// filas de la agencia
pub struct AvailabilityService {
    vehicle_repository: VehicleRepository,
    reservation_repository: ReservationRepository,
}

impl AvailabilityService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            vehicle_repository: VehicleRepository::new(pool.clone()),
            reservation_repository: ReservationRepository::new(pool),
        }
    }

    /// ¿Un vehículo concreto de la agencia está disponible en la fecha?
    pub async fn is_vehicle_available_on(
        &self,
        vehicle_id: Uuid,
        agency_id: Uuid,
        date: NaiveDate,
    ) -> Result<bool, AppError> {
        let vehicle = self.vehicle_repository.find_owned(vehicle_id, agency_id).await?;
        let reservations = self.reservation_repository.find_by_vehicle(vehicle_id).await?;

        Ok(is_available_on(date, vehicle.status, &reservations))
    }

    /// Vehículos candidatos para una nueva reserva `[new_start, new_end)`:
    /// estado 'available' y sin conflicto de rango con ninguna reserva
    /// confirmed / in_progress existente
    pub async fn candidate_vehicles_for(
        &self,
        agency_id: Uuid,
        new_start: NaiveDate,
        new_end: NaiveDate,
    ) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = self.vehicle_repository.find_available_by_agency(agency_id).await?;
        let reservations = self
            .reservation_repository
            .find_occupying_by_agency(agency_id)
            .await?;

        // Agrupar reservas por vehículo para evitar un escaneo por candidato
        let mut by_vehicle: HashMap<Uuid, Vec<&Reservation>> = HashMap::new();
        for reservation in &reservations {
            by_vehicle.entry(reservation.vehicle_id).or_default().push(reservation);
        }

        let candidates = vehicles
            .into_iter()
            .filter(|vehicle| {
                by_vehicle
                    .get(&vehicle.id)
                    .map(|rs| !rs.iter().any(|r| conflicts_with_range(r, new_start, new_end)))
                    .unwrap_or(true)
            })
            .collect();

        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::reservation::ReservationStatus;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn reservation(
        start: Option<&str>,
        end: Option<&str>,
        status: ReservationStatus,
    ) -> Reservation {
        Reservation {
            id: Uuid::new_v4(),
            agency_id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            start_date: start.map(date),
            end_date: end.map(date),
            daily_price: Decimal::new(200, 0),
            status,
            pickup_location: None,
            return_location: None,
            departure_km: None,
            return_km: None,
            with_driver: false,
            extra_charges: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_availability_blocked_inside_the_range() {
        let r = reservation(Some("2024-03-10"), Some("2024-03-15"), ReservationStatus::Confirmed);

        assert!(!is_available_on(date("2024-03-12"), VehicleStatus::Available, &[r.clone()]));
        // Extremos inclusivos
        assert!(!is_available_on(date("2024-03-10"), VehicleStatus::Available, &[r.clone()]));
        assert!(!is_available_on(date("2024-03-15"), VehicleStatus::Available, &[r.clone()]));
        // Fuera del rango
        assert!(is_available_on(date("2024-03-09"), VehicleStatus::Available, &[r.clone()]));
        assert!(is_available_on(date("2024-03-16"), VehicleStatus::Available, &[r]));
    }

    #[test]
    fn test_lifecycle_status_blocks_regardless_of_reservations() {
        assert!(!is_available_on(date("2024-03-12"), VehicleStatus::Maintenance, &[]));
        assert!(!is_available_on(date("2024-03-12"), VehicleStatus::OutOfService, &[]));
        assert!(is_available_on(date("2024-03-12"), VehicleStatus::Available, &[]));
    }

    #[test]
    fn test_cancelled_and_completed_do_not_occupy() {
        let cancelled =
            reservation(Some("2024-03-10"), Some("2024-03-15"), ReservationStatus::Cancelled);
        let completed =
            reservation(Some("2024-03-10"), Some("2024-03-15"), ReservationStatus::Completed);

        assert!(is_available_on(date("2024-03-12"), VehicleStatus::Available, &[cancelled, completed]));
    }

    #[test]
    fn test_missing_dates_impose_no_constraint() {
        let no_start = reservation(None, Some("2024-03-15"), ReservationStatus::Confirmed);
        let no_end = reservation(Some("2024-03-10"), None, ReservationStatus::Confirmed);

        assert!(is_available_on(date("2024-03-12"), VehicleStatus::Available, &[no_start.clone(), no_end.clone()]));
        assert!(!conflicts_with_range(&no_start, date("2024-03-12"), date("2024-03-20")));
        assert!(!conflicts_with_range(&no_end, date("2024-03-12"), date("2024-03-20")));
    }

    #[test]
    fn test_same_day_turnover_is_allowed() {
        // Reserva que termina el 15: no bloquea una petición que
        // empieza el 15 (convención semiabierta)
        let r = reservation(Some("2024-03-10"), Some("2024-03-15"), ReservationStatus::Confirmed);

        assert!(!conflicts_with_range(&r, date("2024-03-15"), date("2024-03-20")));
        // ...pero sí bloquea una que empieza el 14
        assert!(conflicts_with_range(&r, date("2024-03-14"), date("2024-03-20")));
    }

    #[test]
    fn test_range_conflict_respects_new_end_exclusive() {
        let r = reservation(Some("2024-03-20"), Some("2024-03-25"), ReservationStatus::InProgress);

        // Petición que termina justo cuando empieza la reserva: sin conflicto
        assert!(!conflicts_with_range(&r, date("2024-03-15"), date("2024-03-20")));
        // Un día más y ya hay solape
        assert!(conflicts_with_range(&r, date("2024-03-15"), date("2024-03-21")));
    }

    #[test]
    fn test_single_date_and_range_conventions_differ() {
        let r = reservation(Some("2024-03-10"), Some("2024-03-15"), ReservationStatus::Confirmed);

        // El día 15 está ocupado para la consulta puntual (inclusiva)...
        assert!(!is_available_on(date("2024-03-15"), VehicleStatus::Available, &[r.clone()]));
        // ...pero una reserva nueva puede empezar ese mismo día
        assert!(!conflicts_with_range(&r, date("2024-03-15"), date("2024-03-18")));
    }
}
