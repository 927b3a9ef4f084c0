//! Rollups de estadísticas para el dashboard
//!
//! Sumas de ingresos, gastos y conteos sobre una ventana de calendario.
//! Los ingresos de una reserva se atribuyen íntegros al mes de su
//! start_date (simplificación documentada, sin prorrateo). Los gastos
//! vienen de tres fuentes independientes: gastos generales de la
//! agencia, gastos por vehículo y costes del log de mantenimiento.
//! Todo está en una sola denominación; no hay conversión de moneda.

use crate::models::expense::Expense;
use crate::models::maintenance::MaintenanceEntry;
use crate::models::reservation::{Reservation, ReservationStatus};
use crate::repositories::client_repository::ClientRepository;
use crate::repositories::expense_repository::ExpenseRepository;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::reservation_repository::ReservationRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::availability_service::is_available_on;
use crate::services::maintenance_alert_service::{MaintenanceAlertService, VehicleMaintenanceAlert};
use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

use crate::utils::errors::AppError;

/// Días facturables de una reserva: diferencia de fechas, mínimo 1
/// (una reserva de un solo día cuenta como un día)
pub fn billed_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().max(1)
}

/// Ingresos de una reserva: precio diario × días facturables, más los
/// cargos adicionales si existen. Sin fechas no hay ingresos.
pub fn reservation_revenue(reservation: &Reservation) -> Decimal {
    match (reservation.start_date, reservation.end_date) {
        (Some(start), Some(end)) => {
            reservation.daily_price * Decimal::from(billed_days(start, end))
                + reservation.extra_charges.unwrap_or(Decimal::ZERO)
        }
        _ => Decimal::ZERO,
    }
}

fn in_month(date: Option<NaiveDate>, month: u32, year: i32) -> bool {
    date.map(|d| d.month() == month && d.year() == year)
        .unwrap_or(false)
}

/// Ingresos del mes: reservas no canceladas cuyo start_date cae en el
/// periodo. Una reserva que cruza de mes se atribuye entera a su mes
/// de inicio.
pub fn monthly_revenue(reservations: &[Reservation], month: u32, year: i32) -> Decimal {
    reservations
        .iter()
        .filter(|r| r.status != ReservationStatus::Cancelled)
        .filter(|r| in_month(r.start_date, month, year))
        .map(reservation_revenue)
        .sum()
}

/// Gastos totales del mes: las tres fuentes filtradas al mismo periodo
/// y sumadas
pub fn monthly_expenses(
    general_expenses: &[Expense],
    vehicle_expenses: &[Expense],
    maintenance_entries: &[MaintenanceEntry],
    month: u32,
    year: i32,
) -> Decimal {
    let general: Decimal = general_expenses
        .iter()
        .filter(|e| in_month(e.expense_date, month, year))
        .map(|e| e.amount)
        .sum();

    let per_vehicle: Decimal = vehicle_expenses
        .iter()
        .filter(|e| in_month(e.expense_date, month, year))
        .map(|e| e.amount)
        .sum();

    let maintenance: Decimal = maintenance_entries
        .iter()
        .filter(|m| in_month(m.service_date, month, year))
        .map(|m| m.cost)
        .sum();

    general + per_vehicle + maintenance
}

/// Resumen del dashboard para una agencia y un periodo
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub month: u32,
    pub year: i32,
    pub total_vehicles: usize,
    pub available_today: usize,
    pub active_reservations: usize,
    pub total_clients: i64,
    pub monthly_revenue: Decimal,
    pub monthly_expenses: Decimal,
    pub net_profit: Decimal,
    pub maintenance_alerts: Vec<VehicleMaintenanceAlert>,
}

/// Servicio de estadísticas: junta las filas de la agencia y calcula
/// los rollups en memoria
pub struct StatisticsService {
    vehicle_repository: VehicleRepository,
    reservation_repository: ReservationRepository,
    expense_repository: ExpenseRepository,
    maintenance_repository: MaintenanceRepository,
    client_repository: ClientRepository,
    maintenance_alert_service: MaintenanceAlertService,
}

impl StatisticsService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            vehicle_repository: VehicleRepository::new(pool.clone()),
            reservation_repository: ReservationRepository::new(pool.clone()),
            expense_repository: ExpenseRepository::new(pool.clone()),
            maintenance_repository: MaintenanceRepository::new(pool.clone()),
            client_repository: ClientRepository::new(pool.clone()),
            maintenance_alert_service: MaintenanceAlertService::new(pool),
        }
    }

    pub async fn dashboard_summary(
        &self,
        agency_id: Uuid,
        month: u32,
        year: i32,
    ) -> Result<DashboardSummary, AppError> {
        let vehicles = self.vehicle_repository.find_by_agency(agency_id).await?;
        let reservations = self.reservation_repository.find_by_agency(agency_id).await?;
        let expenses = self.expense_repository.find_by_agency(agency_id).await?;
        let maintenance = self.maintenance_repository.find_by_agency(agency_id).await?;
        let total_clients = self.client_repository.count_by_agency(agency_id).await?;

        // Disponibilidad de hoy: reservas ocupantes agrupadas por vehículo
        let today = Utc::now().date_naive();
        let mut by_vehicle: HashMap<Uuid, Vec<Reservation>> = HashMap::new();
        for reservation in reservations.iter().filter(|r| r.status.occupies_vehicle()) {
            by_vehicle
                .entry(reservation.vehicle_id)
                .or_default()
                .push(reservation.clone());
        }

        let available_today = vehicles
            .iter()
            .filter(|v| {
                let rs = by_vehicle.get(&v.id).map(|r| r.as_slice()).unwrap_or(&[]);
                is_available_on(today, v.status, rs)
            })
            .count();

        let active_reservations = reservations
            .iter()
            .filter(|r| r.status == ReservationStatus::InProgress)
            .count();

        let (general, per_vehicle): (Vec<Expense>, Vec<Expense>) =
            expenses.into_iter().partition(|e| e.is_general());

        let revenue = monthly_revenue(&reservations, month, year);
        let total_expenses = monthly_expenses(&general, &per_vehicle, &maintenance, month, year);

        let maintenance_alerts = self
            .maintenance_alert_service
            .vehicles_needing_attention(agency_id)
            .await?;

        Ok(DashboardSummary {
            month,
            year,
            total_vehicles: vehicles.len(),
            available_today,
            active_reservations,
            total_clients,
            monthly_revenue: revenue,
            monthly_expenses: total_expenses,
            net_profit: revenue - total_expenses,
            maintenance_alerts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::maintenance::MaintenanceStatus;
    use chrono::Utc;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn reservation(
        start: &str,
        end: &str,
        daily_price: i64,
        status: ReservationStatus,
    ) -> Reservation {
        Reservation {
            id: Uuid::new_v4(),
            agency_id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            start_date: Some(date(start)),
            end_date: Some(date(end)),
            daily_price: Decimal::new(daily_price, 0),
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

    fn expense(amount: i64, expense_date: Option<&str>) -> Expense {
        Expense {
            id: Uuid::new_v4(),
            agency_id: Uuid::new_v4(),
            vehicle_id: None,
            label: "gasto".to_string(),
            category: None,
            amount: Decimal::new(amount, 0),
            expense_date: expense_date.map(date),
            created_at: Utc::now(),
        }
    }

    fn maintenance_entry(cost: i64, service_date: Option<&str>) -> MaintenanceEntry {
        MaintenanceEntry {
            id: Uuid::new_v4(),
            agency_id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            kind: "vidange".to_string(),
            cost: Decimal::new(cost, 0),
            service_date: service_date.map(date),
            description: None,
            status: MaintenanceStatus::Done,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_revenue_attributed_wholly_to_start_month() {
        // 28 ene - 3 feb a 200/día: 6 días = 1200, todo a enero
        let r = reservation("2024-01-28", "2024-02-03", 200, ReservationStatus::Confirmed);

        assert_eq!(monthly_revenue(&[r.clone()], 1, 2024), Decimal::new(1_200, 0));
        assert_eq!(monthly_revenue(&[r], 2, 2024), Decimal::ZERO);
    }

    #[test]
    fn test_single_day_reservation_bills_one_day() {
        let r = reservation("2024-03-10", "2024-03-10", 150, ReservationStatus::Confirmed);
        assert_eq!(reservation_revenue(&r), Decimal::new(150, 0));
    }

    #[test]
    fn test_cancelled_reservations_earn_nothing() {
        let r = reservation("2024-01-10", "2024-01-12", 200, ReservationStatus::Cancelled);
        assert_eq!(monthly_revenue(&[r], 1, 2024), Decimal::ZERO);
    }

    #[test]
    fn test_extra_charges_are_added() {
        let mut r = reservation("2024-01-10", "2024-01-12", 200, ReservationStatus::Completed);
        r.extra_charges = Some(Decimal::new(50, 0));
        // 2 días × 200 + 50
        assert_eq!(reservation_revenue(&r), Decimal::new(450, 0));
    }

    #[test]
    fn test_revenue_ignores_other_years() {
        let r = reservation("2023-01-10", "2023-01-12", 200, ReservationStatus::Completed);
        assert_eq!(monthly_revenue(&[r], 1, 2024), Decimal::ZERO);
    }

    #[test]
    fn test_monthly_expenses_sums_three_sources() {
        let general = vec![expense(100, Some("2024-03-05"))];
        let per_vehicle = vec![expense(250, Some("2024-03-20")), expense(80, Some("2024-04-01"))];
        let maintenance = vec![
            maintenance_entry(300, Some("2024-03-15")),
            maintenance_entry(999, None),
        ];

        // 100 + 250 + 300; el gasto de abril y la entrada sin fecha quedan fuera
        assert_eq!(
            monthly_expenses(&general, &per_vehicle, &maintenance, 3, 2024),
            Decimal::new(650, 0)
        );
    }

    #[test]
    fn test_net_profit_is_revenue_minus_expenses() {
        let reservations =
            vec![reservation("2024-03-01", "2024-03-04", 100, ReservationStatus::Completed)];
        let general = vec![expense(120, Some("2024-03-10"))];

        let revenue = monthly_revenue(&reservations, 3, 2024);
        let expenses = monthly_expenses(&general, &[], &[], 3, 2024);

        assert_eq!(revenue - expenses, Decimal::new(180, 0));
    }
}
