use crate::models::reservation::{Reservation, ReservationStatus};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request para crear una reserva. El rango [start_date, end_date] es
/// inclusivo y se valida end_date >= start_date.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReservationRequest {
    pub client_id: Uuid,
    pub vehicle_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub daily_price: Decimal,

    #[validate(length(max = 255))]
    pub pickup_location: Option<String>,

    #[validate(length(max = 255))]
    pub return_location: Option<String>,

    #[validate(range(min = 0))]
    pub departure_km: Option<i64>,

    pub with_driver: Option<bool>,

    pub extra_charges: Option<Decimal>,
}

/// Request para actualizar una reserva. Las transiciones de estado las
/// decide el operador; nunca se calculan automáticamente.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateReservationRequest {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub daily_price: Option<Decimal>,
    pub status: Option<ReservationStatus>,

    #[validate(length(max = 255))]
    pub pickup_location: Option<String>,

    #[validate(length(max = 255))]
    pub return_location: Option<String>,

    #[validate(range(min = 0))]
    pub departure_km: Option<i64>,

    #[validate(range(min = 0))]
    pub return_km: Option<i64>,

    pub with_driver: Option<bool>,

    pub extra_charges: Option<Decimal>,
}

/// Request de check-in: el vehículo vuelve con su kilometraje de devolución
#[derive(Debug, Deserialize, Validate)]
pub struct CheckInRequest {
    #[validate(range(min = 0))]
    pub return_km: i64,
}

/// Response de reserva para la API
#[derive(Debug, Serialize)]
pub struct ReservationResponse {
    pub id: Uuid,
    pub agency_id: Uuid,
    pub client_id: Uuid,
    pub vehicle_id: Uuid,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub daily_price: Decimal,
    pub status: ReservationStatus,
    pub pickup_location: Option<String>,
    pub return_location: Option<String>,
    pub departure_km: Option<i64>,
    pub return_km: Option<i64>,
    pub with_driver: bool,
    pub extra_charges: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        Self {
            id: reservation.id,
            agency_id: reservation.agency_id,
            client_id: reservation.client_id,
            vehicle_id: reservation.vehicle_id,
            start_date: reservation.start_date,
            end_date: reservation.end_date,
            daily_price: reservation.daily_price,
            status: reservation.status,
            pickup_location: reservation.pickup_location,
            return_location: reservation.return_location,
            departure_km: reservation.departure_km,
            return_km: reservation.return_km,
            with_driver: reservation.with_driver,
            extra_charges: reservation.extra_charges,
            created_at: reservation.created_at,
        }
    }
}
