use crate::models::reservation::{Reservation, ReservationStatus};
use crate::utils::errors::AppError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, reservation: &Reservation) -> Result<Reservation, AppError> {
        let result = sqlx::query_as::<_, Reservation>(
            r#"
            INSERT INTO reservations (
                id, agency_id, client_id, vehicle_id, start_date, end_date,
                daily_price, status, pickup_location, return_location,
                departure_km, return_km, with_driver, extra_charges, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING *
            "#,
        )
        .bind(reservation.id)
        .bind(reservation.agency_id)
        .bind(reservation.client_id)
        .bind(reservation.vehicle_id)
        .bind(reservation.start_date)
        .bind(reservation.end_date)
        .bind(reservation.daily_price)
        .bind(reservation.status)
        .bind(&reservation.pickup_location)
        .bind(&reservation.return_location)
        .bind(reservation.departure_km)
        .bind(reservation.return_km)
        .bind(reservation.with_driver)
        .bind(reservation.extra_charges)
        .bind(reservation.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating reservation: {}", e)))?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Reservation>, AppError> {
        let result =
            sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::DatabaseError(format!("Error finding reservation: {}", e))
                })?;

        Ok(result)
    }

    /// Buscar una reserva verificando que pertenece a la agencia
    pub async fn find_owned(&self, id: Uuid, agency_id: Uuid) -> Result<Reservation, AppError> {
        let reservation = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        if reservation.agency_id != agency_id {
            return Err(AppError::Forbidden(
                "La reserva no pertenece a esta agencia".to_string(),
            ));
        }

        Ok(reservation)
    }

    pub async fn find_by_agency(&self, agency_id: Uuid) -> Result<Vec<Reservation>, AppError> {
        let reservations = sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations WHERE agency_id = $1 ORDER BY start_date DESC NULLS LAST",
        )
        .bind(agency_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing reservations: {}", e)))?;

        Ok(reservations)
    }

    pub async fn find_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<Reservation>, AppError> {
        let reservations = sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations WHERE vehicle_id = $1 ORDER BY start_date DESC NULLS LAST",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::DatabaseError(format!("Error listing vehicle reservations: {}", e))
        })?;

        Ok(reservations)
    }

    /// Reservas que ocupan vehículos de la agencia (confirmed / in_progress).
    /// El filtrado fino por fechas se hace en memoria en el motor de
    /// disponibilidad, no en SQL.
    pub async fn find_occupying_by_agency(
        &self,
        agency_id: Uuid,
    ) -> Result<Vec<Reservation>, AppError> {
        let reservations = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT * FROM reservations
            WHERE agency_id = $1 AND status IN ('confirmed', 'in_progress')
            "#,
        )
        .bind(agency_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::DatabaseError(format!("Error listing occupying reservations: {}", e))
        })?;

        Ok(reservations)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        agency_id: Uuid,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        daily_price: Option<Decimal>,
        status: Option<ReservationStatus>,
        pickup_location: Option<String>,
        return_location: Option<String>,
        departure_km: Option<i64>,
        return_km: Option<i64>,
        with_driver: Option<bool>,
        extra_charges: Option<Decimal>,
    ) -> Result<Reservation, AppError> {
        // Obtener reserva actual y verificar que pertenece a la agencia
        let current = self.find_owned(id, agency_id).await?;

        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            UPDATE reservations
            SET start_date = $2, end_date = $3, daily_price = $4, status = $5,
                pickup_location = $6, return_location = $7, departure_km = $8,
                return_km = $9, with_driver = $10, extra_charges = $11
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(start_date.or(current.start_date))
        .bind(end_date.or(current.end_date))
        .bind(daily_price.unwrap_or(current.daily_price))
        .bind(status.unwrap_or(current.status))
        .bind(pickup_location.or(current.pickup_location))
        .bind(return_location.or(current.return_location))
        .bind(departure_km.or(current.departure_km))
        .bind(return_km.or(current.return_km))
        .bind(with_driver.unwrap_or(current.with_driver))
        .bind(extra_charges.or(current.extra_charges))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating reservation: {}", e)))?;

        Ok(reservation)
    }

    /// Check-in del vehículo: registra el kilometraje de devolución
    /// y cierra la reserva
    pub async fn set_checkin(
        &self,
        id: Uuid,
        return_km: i64,
    ) -> Result<Reservation, AppError> {
        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            UPDATE reservations
            SET return_km = $2, status = 'completed'
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(return_km)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error checking in reservation: {}", e)))?;

        Ok(reservation)
    }

    pub async fn delete(&self, id: Uuid, agency_id: Uuid) -> Result<(), AppError> {
        // Verificar que pertenece a la agencia
        self.find_owned(id, agency_id).await?;

        sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting reservation: {}", e)))?;

        Ok(())
    }
}
