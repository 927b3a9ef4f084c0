use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::utils::errors::AppError;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, vehicle: &Vehicle) -> Result<Vehicle, AppError> {
        let result = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (
                id, agency_id, make, model, registration_plate, color, fuel_type,
                transmission, status, current_km, last_service_km, service_interval_km,
                daily_price, photo_key, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING *
            "#,
        )
        .bind(vehicle.id)
        .bind(vehicle.agency_id)
        .bind(&vehicle.make)
        .bind(&vehicle.model)
        .bind(&vehicle.registration_plate)
        .bind(&vehicle.color)
        .bind(&vehicle.fuel_type)
        .bind(&vehicle.transmission)
        .bind(vehicle.status)
        .bind(vehicle.current_km)
        .bind(vehicle.last_service_km)
        .bind(vehicle.service_interval_km)
        .bind(vehicle.daily_price)
        .bind(&vehicle.photo_key)
        .bind(vehicle.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating vehicle: {}", e)))?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let result = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding vehicle: {}", e)))?;

        Ok(result)
    }

    /// Buscar un vehículo verificando que pertenece a la agencia
    pub async fn find_owned(&self, id: Uuid, agency_id: Uuid) -> Result<Vehicle, AppError> {
        let vehicle = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        if vehicle.agency_id != agency_id {
            return Err(AppError::Forbidden(
                "El vehículo no pertenece a esta agencia".to_string(),
            ));
        }

        Ok(vehicle)
    }

    pub async fn find_by_agency(&self, agency_id: Uuid) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE agency_id = $1 ORDER BY created_at DESC",
        )
        .bind(agency_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing vehicles: {}", e)))?;

        Ok(vehicles)
    }

    /// Vehículos de la agencia con estado lifecycle 'available'
    pub async fn find_available_by_agency(
        &self,
        agency_id: Uuid,
    ) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE agency_id = $1 AND status = $2 ORDER BY created_at DESC",
        )
        .bind(agency_id)
        .bind(VehicleStatus::Available)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing available vehicles: {}", e)))?;

        Ok(vehicles)
    }

    pub async fn plate_exists(
        &self,
        registration_plate: &str,
        agency_id: Uuid,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vehicles WHERE registration_plate = $1 AND agency_id = $2)",
        )
        .bind(registration_plate)
        .bind(agency_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error checking registration plate: {}", e)))?;

        Ok(result.0)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        agency_id: Uuid,
        make: Option<String>,
        model: Option<String>,
        registration_plate: Option<String>,
        color: Option<String>,
        fuel_type: Option<String>,
        transmission: Option<String>,
        status: Option<VehicleStatus>,
        current_km: Option<i64>,
        last_service_km: Option<i64>,
        service_interval_km: Option<i64>,
        daily_price: Option<Decimal>,
        photo_key: Option<String>,
    ) -> Result<Vehicle, AppError> {
        // Obtener vehículo actual y verificar que pertenece a la agencia
        let current = self.find_owned(id, agency_id).await?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET make = $2, model = $3, registration_plate = $4, color = $5,
                fuel_type = $6, transmission = $7, status = $8, current_km = $9,
                last_service_km = $10, service_interval_km = $11, daily_price = $12,
                photo_key = $13
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(make.unwrap_or(current.make))
        .bind(model.unwrap_or(current.model))
        .bind(registration_plate.unwrap_or(current.registration_plate))
        .bind(color.or(current.color))
        .bind(fuel_type.or(current.fuel_type))
        .bind(transmission.or(current.transmission))
        .bind(status.unwrap_or(current.status))
        .bind(current_km.or(current.current_km))
        .bind(last_service_km.or(current.last_service_km))
        .bind(service_interval_km.or(current.service_interval_km))
        .bind(daily_price.or(current.daily_price))
        .bind(photo_key.or(current.photo_key))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating vehicle: {}", e)))?;

        Ok(vehicle)
    }

    /// Write-back del kilometraje reconciliado.
    /// GREATEST garantiza que el valor almacenado nunca retrocede aunque
    /// dos requests reconcilien a la vez (el valor es monótono no decreciente).
    pub async fn update_current_km(&self, id: Uuid, current_km: i64) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE vehicles SET current_km = GREATEST(COALESCE(current_km, 0), $2) WHERE id = $1",
        )
        .bind(id)
        .bind(current_km)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating mileage: {}", e)))?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid, agency_id: Uuid) -> Result<(), AppError> {
        // Verificar que pertenece a la agencia
        self.find_owned(id, agency_id).await?;

        sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting vehicle: {}", e)))?;

        Ok(())
    }
}
