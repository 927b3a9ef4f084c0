use crate::models::client::Client;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, client: &Client) -> Result<Client, AppError> {
        let result = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (
                id, agency_id, first_name, last_name, email, phone,
                driver_licence, address, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(client.id)
        .bind(client.agency_id)
        .bind(&client.first_name)
        .bind(&client.last_name)
        .bind(&client.email)
        .bind(&client.phone)
        .bind(&client.driver_licence)
        .bind(&client.address)
        .bind(client.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating client: {}", e)))?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, AppError> {
        let result = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding client: {}", e)))?;

        Ok(result)
    }

    /// Buscar un cliente verificando que pertenece a la agencia
    pub async fn find_owned(&self, id: Uuid, agency_id: Uuid) -> Result<Client, AppError> {
        let client = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        if client.agency_id != agency_id {
            return Err(AppError::Forbidden(
                "El cliente no pertenece a esta agencia".to_string(),
            ));
        }

        Ok(client)
    }

    pub async fn find_by_agency(&self, agency_id: Uuid) -> Result<Vec<Client>, AppError> {
        let clients = sqlx::query_as::<_, Client>(
            "SELECT * FROM clients WHERE agency_id = $1 ORDER BY created_at DESC",
        )
        .bind(agency_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing clients: {}", e)))?;

        Ok(clients)
    }

    pub async fn count_by_agency(&self, agency_id: Uuid) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM clients WHERE agency_id = $1")
            .bind(agency_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error counting clients: {}", e)))?;

        Ok(result.0)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        agency_id: Uuid,
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        driver_licence: Option<String>,
        address: Option<String>,
    ) -> Result<Client, AppError> {
        // Obtener cliente actual y verificar que pertenece a la agencia
        let current = self.find_owned(id, agency_id).await?;

        let client = sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients
            SET first_name = $2, last_name = $3, email = $4, phone = $5,
                driver_licence = $6, address = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(first_name.unwrap_or(current.first_name))
        .bind(last_name.unwrap_or(current.last_name))
        .bind(email.or(current.email))
        .bind(phone.or(current.phone))
        .bind(driver_licence.or(current.driver_licence))
        .bind(address.or(current.address))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating client: {}", e)))?;

        Ok(client)
    }

    pub async fn delete(&self, id: Uuid, agency_id: Uuid) -> Result<(), AppError> {
        // Verificar que pertenece a la agencia
        self.find_owned(id, agency_id).await?;

        sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting client: {}", e)))?;

        Ok(())
    }
}
