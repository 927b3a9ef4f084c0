use crate::models::agency::Agency;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct AgencyRepository {
    pool: PgPool,
}

impl AgencyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, agency: &Agency) -> Result<Agency, AppError> {
        let result = sqlx::query_as::<_, Agency>(
            r#"
            INSERT INTO agencies (
                id, name, address, siret, admin_full_name, admin_email,
                admin_password_hash, logo_key, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(agency.id)
        .bind(&agency.name)
        .bind(&agency.address)
        .bind(&agency.siret)
        .bind(&agency.admin_full_name)
        .bind(&agency.admin_email)
        .bind(&agency.admin_password_hash)
        .bind(&agency.logo_key)
        .bind(agency.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating agency: {}", e)))?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Agency>, AppError> {
        let result = sqlx::query_as::<_, Agency>("SELECT * FROM agencies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding agency: {}", e)))?;

        Ok(result)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Agency>, AppError> {
        let result =
            sqlx::query_as::<_, Agency>("SELECT * FROM agencies WHERE admin_email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::DatabaseError(format!("Error finding agency by email: {}", e))
                })?;

        Ok(result)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM agencies WHERE admin_email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(format!("Error checking email: {}", e)))?;

        Ok(result.0)
    }

    pub async fn siret_exists(&self, siret: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM agencies WHERE siret = $1)")
                .bind(siret)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(format!("Error checking siret: {}", e)))?;

        Ok(result.0)
    }

    pub async fn update(&self, agency: &Agency) -> Result<Agency, AppError> {
        let result = sqlx::query_as::<_, Agency>(
            r#"
            UPDATE agencies
            SET name = $2, address = $3, siret = $4, admin_full_name = $5, logo_key = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(agency.id)
        .bind(&agency.name)
        .bind(&agency.address)
        .bind(&agency.siret)
        .bind(&agency.admin_full_name)
        .bind(&agency.logo_key)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating agency: {}", e)))?;

        Ok(result)
    }
}
