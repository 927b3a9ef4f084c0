use crate::models::document::Document;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, document: &Document) -> Result<Document, AppError> {
        let result = sqlx::query_as::<_, Document>(
            r#"
            INSERT INTO documents (
                id, agency_id, client_id, vehicle_id, label, blob_key, mime_type, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(document.id)
        .bind(document.agency_id)
        .bind(document.client_id)
        .bind(document.vehicle_id)
        .bind(&document.label)
        .bind(&document.blob_key)
        .bind(&document.mime_type)
        .bind(document.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating document: {}", e)))?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Document>, AppError> {
        let result = sqlx::query_as::<_, Document>("SELECT * FROM documents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding document: {}", e)))?;

        Ok(result)
    }

    /// Buscar un documento verificando que pertenece a la agencia
    pub async fn find_owned(&self, id: Uuid, agency_id: Uuid) -> Result<Document, AppError> {
        let document = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Documento no encontrado".to_string()))?;

        if document.agency_id != agency_id {
            return Err(AppError::Forbidden(
                "El documento no pertenece a esta agencia".to_string(),
            ));
        }

        Ok(document)
    }

    pub async fn find_by_agency(&self, agency_id: Uuid) -> Result<Vec<Document>, AppError> {
        let documents = sqlx::query_as::<_, Document>(
            "SELECT * FROM documents WHERE agency_id = $1 ORDER BY created_at DESC",
        )
        .bind(agency_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing documents: {}", e)))?;

        Ok(documents)
    }

    pub async fn delete(&self, id: Uuid, agency_id: Uuid) -> Result<(), AppError> {
        // Verificar que pertenece a la agencia
        self.find_owned(id, agency_id).await?;

        sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting document: {}", e)))?;

        Ok(())
    }
}
