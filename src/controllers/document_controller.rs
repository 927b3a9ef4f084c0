use crate::dto::agency_dto::ApiResponse;
use crate::dto::document_dto::{CreateDocumentRequest, DocumentResponse};
use crate::models::document::Document;
use crate::repositories::client_repository::ClientRepository;
use crate::repositories::document_repository::DocumentRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct DocumentController {
    repository: DocumentRepository,
    client_repository: ClientRepository,
    vehicle_repository: VehicleRepository,
}

impl DocumentController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DocumentRepository::new(pool.clone()),
            client_repository: ClientRepository::new(pool.clone()),
            vehicle_repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        agency_id: Uuid,
        request: CreateDocumentRequest,
    ) -> Result<ApiResponse<DocumentResponse>, AppError> {
        // Validar campos
        request.validate()?;

        // Verificar que las referencias pertenecen a la agencia
        if let Some(client_id) = request.client_id {
            self.client_repository.find_owned(client_id, agency_id).await?;
        }
        if let Some(vehicle_id) = request.vehicle_id {
            self.vehicle_repository.find_owned(vehicle_id, agency_id).await?;
        }

        let document = Document {
            id: Uuid::new_v4(),
            agency_id,
            client_id: request.client_id,
            vehicle_id: request.vehicle_id,
            label: request.label,
            blob_key: request.blob_key,
            mime_type: request.mime_type,
            created_at: Utc::now(),
        };

        let saved = self.repository.create(&document).await?;

        Ok(ApiResponse::success_with_message(
            DocumentResponse::from(saved),
            "Documento registrado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(
        &self,
        id: Uuid,
        agency_id: Uuid,
    ) -> Result<DocumentResponse, AppError> {
        let document = self.repository.find_owned(id, agency_id).await?;
        Ok(DocumentResponse::from(document))
    }

    pub async fn list_by_agency(
        &self,
        agency_id: Uuid,
    ) -> Result<Vec<DocumentResponse>, AppError> {
        let documents = self.repository.find_by_agency(agency_id).await?;
        Ok(documents.into_iter().map(DocumentResponse::from).collect())
    }

    pub async fn delete(&self, id: Uuid, agency_id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id, agency_id).await?;
        Ok(())
    }
}
