use crate::models::document::Document;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request para registrar los metadatos de un documento.
/// blob_key es la clave opaca en el blob store externo; el backend
/// nunca la interpreta ni toca los bytes.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDocumentRequest {
    pub client_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,

    #[validate(length(min = 1, max = 255))]
    pub label: String,

    #[validate(length(min = 1, max = 500))]
    pub blob_key: String,

    #[validate(length(min = 3, max = 100))]
    pub mime_type: Option<String>,
}

/// Response de documento para la API
#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub id: Uuid,
    pub agency_id: Uuid,
    pub client_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
    pub label: String,
    pub blob_key: String,
    pub mime_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Document> for DocumentResponse {
    fn from(document: Document) -> Self {
        Self {
            id: document.id,
            agency_id: document.agency_id,
            client_id: document.client_id,
            vehicle_id: document.vehicle_id,
            label: document.label,
            blob_key: document.blob_key,
            mime_type: document.mime_type,
            created_at: document.created_at,
        }
    }
}
