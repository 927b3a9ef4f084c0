//! Modelo de Document
//!
//! Metadatos de documentos escaneados (contratos, permisos, facturas).
//! El contenido binario vive en un blob store externo; aquí solo se
//! guarda la clave opaca, que nunca se interpreta.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Document principal - mapea exactamente a la tabla documents
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Document {
    pub id: Uuid,
    pub agency_id: Uuid,
    pub client_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
    pub label: String,
    pub blob_key: String,
    pub mime_type: Option<String>,
    pub created_at: DateTime<Utc>,
}
