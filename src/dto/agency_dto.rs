use crate::models::agency::Agency;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// Request para registrar una agencia
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterAgencyRequest {
    #[validate(length(min = 2, max = 255))]
    pub agency_name: String,

    #[validate(length(min = 5, max = 500))]
    pub agency_address: String,

    pub agency_siret: Option<String>,

    #[validate(length(min = 2, max = 255))]
    pub admin_full_name: String,

    #[validate(email)]
    pub admin_email: String,

    #[validate(length(min = 8))]
    pub admin_password: String,
}

// Request para actualizar el perfil de la agencia
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAgencyRequest {
    #[validate(length(min = 2, max = 255))]
    pub name: Option<String>,

    #[validate(length(min = 5, max = 500))]
    pub address: Option<String>,

    pub siret: Option<String>,

    #[validate(length(min = 2, max = 255))]
    pub admin_full_name: Option<String>,

    pub logo_key: Option<String>,
}

// Response de agencia (sin password hash)
#[derive(Debug, Serialize)]
pub struct AgencyResponse {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub siret: Option<String>,
    pub admin_full_name: String,
    pub admin_email: String,
    pub logo_key: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Agency> for AgencyResponse {
    fn from(agency: Agency) -> Self {
        Self {
            id: agency.id,
            name: agency.name,
            address: agency.address,
            siret: agency.siret,
            admin_full_name: agency.admin_full_name,
            admin_email: agency.admin_email,
            logo_key: agency.logo_key,
            created_at: agency.created_at,
        }
    }
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
