//! Modelo de Agency
//!
//! Este módulo contiene el struct Agency (el tenant del sistema).
//! Mapea exactamente a la tabla agencies con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Agency principal - mapea exactamente a la tabla agencies
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Agency {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub siret: Option<String>,
    pub admin_full_name: String,
    pub admin_email: String,
    #[serde(skip_serializing)]
    pub admin_password_hash: String,
    /// Clave opaca del logo en el blob store; nunca se interpreta aquí
    pub logo_key: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Agency {
    pub fn new(
        name: String,
        address: String,
        siret: Option<String>,
        admin_full_name: String,
        admin_email: String,
        admin_password_hash: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            address,
            siret,
            admin_full_name,
            admin_email,
            admin_password_hash,
            logo_key: None,
            created_at: Utc::now(),
        }
    }
}
