//! Modelo de Client
//!
//! Este módulo contiene el struct Client. Es un registro de datos puro,
//! sin lógica derivada. Mapea exactamente a la tabla clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Client principal - mapea exactamente a la tabla clients
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: Uuid,
    pub agency_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub driver_licence: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}
