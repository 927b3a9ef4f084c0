use crate::models::client::Client;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request para crear un nuevo cliente
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClientRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 6, max = 30))]
    pub phone: Option<String>,

    #[validate(length(min = 2, max = 50))]
    pub driver_licence: Option<String>,

    #[validate(length(max = 500))]
    pub address: Option<String>,
}

/// Request para actualizar un cliente existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateClientRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 6, max = 30))]
    pub phone: Option<String>,

    #[validate(length(min = 2, max = 50))]
    pub driver_licence: Option<String>,

    #[validate(length(max = 500))]
    pub address: Option<String>,
}

/// Response de cliente para la API
#[derive(Debug, Serialize)]
pub struct ClientResponse {
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

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            agency_id: client.agency_id,
            first_name: client.first_name,
            last_name: client.last_name,
            email: client.email,
            phone: client.phone,
            driver_licence: client.driver_licence,
            address: client.address,
            created_at: client.created_at,
        }
    }
}
