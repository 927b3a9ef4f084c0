use crate::dto::agency_dto::ApiResponse;
use crate::dto::client_dto::{ClientResponse, CreateClientRequest, UpdateClientRequest};
use crate::models::client::Client;
use crate::repositories::client_repository::ClientRepository;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct ClientController {
    repository: ClientRepository,
}

impl ClientController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClientRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        agency_id: Uuid,
        request: CreateClientRequest,
    ) -> Result<ApiResponse<ClientResponse>, AppError> {
        // Validar campos
        request.validate()?;

        let client = Client {
            id: Uuid::new_v4(),
            agency_id,
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone: request.phone,
            driver_licence: request.driver_licence,
            address: request.address,
            created_at: Utc::now(),
        };

        let saved = self.repository.create(&client).await?;

        Ok(ApiResponse::success_with_message(
            ClientResponse::from(saved),
            "Cliente creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid, agency_id: Uuid) -> Result<ClientResponse, AppError> {
        let client = self.repository.find_owned(id, agency_id).await?;
        Ok(ClientResponse::from(client))
    }

    pub async fn list_by_agency(
        &self,
        agency_id: Uuid,
    ) -> Result<Vec<ClientResponse>, AppError> {
        let clients = self.repository.find_by_agency(agency_id).await?;
        Ok(clients.into_iter().map(ClientResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        agency_id: Uuid,
        request: UpdateClientRequest,
    ) -> Result<ApiResponse<ClientResponse>, AppError> {
        request.validate()?;

        let client = self
            .repository
            .update(
                id,
                agency_id,
                request.first_name,
                request.last_name,
                request.email,
                request.phone,
                request.driver_licence,
                request.address,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            ClientResponse::from(client),
            "Cliente actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid, agency_id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id, agency_id).await?;
        Ok(())
    }
}
