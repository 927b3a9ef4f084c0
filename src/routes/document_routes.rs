//! Rutas de documentos (metadatos; el binario vive en un almacén externo)

use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::document_controller::DocumentController;
use crate::dto::agency_dto::ApiResponse;
use crate::dto::document_dto::{CreateDocumentRequest, DocumentResponse};
use crate::middleware::auth::AuthAgency;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_document_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_document))
        .route("/", get(list_documents))
        .route("/:id", get(get_document))
        .route("/:id", delete(delete_document))
}

async fn create_document(
    auth: AuthAgency,
    State(state): State<AppState>,
    Json(request): Json<CreateDocumentRequest>,
) -> Result<Json<ApiResponse<DocumentResponse>>, AppError> {
    let controller = DocumentController::new(state.pool.clone());
    let response = controller.create(auth.agency_id, request).await?;
    Ok(Json(response))
}

async fn get_document(
    auth: AuthAgency,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentResponse>, AppError> {
    let controller = DocumentController::new(state.pool.clone());
    let response = controller.get_by_id(id, auth.agency_id).await?;
    Ok(Json(response))
}

async fn list_documents(
    auth: AuthAgency,
    State(state): State<AppState>,
) -> Result<Json<Vec<DocumentResponse>>, AppError> {
    let controller = DocumentController::new(state.pool.clone());
    let response = controller.list_by_agency(auth.agency_id).await?;
    Ok(Json(response))
}

async fn delete_document(
    auth: AuthAgency,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = DocumentController::new(state.pool.clone());
    controller.delete(id, auth.agency_id).await?;
    Ok(Json(ApiResponse::success_with_message(
        (),
        "Documento eliminado correctamente".to_string(),
    )))
}
