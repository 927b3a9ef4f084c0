//! Extractor de autenticación
//!
//! Extrae y valida el Bearer token del header Authorization y expone
//! la identidad de la agencia a los handlers. El agency_id siempre
//! viaja explícito desde aquí hasta los repositorios; ningún módulo
//! lee una identidad ambiente.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{agency_id_from_claims, extract_token_from_header, verify_token, JwtConfig};

/// Identidad de la agencia autenticada, extraída del JWT
#[derive(Debug, Clone)]
pub struct AuthAgency {
    pub agency_id: Uuid,
    pub admin_email: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthAgency {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                AppError::Unauthorized("Falta el header Authorization".to_string())
            })?;

        let token = extract_token_from_header(auth_header)?;
        let claims = verify_token(token, &JwtConfig::from(&state.config))?;
        let agency_id = agency_id_from_claims(&claims)?;

        Ok(AuthAgency {
            agency_id,
            admin_email: claims.sub,
        })
    }
}
