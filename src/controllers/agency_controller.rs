use crate::dto::agency_dto::{AgencyResponse, ApiResponse, RegisterAgencyRequest, UpdateAgencyRequest};
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::models::agency::Agency;
use crate::repositories::agency_repository::AgencyRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};
use crate::utils::validation::validate_not_empty;
use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct AgencyController {
    repository: AgencyRepository,
}

impl AgencyController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AgencyRepository::new(pool),
        }
    }

    pub async fn register(
        &self,
        request: RegisterAgencyRequest,
    ) -> Result<ApiResponse<AgencyResponse>, AppError> {
        // Validar campos
        request.validate()?;

        if validate_not_empty(&request.agency_name).is_err() {
            return Err(AppError::ValidationError(
                "El nombre de la agencia es requerido".to_string(),
            ));
        }

        // Validar SIRET si existe
        if let Some(ref siret) = request.agency_siret {
            if !siret.is_empty() && (siret.len() != 14 || !siret.chars().all(char::is_numeric)) {
                return Err(AppError::ValidationError(
                    "El SIRET debe tener 14 dígitos".to_string(),
                ));
            }
        }

        // Verificar que el email no exista
        if self.repository.email_exists(&request.admin_email).await? {
            return Err(AppError::Conflict("El email ya está registrado".to_string()));
        }

        // Verificar que el SIRET no exista
        if let Some(ref siret) = request.agency_siret {
            if !siret.is_empty() && self.repository.siret_exists(siret).await? {
                return Err(AppError::Conflict("El SIRET ya está registrado".to_string()));
            }
        }

        // Hash de la contraseña
        let password_hash = hash(&request.admin_password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

        // Crear agencia
        let agency = Agency::new(
            request.agency_name,
            request.agency_address,
            request.agency_siret.filter(|s| !s.is_empty()),
            request.admin_full_name,
            request.admin_email,
            password_hash,
        );

        let saved = self.repository.create(&agency).await?;

        Ok(ApiResponse::success_with_message(
            AgencyResponse::from(saved),
            "Agencia registrada exitosamente".to_string(),
        ))
    }

    pub async fn login(
        &self,
        request: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        // Buscar agencia por email
        let agency = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        // Verificar contraseña
        let valid = verify(&request.password, &agency.admin_password_hash)
            .map_err(|e| AppError::Internal(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        // Generar JWT token
        let token = generate_token(agency.id, &agency.admin_email, jwt_config)?;

        Ok(LoginResponse::success(
            token,
            agency.id.to_string(),
            agency.name,
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<AgencyResponse, AppError> {
        let agency = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Agencia no encontrada".to_string()))?;

        Ok(AgencyResponse::from(agency))
    }

    pub async fn update_profile(
        &self,
        id: Uuid,
        request: UpdateAgencyRequest,
    ) -> Result<ApiResponse<AgencyResponse>, AppError> {
        request.validate()?;

        let mut agency = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Agencia no encontrada".to_string()))?;

        if let Some(name) = request.name {
            agency.name = name;
        }
        if let Some(address) = request.address {
            agency.address = address;
        }
        if let Some(siret) = request.siret {
            agency.siret = Some(siret).filter(|s| !s.is_empty());
        }
        if let Some(admin_full_name) = request.admin_full_name {
            agency.admin_full_name = admin_full_name;
        }
        if let Some(logo_key) = request.logo_key {
            agency.logo_key = Some(logo_key);
        }

        let updated = self.repository.update(&agency).await?;

        Ok(ApiResponse::success_with_message(
            AgencyResponse::from(updated),
            "Agencia actualizada exitosamente".to_string(),
        ))
    }
}
