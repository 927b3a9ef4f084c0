use crate::dto::agency_dto::ApiResponse;
use crate::dto::dashboard_dto::StatsQuery;
use crate::services::statistics_service::{DashboardSummary, StatisticsService};
use crate::utils::errors::AppError;
use crate::utils::validation::validate_month;
use chrono::{Datelike, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct DashboardController {
    statistics_service: StatisticsService,
}

impl DashboardController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            statistics_service: StatisticsService::new(pool),
        }
    }

    /// Resumen del dashboard para el periodo pedido (mes actual por defecto)
    pub async fn summary(
        &self,
        agency_id: Uuid,
        query: StatsQuery,
    ) -> Result<ApiResponse<DashboardSummary>, AppError> {
        let today = Utc::now().date_naive();
        let month = query.month.unwrap_or_else(|| today.month());
        let year = query.year.unwrap_or_else(|| today.year());

        if validate_month(month).is_err() {
            return Err(AppError::ValidationError(
                "El mes debe estar entre 1 y 12".to_string(),
            ));
        }

        let summary = self
            .statistics_service
            .dashboard_summary(agency_id, month, year)
            .await?;

        Ok(ApiResponse::success(summary))
    }
}
