use std::sync::Arc;

use poem_openapi::{Object, OpenApi, payload::Json};

use business::domain::catalog::stats::CatalogStats;
use business::domain::catalog::use_cases::get_stats::GetCatalogStatsUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

#[derive(Debug, Clone, Object)]
pub struct StatsResponse {
    pub product_count: u64,
    pub provider_count: u64,
}

impl From<CatalogStats> for StatsResponse {
    fn from(stats: CatalogStats) -> Self {
        Self {
            product_count: stats.product_count as u64,
            provider_count: stats.provider_count as u64,
        }
    }
}

pub struct StatsApi {
    stats_use_case: Arc<dyn GetCatalogStatsUseCase>,
}

impl StatsApi {
    pub fn new(stats_use_case: Arc<dyn GetCatalogStatsUseCase>) -> Self {
        Self { stats_use_case }
    }
}

#[OpenApi]
impl StatsApi {
    /// Catalog counts
    ///
    /// Recomputed from the stored collections on every call.
    #[oai(path = "/stats", method = "get", tag = "ApiTags::Stats")]
    async fn get_stats(&self) -> GetStatsResponse {
        match self.stats_use_case.execute().await {
            Ok(stats) => GetStatsResponse::Ok(Json(stats.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetStatsResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetStatsResponse {
    #[oai(status = 200)]
    Ok(Json<StatsResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
