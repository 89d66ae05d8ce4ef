use async_trait::async_trait;

use crate::domain::catalog::stats::CatalogStats;
use crate::domain::errors::RepositoryError;

#[async_trait]
pub trait GetCatalogStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<CatalogStats, RepositoryError>;
}
