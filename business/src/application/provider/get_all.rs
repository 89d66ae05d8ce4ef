use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::logger::Logger;
use crate::domain::provider::errors::ProviderError;
use crate::domain::provider::model::Provider;
use crate::domain::provider::use_cases::get_all::GetAllProvidersUseCase;

pub struct GetAllProvidersUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository<Provider>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProvidersUseCase for GetAllProvidersUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Provider>, ProviderError> {
        self.logger.debug("Fetching all providers");
        Ok(self.repository.all()?)
    }
}
