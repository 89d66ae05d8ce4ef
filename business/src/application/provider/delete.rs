use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::logger::Logger;
use crate::domain::provider::errors::ProviderError;
use crate::domain::provider::model::Provider;
use crate::domain::provider::use_cases::delete::{DeleteProviderParams, DeleteProviderUseCase};

pub struct DeleteProviderUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository<Provider>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProviderUseCase for DeleteProviderUseCaseImpl {
    async fn execute(&self, params: DeleteProviderParams) -> Result<(), ProviderError> {
        self.logger
            .info(&format!("Deleting provider: {}", params.id));
        self.repository.remove(params.id)?;
        Ok(())
    }
}
