use async_trait::async_trait;

use crate::domain::provider::errors::ProviderError;
use crate::domain::provider::model::Provider;

#[async_trait]
pub trait GetAllProvidersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Provider>, ProviderError>;
}
