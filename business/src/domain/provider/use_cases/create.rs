use async_trait::async_trait;

use crate::domain::provider::errors::ProviderError;
use crate::domain::provider::model::Provider;

pub struct CreateProviderParams {
    pub name: String,
    pub phone: String,
    pub email: String,
}

#[async_trait]
pub trait CreateProviderUseCase: Send + Sync {
    async fn execute(&self, params: CreateProviderParams) -> Result<Provider, ProviderError>;
}
