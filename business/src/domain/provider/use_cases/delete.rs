use async_trait::async_trait;

use crate::domain::catalog::entity::EntityId;
use crate::domain::provider::errors::ProviderError;

pub struct DeleteProviderParams {
    pub id: EntityId,
}

#[async_trait]
pub trait DeleteProviderUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProviderParams) -> Result<(), ProviderError>;
}
