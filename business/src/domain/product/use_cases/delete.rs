use async_trait::async_trait;

use crate::domain::catalog::entity::EntityId;
use crate::domain::product::errors::ProductError;

pub struct DeleteProductParams {
    pub id: EntityId,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
}
