use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::session::model::Session;

#[async_trait]
pub trait LogOutUseCase: Send + Sync {
    async fn execute(&self) -> Result<Session, RepositoryError>;
}
