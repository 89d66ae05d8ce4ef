use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::session::model::Session;

pub struct LogInParams {
    pub name: String,
}

#[async_trait]
pub trait LogInUseCase: Send + Sync {
    /// Returns the session after the attempt; a blank name leaves it unchanged.
    async fn execute(&self, params: LogInParams) -> Result<Session, RepositoryError>;
}
