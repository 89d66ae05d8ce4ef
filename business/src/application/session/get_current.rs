use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::session::model::Session;
use crate::domain::session::repository::SessionRepository;
use crate::domain::session::use_cases::get_current::GetCurrentSessionUseCase;

pub struct GetCurrentSessionUseCaseImpl {
    pub repository: Arc<dyn SessionRepository>,
}

#[async_trait]
impl GetCurrentSessionUseCase for GetCurrentSessionUseCaseImpl {
    async fn execute(&self) -> Result<Session, RepositoryError> {
        self.repository.current()
    }
}
