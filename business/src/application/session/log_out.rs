use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::session::model::Session;
use crate::domain::session::repository::SessionRepository;
use crate::domain::session::use_cases::log_out::LogOutUseCase;

pub struct LogOutUseCaseImpl {
    pub repository: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LogOutUseCase for LogOutUseCaseImpl {
    async fn execute(&self) -> Result<Session, RepositoryError> {
        let session = Session::logged_out();
        self.repository.save(&session)?;
        self.logger.info("User logged out");
        Ok(session)
    }
}
