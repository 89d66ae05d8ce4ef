use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::session::model::Session;
use crate::domain::session::repository::SessionRepository;
use crate::domain::session::use_cases::log_in::{LogInParams, LogInUseCase};

pub struct LogInUseCaseImpl {
    pub repository: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LogInUseCase for LogInUseCaseImpl {
    async fn execute(&self, params: LogInParams) -> Result<Session, RepositoryError> {
        let name = params.name.trim();
        if name.is_empty() {
            self.logger.debug("Ignoring login with an empty name");
            return self.repository.current();
        }

        let session = Session::logged_in(name);
        self.repository.save(&session)?;

        self.logger.info(&format!("User logged in: {}", name));
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub SessionRepo {}

        impl SessionRepository for SessionRepo {
            fn current(&self) -> Result<Session, RepositoryError>;
            fn save(&self, session: &Session) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_log_in_with_trimmed_name() {
        let mut mock_repo = MockSessionRepo::new();
        mock_repo
            .expect_save()
            .with(eq(Session::logged_in("alice")))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = LogInUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let session = use_case
            .execute(LogInParams {
                name: "  alice ".to_string(),
            })
            .await
            .unwrap();

        assert!(session.is_logged_in());
        assert_eq!(session.user(), Some("alice"));
    }

    #[tokio::test]
    async fn should_ignore_blank_name() {
        let mut mock_repo = MockSessionRepo::new();
        mock_repo.expect_save().never();
        mock_repo
            .expect_current()
            .returning(|| Ok(Session::logged_out()));

        let use_case = LogInUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let session = use_case
            .execute(LogInParams {
                name: "   ".to_string(),
            })
            .await
            .unwrap();

        assert!(!session.is_logged_in());
    }
}
