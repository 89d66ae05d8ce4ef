use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::logger::Logger;
use crate::domain::provider::errors::ProviderError;
use crate::domain::provider::model::{NewProviderProps, Provider};
use crate::domain::provider::use_cases::create::{CreateProviderParams, CreateProviderUseCase};

pub struct CreateProviderUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository<Provider>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProviderUseCase for CreateProviderUseCaseImpl {
    async fn execute(&self, params: CreateProviderParams) -> Result<Provider, ProviderError> {
        let props = NewProviderProps::new(&params.name, &params.phone, &params.email);
        self.logger
            .info(&format!("Adding provider: {}", props.name));

        let provider = self.repository.add(props)?;

        self.logger
            .info(&format!("Provider added with id: {}", provider.id));
        Ok(provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::entity::{CatalogEntity, EntityId};
    use crate::domain::errors::RepositoryError;
    use mockall::mock;
    use mockall::predicate::function;

    mock! {
        pub ProviderRepo {}

        impl CatalogRepository<Provider> for ProviderRepo {
            fn all(&self) -> Result<Vec<Provider>, RepositoryError>;
            fn add(&self, draft: NewProviderProps) -> Result<Provider, RepositoryError>;
            fn remove(&self, id: EntityId) -> Result<(), RepositoryError>;
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
    async fn should_trim_fields_before_adding() {
        let mut mock_repo = MockProviderRepo::new();
        mock_repo
            .expect_add()
            .with(function(|draft: &NewProviderProps| {
                draft.name == "Acme Supplies" && draft.email == "sales@acme.test"
            }))
            .times(1)
            .returning(|draft| Ok(Provider::from_draft(10, draft)));

        let use_case = CreateProviderUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let provider = use_case
            .execute(CreateProviderParams {
                name: "  Acme Supplies  ".to_string(),
                phone: " +84 900 000 000 ".to_string(),
                email: "sales@acme.test ".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(provider.id, 10);
        assert_eq!(provider.phone, "+84 900 000 000");
    }

    #[tokio::test]
    async fn should_accept_empty_fields() {
        let mut mock_repo = MockProviderRepo::new();
        mock_repo
            .expect_add()
            .returning(|draft| Ok(Provider::from_draft(11, draft)));

        let use_case = CreateProviderUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let provider = use_case
            .execute(CreateProviderParams {
                name: String::new(),
                phone: String::new(),
                email: String::new(),
            })
            .await
            .unwrap();

        assert_eq!(provider.name, "");
    }
}
