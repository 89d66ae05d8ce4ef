use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository<Product>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        // Deleting an unknown id is not an error.
        self.repository.remove(params.id)?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::entity::EntityId;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::NewProductProps;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub ProductRepo {}

        impl CatalogRepository<Product> for ProductRepo {
            fn all(&self) -> Result<Vec<Product>, RepositoryError>;
            fn add(&self, draft: NewProductProps) -> Result<Product, RepositoryError>;
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
    async fn should_remove_product_by_id() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_remove()
            .with(eq(2))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id: 2 }).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_succeed_when_deleting_twice() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_remove().times(2).returning(|_| Ok(()));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(use_case.execute(DeleteProductParams { id: 7 }).await.is_ok());
        assert!(use_case.execute(DeleteProductParams { id: 7 }).await.is_ok());
    }

    #[tokio::test]
    async fn should_surface_persistence_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_remove()
            .returning(|_| Err(RepositoryError::Persistence));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id: 1 }).await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::Persistence)
        ));
    }
}
