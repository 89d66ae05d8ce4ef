use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::stats::CatalogStats;
use crate::domain::catalog::use_cases::get_stats::GetCatalogStatsUseCase;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::provider::model::Provider;

/// Recomputes the counts from both collections on every call.
pub struct GetCatalogStatsUseCaseImpl {
    pub products: Arc<dyn CatalogRepository<Product>>,
    pub providers: Arc<dyn CatalogRepository<Provider>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCatalogStatsUseCase for GetCatalogStatsUseCaseImpl {
    async fn execute(&self) -> Result<CatalogStats, RepositoryError> {
        let stats = CatalogStats {
            product_count: self.products.all()?.len(),
            provider_count: self.providers.all()?.len(),
        };
        self.logger.debug(&format!(
            "Catalog stats: {} products, {} providers",
            stats.product_count, stats.provider_count
        ));
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::entity::{CatalogEntity, EntityId};
    use crate::domain::product::model::NewProductProps;
    use crate::domain::provider::model::NewProviderProps;
    use mockall::mock;
    use std::sync::atomic::{AtomicUsize, Ordering};

    mock! {
        pub ProductRepo {}

        impl CatalogRepository<Product> for ProductRepo {
            fn all(&self) -> Result<Vec<Product>, RepositoryError>;
            fn add(&self, draft: NewProductProps) -> Result<Product, RepositoryError>;
            fn remove(&self, id: EntityId) -> Result<(), RepositoryError>;
        }
    }

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
    async fn should_count_both_collections_on_every_call() {
        let calls = AtomicUsize::new(0);
        let mut products = MockProductRepo::new();
        products.expect_all().times(2).returning(move || {
            // The second snapshot reflects one removal.
            let keep = 3 - calls.fetch_add(1, Ordering::SeqCst);
            Ok(Product::seed().into_iter().take(keep).collect())
        });
        let mut providers = MockProviderRepo::new();
        providers
            .expect_all()
            .times(2)
            .returning(|| Ok(Provider::seed()));

        let use_case = GetCatalogStatsUseCaseImpl {
            products: Arc::new(products),
            providers: Arc::new(providers),
            logger: mock_logger(),
        };

        let first = use_case.execute().await.unwrap();
        let second = use_case.execute().await.unwrap();

        assert_eq!(first.product_count, 3);
        assert_eq!(second.product_count, 2);
        assert_eq!(second.provider_count, 3);
    }
}
