use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::feed::errors::FeedError;
use crate::domain::feed::model::{FeedView, categories, filter_by_category};
use crate::domain::feed::services::ProductFeedService;
use crate::domain::feed::use_cases::load::{LoadFeedParams, LoadFeedUseCase};
use crate::domain::logger::Logger;

pub struct LoadFeedUseCaseImpl {
    pub feed: Arc<dyn ProductFeedService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoadFeedUseCase for LoadFeedUseCaseImpl {
    async fn execute(&self, params: LoadFeedParams) -> Result<FeedView, FeedError> {
        self.logger.info("Loading products from remote feed");

        let products = self.feed.fetch().await.inspect_err(|e| {
            self.logger
                .error(&format!("Error loading product feed: {}", e));
        })?;

        let categories = categories(&products);
        let products = filter_by_category(products, params.category.as_deref());

        self.logger
            .info(&format!("Feed returned {} products", products.len()));
        Ok(FeedView {
            products,
            categories,
            selected: params.category,
        })
    }
}
