use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::news::errors::NewsError;
use crate::domain::news::model::NewsArticle;
use crate::domain::news::services::NewsFeedService;
use crate::domain::news::use_cases::load::{LoadNewsParams, LoadNewsUseCase};

pub struct LoadNewsUseCaseImpl {
    pub feed: Arc<dyn NewsFeedService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoadNewsUseCase for LoadNewsUseCaseImpl {
    async fn execute(&self, params: LoadNewsParams) -> Result<Vec<NewsArticle>, NewsError> {
        self.logger
            .info(&format!("Loading news from {}", params.source));

        let items = self.feed.fetch(params.source).await.inspect_err(|e| {
            self.logger.error(&format!("Error loading RSS: {}", e));
        })?;

        Ok(items.into_iter().map(NewsArticle::from).collect())
    }
}
