use async_trait::async_trait;

use crate::domain::news::errors::NewsError;
use crate::domain::news::model::{NewsArticle, NewsSource};

pub struct LoadNewsParams {
    pub source: NewsSource,
}

#[async_trait]
pub trait LoadNewsUseCase: Send + Sync {
    async fn execute(&self, params: LoadNewsParams) -> Result<Vec<NewsArticle>, NewsError>;
}
