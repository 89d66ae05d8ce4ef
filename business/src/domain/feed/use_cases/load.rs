use async_trait::async_trait;

use crate::domain::feed::errors::FeedError;
use crate::domain::feed::model::FeedView;

pub struct LoadFeedParams {
    pub category: Option<String>,
}

#[async_trait]
pub trait LoadFeedUseCase: Send + Sync {
    async fn execute(&self, params: LoadFeedParams) -> Result<FeedView, FeedError>;
}
