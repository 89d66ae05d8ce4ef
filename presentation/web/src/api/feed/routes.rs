use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Html};

use business::domain::feed::use_cases::load::{LoadFeedParams, LoadFeedUseCase};

use crate::api::error::IntoErrorResponse;
use crate::api::tags::ApiTags;
use crate::render::render_feed_table;

pub struct FeedApi {
    load_use_case: Arc<dyn LoadFeedUseCase>,
}

impl FeedApi {
    pub fn new(load_use_case: Arc<dyn LoadFeedUseCase>) -> Self {
        Self { load_use_case }
    }
}

#[OpenApi]
impl FeedApi {
    /// Remote product feed
    ///
    /// Fetches the XML feed on every call and renders it as a table.
    #[oai(path = "/feed/products", method = "get", tag = "ApiTags::Feed")]
    async fn get_feed(
        &self,
        /// Exact category to keep; `all` or absent shows everything
        category: Query<Option<String>>,
    ) -> FeedPanelResponse {
        let params = LoadFeedParams {
            category: category.0.filter(|c| !c.is_empty()),
        };

        match self.load_use_case.execute(params).await {
            Ok(view) => FeedPanelResponse::Ok(Html(render_feed_table(&view))),
            Err(err) => FeedPanelResponse::BadGateway(err.into_error_fragment().1),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum FeedPanelResponse {
    #[oai(status = 200)]
    Ok(Html<String>),
    #[oai(status = 502)]
    BadGateway(Html<String>),
}
