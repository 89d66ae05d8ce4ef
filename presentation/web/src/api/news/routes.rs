use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Html};

use business::domain::news::model::NewsSource;
use business::domain::news::use_cases::load::{LoadNewsParams, LoadNewsUseCase};

use crate::api::error::IntoErrorResponse;
use crate::api::tags::ApiTags;
use crate::render::render_news;

pub struct NewsApi {
    load_use_case: Arc<dyn LoadNewsUseCase>,
}

impl NewsApi {
    pub fn new(load_use_case: Arc<dyn LoadNewsUseCase>) -> Self {
        Self { load_use_case }
    }
}

#[OpenApi]
impl NewsApi {
    /// News panel
    ///
    /// `thanhnien` reads the live RSS feed; `tech`, `business`, `science` and
    /// `world` are built in. Unknown sources show `tech`.
    #[oai(path = "/news", method = "get", tag = "ApiTags::News")]
    async fn get_news(&self, source: Query<Option<String>>) -> NewsPanelResponse {
        let source = NewsSource::from_query(source.0.as_deref());

        match self.load_use_case.execute(LoadNewsParams { source }).await {
            Ok(articles) => NewsPanelResponse::Ok(Html(render_news(source, &articles))),
            Err(err) => NewsPanelResponse::BadGateway(err.into_error_fragment().1),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum NewsPanelResponse {
    #[oai(status = 200)]
    Ok(Html<String>),
    #[oai(status = 502)]
    BadGateway(Html<String>),
}
