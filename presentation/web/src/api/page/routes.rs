use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Html};

use business::domain::catalog::use_cases::get_stats::GetCatalogStatsUseCase;
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::provider::use_cases::get_all::GetAllProvidersUseCase;
use business::domain::session::use_cases::get_current::GetCurrentSessionUseCase;

use crate::api::error::IntoErrorResponse;
use crate::api::tags::ApiTags;
use crate::render::{PageView, render_page};

pub struct PageApi {
    products_use_case: Arc<dyn GetAllProductsUseCase>,
    providers_use_case: Arc<dyn GetAllProvidersUseCase>,
    stats_use_case: Arc<dyn GetCatalogStatsUseCase>,
    session_use_case: Arc<dyn GetCurrentSessionUseCase>,
}

impl PageApi {
    pub fn new(
        products_use_case: Arc<dyn GetAllProductsUseCase>,
        providers_use_case: Arc<dyn GetAllProvidersUseCase>,
        stats_use_case: Arc<dyn GetCatalogStatsUseCase>,
        session_use_case: Arc<dyn GetCurrentSessionUseCase>,
    ) -> Self {
        Self {
            products_use_case,
            providers_use_case,
            stats_use_case,
            session_use_case,
        }
    }

    async fn render(&self) -> Result<String, IndexResponse> {
        let products = self
            .products_use_case
            .execute()
            .await
            .map_err(IndexResponse::from_error)?;
        let providers = self
            .providers_use_case
            .execute()
            .await
            .map_err(IndexResponse::from_error)?;
        let stats = self
            .stats_use_case
            .execute()
            .await
            .map_err(IndexResponse::from_error)?;
        let session = self
            .session_use_case
            .execute()
            .await
            .map_err(IndexResponse::from_error)?;

        Ok(render_page(&PageView {
            stats,
            session: &session,
            products: &products,
            providers: &providers,
        }))
    }
}

#[OpenApi]
impl PageApi {
    /// Index page
    ///
    /// Stats, session, products and providers in one document.
    #[oai(path = "/", method = "get", tag = "ApiTags::Page")]
    async fn index(&self) -> IndexResponse {
        match self.render().await {
            Ok(html) => IndexResponse::Ok(Html(html)),
            Err(response) => response,
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum IndexResponse {
    #[oai(status = 200)]
    Ok(Html<String>),
    #[oai(status = 500)]
    InternalError(Html<String>),
}

impl IndexResponse {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        IndexResponse::InternalError(err.into_error_fragment().1)
    }
}
